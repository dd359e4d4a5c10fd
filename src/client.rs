//! Beacon of Beacons client
//!
//! One method per user action. Each issues at most one request and resolves
//! to a [`FetchOutcome`] holding the finished view model, so a caller only
//! has to paint it.

use crate::aggregate::{group_by_organization, OrganizationRow};
use crate::config::ServiceConfig;
use crate::model::{Beacon, BeaconResponse};
use crate::query::{ParameterError, QueryParameters, SummaryBadge};
use crate::ranking::{rank_responses, RenderRow};
use crate::selector::{beacon_options, SelectorOption, SnippetSelector};
use crate::transport::{FetchOutcome, HttpTransport, Transport, TransportError};
use anyhow::Context;
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The two service endpoints, resolved from the configured base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub beacons: Url,
    pub responses: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        // Without a trailing slash `join` would replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized)
            .with_context(|| format!("Invalid service base URL: {}", base_url))?;

        Ok(Self {
            beacons: base.join("beacons").context("Failed to build beacons URL")?,
            responses: base.join("responses").context("Failed to build responses URL")?,
        })
    }
}

/// Result of a validated query: the echoed parameters and the ranked rows
#[derive(Debug)]
pub struct QueryView {
    pub summary: Vec<SummaryBadge>,
    pub results: FetchOutcome<Vec<RenderRow>>,
}

pub struct BeaconClient<T: Transport> {
    endpoints: Endpoints,
    transport: T,
}

impl BeaconClient<HttpTransport> {
    /// Client over HTTP using the configured base URL and timeout
    pub fn from_config(service: &ServiceConfig) -> crate::Result<Self> {
        let transport = HttpTransport::new(service.timeout())
            .context("Failed to create HTTP client")?;
        Self::new(&service.base_url, transport)
    }
}

impl<T: Transport> BeaconClient<T> {
    pub fn new(base_url: &str, transport: T) -> crate::Result<Self> {
        Ok(Self {
            endpoints: Endpoints::new(base_url)?,
            transport,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the raw catalog, null entries included
    pub async fn catalog(&self) -> FetchOutcome<Vec<Option<Beacon>>> {
        let url = &self.endpoints.beacons;
        let outcome = self.fetch::<Vec<Option<Beacon>>>(url).await;

        outcome.map(|catalog| {
            let skipped = catalog.iter().filter(|b| b.is_none()).count();
            if skipped > 0 {
                warn!("Catalog contained {} null entries; skipping them", skipped);
            }
            debug!("Catalog lists {} beacons", catalog.len() - skipped);
            catalog
        })
    }

    /// Single-select beacon picker
    pub async fn beacon_options(&self) -> FetchOutcome<Vec<SelectorOption>> {
        self.catalog().await.map(|catalog| beacon_options(&catalog))
    }

    /// Multi-select picker for snippet generation
    pub async fn snippet_selector(&self) -> FetchOutcome<SnippetSelector> {
        self.catalog()
            .await
            .map(|catalog| SnippetSelector::from_catalog(&catalog))
    }

    /// Organization table, organizations sorted, beacons in catalog order
    pub async fn organization_table(&self) -> FetchOutcome<Vec<OrganizationRow>> {
        self.catalog().await.map(|catalog| {
            let groups = group_by_organization(catalog.iter().flatten());
            debug!("Grouped catalog into {} organizations", groups.len());
            groups.into_sorted_rows()
        })
    }

    /// Validate `params` and, only if every field is present, run the query
    ///
    /// Validation failures come back as the full list of missing fields and
    /// no request is sent.
    pub async fn query(&self, params: &QueryParameters) -> Result<QueryView, Vec<ParameterError>> {
        let query = params.validate()?;
        let url = query.responses_url(&self.endpoints.responses);

        let results = self
            .fetch::<Vec<BeaconResponse>>(&url)
            .await
            .map(|responses| {
                debug!("Ranking {} beacon responses", responses.len());
                rank_responses(&responses)
            });

        Ok(QueryView {
            summary: query.summary(),
            results,
        })
    }

    async fn fetch<D: DeserializeOwned>(&self, url: &Url) -> FetchOutcome<D> {
        self.transport.get_json(url).await.and_then(|body: Value| {
            serde_json::from_value(body).map_err(|e| TransportError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
        })
    }
}
