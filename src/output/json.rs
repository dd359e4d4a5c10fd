//! JSON output formatting
//!
//! Every view is wrapped in a report carrying a `status` so consumers can
//! tell a rendered view from a timeout, a transport failure or a rejected
//! query without parsing messages.

use crate::client::QueryView;
use crate::query::{ParameterError, SummaryBadge};
use crate::ranking::{Indicator, RenderRow};
use crate::transport::FetchOutcome;
use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStatus {
    Ok,
    Timeout,
    Error,
    Invalid,
}

/// Envelope for a fetched view
#[derive(Debug, Serialize)]
pub struct JsonReport<'a, T: Serialize> {
    pub status: JsonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a, T: Serialize> JsonReport<'a, T> {
    pub fn from_outcome(outcome: &'a FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Success(data) => Self {
                status: JsonStatus::Ok,
                data: Some(data),
                error: None,
            },
            FetchOutcome::Timeout => Self {
                status: JsonStatus::Timeout,
                data: None,
                error: Some(super::text::TIMEOUT_MESSAGE.to_string()),
            },
            FetchOutcome::TransportError(e) => Self {
                status: JsonStatus::Error,
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Result row with its indicator tooltip spelled out
#[derive(Debug, Serialize)]
pub struct JsonRow<'a> {
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<&'static str>,
    pub label: &'a str,
    pub emphasized: bool,
    pub aggregator: bool,
}

impl<'a> From<&'a RenderRow> for JsonRow<'a> {
    fn from(row: &'a RenderRow) -> Self {
        Self {
            indicator: row.indicator,
            tooltip: row.indicator.tooltip(),
            label: &row.label,
            emphasized: row.emphasized,
            aggregator: row.aggregator_tag,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonQueryReport<'a> {
    pub status: JsonStatus,
    pub summary: &'a [SummaryBadge],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<JsonRow<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonInvalidQuery {
    pub status: JsonStatus,
    pub errors: Vec<String>,
}

/// Serialize any fetched view
pub fn outcome_to_json<T: Serialize>(outcome: &FetchOutcome<T>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_outcome(outcome))?)
}

pub fn query_to_json(view: &QueryView) -> Result<String> {
    let envelope = JsonReport::from_outcome(&view.results);
    let report = JsonQueryReport {
        status: envelope.status,
        summary: &view.summary,
        rows: envelope
            .data
            .map(|rows| rows.iter().map(JsonRow::from).collect()),
        error: envelope.error,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn parameter_errors_to_json(errors: &[ParameterError]) -> Result<String> {
    let report = JsonInvalidQuery {
        status: JsonStatus::Invalid,
        errors: errors.iter().map(|e| e.to_string()).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
