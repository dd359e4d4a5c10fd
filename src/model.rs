//! Beacon catalog and response records
//!
//! These are the parsed shapes of the two JSON endpoints the service exposes.
//! Records are immutable snapshots: one fetch produces them, one render
//! consumes them.

use serde::{Deserialize, Deserializer, Serialize};

/// A queryable beacon as listed by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beacon {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    /// Whether this beacon fans out to other beacons
    #[serde(default, deserialize_with = "null_as_false")]
    pub aggregator: bool,
}

impl Beacon {
    pub fn new(id: &str, name: &str, organization: &str, aggregator: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            organization: organization.to_string(),
            aggregator,
        }
    }
}

// The service sends `"aggregator": null` for beacons it never classified.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Outcome of asking one beacon about one variant
///
/// On the wire this is a nullable boolean. `Unknown` means the service could
/// not obtain an answer from that beacon; it is not the same as `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum ResponseOutcome {
    Present,
    Absent,
    #[default]
    Unknown,
}

impl From<Option<bool>> for ResponseOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Present,
            Some(false) => Self::Absent,
            None => Self::Unknown,
        }
    }
}

impl From<ResponseOutcome> for Option<bool> {
    fn from(value: ResponseOutcome) -> Self {
        match value {
            ResponseOutcome::Present => Some(true),
            ResponseOutcome::Absent => Some(false),
            ResponseOutcome::Unknown => None,
        }
    }
}

/// One beacon's answer within a merged query response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconResponse {
    pub beacon: Beacon,
    #[serde(default)]
    pub response: ResponseOutcome,
}

impl BeaconResponse {
    pub fn new(beacon: Beacon, response: ResponseOutcome) -> Self {
        Self { beacon, response }
    }
}
