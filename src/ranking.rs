//! Response ranking
//!
//! Turns a merged query response into display rows. Each row carries a
//! YES/NO/ERROR indicator derived from the beacon's tri-state outcome.
//!
//! The meta-aggregator ("Beacon of Beacons") is always shown first. Rows are
//! collected into two buckets and concatenated at the end: meta rows, then
//! every other row in arrival order. When more than one meta row arrives,
//! they come out in reverse arrival order: each one is placed in front of
//! the meta rows seen before it.

use crate::model::{BeaconResponse, ResponseOutcome};
use serde::Serialize;

/// Name of the beacon that aggregates all other beacons
pub const META_AGGREGATOR_NAME: &str = "Beacon of Beacons";

/// Annotation appended to aggregator rows
pub const AGGREGATOR_TAG: &str = "[aggregator]";

/// Tooltip attached to ERROR indicators
pub const ERROR_TOOLTIP: &str = "There was a problem obtaining the response for this beacon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    Error,
    Yes,
    No,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            Self::Error => Some(ERROR_TOOLTIP),
            _ => None,
        }
    }
}

impl From<ResponseOutcome> for Indicator {
    fn from(outcome: ResponseOutcome) -> Self {
        match outcome {
            ResponseOutcome::Unknown => Self::Error,
            ResponseOutcome::Present => Self::Yes,
            ResponseOutcome::Absent => Self::No,
        }
    }
}

/// One line of the query result table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    pub indicator: Indicator,
    /// `"{name} ({organization})"`, plus the aggregator tag when applicable
    pub label: String,
    /// Meta-aggregator rows are drawn in bold
    pub emphasized: bool,
    /// Set on non-meta rows whose beacon aggregates others
    pub aggregator_tag: bool,
}

impl RenderRow {
    fn meta(response: &BeaconResponse) -> Self {
        Self {
            indicator: response.response.into(),
            label: format!("{} ({})", response.beacon.name, response.beacon.organization),
            emphasized: true,
            aggregator_tag: false,
        }
    }

    fn regular(response: &BeaconResponse) -> Self {
        let aggregator_tag = response.beacon.aggregator;
        let mut label = format!("{} ({})", response.beacon.name, response.beacon.organization);
        if aggregator_tag {
            label.push(' ');
            label.push_str(AGGREGATOR_TAG);
        }
        Self {
            indicator: response.response.into(),
            label,
            emphasized: false,
            aggregator_tag,
        }
    }
}

pub fn is_meta_aggregator(response: &BeaconResponse) -> bool {
    response.beacon.name == META_AGGREGATOR_NAME
}

/// Order responses for display
pub fn rank_responses(responses: &[BeaconResponse]) -> Vec<RenderRow> {
    let mut meta_rows = Vec::new();
    let mut rows = Vec::with_capacity(responses.len());

    for response in responses {
        if is_meta_aggregator(response) {
            meta_rows.push(RenderRow::meta(response));
        } else {
            rows.push(RenderRow::regular(response));
        }
    }

    meta_rows.reverse();
    meta_rows.extend(rows);
    meta_rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Beacon;

    fn response(name: &str, org: &str, aggregator: bool, outcome: ResponseOutcome) -> BeaconResponse {
        BeaconResponse::new(Beacon::new(name, name, org, aggregator), outcome)
    }

    fn labels(rows: &[RenderRow]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_indicator_mapping() {
        assert_eq!(Indicator::from(ResponseOutcome::Unknown), Indicator::Error);
        assert_eq!(Indicator::from(ResponseOutcome::Present), Indicator::Yes);
        assert_eq!(Indicator::from(ResponseOutcome::Absent), Indicator::No);
        assert_eq!(Indicator::Error.tooltip(), Some(ERROR_TOOLTIP));
        assert_eq!(Indicator::Yes.tooltip(), None);
    }

    #[test]
    fn test_empty_responses() {
        assert!(rank_responses(&[]).is_empty());
    }

    #[test]
    fn test_arrival_order_preserved() {
        let responses = vec![
            response("C", "O", false, ResponseOutcome::Present),
            response("A", "O", false, ResponseOutcome::Absent),
            response("B", "O", false, ResponseOutcome::Unknown),
        ];
        let rows = rank_responses(&responses);
        assert_eq!(labels(&rows), vec!["C (O)", "A (O)", "B (O)"]);
        let indicators: Vec<Indicator> = rows.iter().map(|r| r.indicator).collect();
        assert_eq!(indicators, vec![Indicator::Yes, Indicator::No, Indicator::Error]);
    }

    #[test]
    fn test_meta_aggregator_moves_to_front() {
        let responses = vec![
            response("X", "Org", false, ResponseOutcome::Absent),
            response(META_AGGREGATOR_NAME, "DNAstack", true, ResponseOutcome::Present),
            response("Y", "Org", false, ResponseOutcome::Absent),
        ];
        let rows = rank_responses(&responses);
        assert_eq!(labels(&rows), vec!["Beacon of Beacons (DNAstack)", "X (Org)", "Y (Org)"]);
        assert!(rows[0].emphasized);
        assert!(!rows[1].emphasized);
    }

    #[test]
    fn test_meta_row_has_no_aggregator_tag() {
        let responses = vec![response(META_AGGREGATOR_NAME, "DNAstack", true, ResponseOutcome::Present)];
        let rows = rank_responses(&responses);
        assert!(!rows[0].label.contains(AGGREGATOR_TAG));
        assert!(!rows[0].aggregator_tag);
    }

    #[test]
    fn test_aggregator_tag_on_regular_rows() {
        let responses = vec![
            response("Hub", "Org", true, ResponseOutcome::Absent),
            response("Leaf", "Org", false, ResponseOutcome::Absent),
        ];
        let rows = rank_responses(&responses);
        assert_eq!(labels(&rows), vec!["Hub (Org) [aggregator]", "Leaf (Org)"]);
    }

    #[test]
    fn test_aggregator_tag_flag() {
        let responses = vec![
            response("Leaf", "Org", false, ResponseOutcome::Present),
            response(META_AGGREGATOR_NAME, "DNAstack", true, ResponseOutcome::Present),
            response("Hub", "Org", true, ResponseOutcome::Unknown),
        ];
        let rows = rank_responses(&responses);
        let flags: Vec<(&str, bool, bool)> = rows
            .iter()
            .map(|r| (r.label.as_str(), r.emphasized, r.aggregator_tag))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("Beacon of Beacons (DNAstack)", true, false),
                ("Leaf (Org)", false, false),
                ("Hub (Org) [aggregator]", false, true),
            ]
        );
    }

    #[test]
    fn test_multiple_meta_rows_reverse_encounter_order() {
        let responses = vec![
            response(META_AGGREGATOR_NAME, "First", true, ResponseOutcome::Present),
            response("X", "Org", false, ResponseOutcome::Absent),
            response(META_AGGREGATOR_NAME, "Second", true, ResponseOutcome::Unknown),
            response("Y", "Org", false, ResponseOutcome::Present),
        ];
        let rows = rank_responses(&responses);
        assert_eq!(
            labels(&rows),
            vec![
                "Beacon of Beacons (Second)",
                "Beacon of Beacons (First)",
                "X (Org)",
                "Y (Org)"
            ]
        );
    }

    #[test]
    fn test_meta_name_match_is_exact() {
        let responses = vec![
            response("X", "Org", false, ResponseOutcome::Absent),
            response("beacon of beacons", "Org", false, ResponseOutcome::Absent),
        ];
        let rows = rank_responses(&responses);
        assert_eq!(rows[1].label, "beacon of beacons (Org)");
        assert!(!rows[1].emphasized);
    }
}
