//! Catalog aggregation by organization
//!
//! Grouping runs in two phases:
//!
//! 1. [`group_by_organization`] folds the catalog once and keeps each
//!    organization's beacons in catalog order. No sorting happens here.
//! 2. [`OrganizationGroups::into_sorted_rows`] orders the organizations
//!    lexicographically for display. The beacons inside each group keep
//!    their order.
//!
//! # Example
//!
//! ```
//! use bob_client::aggregate::group_by_organization;
//! use bob_client::model::Beacon;
//!
//! let catalog = vec![
//!     Beacon::new("b1", "Beacon 1", "Sanger", false),
//!     Beacon::new("b2", "Beacon 2", "Broad", false),
//!     Beacon::new("b3", "Beacon 3", "Sanger", true),
//! ];
//!
//! let groups = group_by_organization(&catalog);
//! assert_eq!(groups.get("Sanger").unwrap().len(), 2);
//!
//! let rows = groups.into_sorted_rows();
//! assert_eq!(rows[0].organization, "Broad");
//! assert_eq!(rows[1].beacons[1].name, "Beacon 3");
//! ```

use crate::model::Beacon;
use serde::Serialize;
use std::collections::HashMap;

/// One beacon inside an organization group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub name: String,
    pub aggregator: bool,
}

/// Organization name → beacons, in catalog order within each group
#[derive(Debug, Default)]
pub struct OrganizationGroups {
    groups: HashMap<String, Vec<GroupMember>>,
}

/// One row of the organization table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRow {
    pub organization: String,
    pub beacons: Vec<GroupMember>,
}

/// Group catalog entries by organization in a single pass
pub fn group_by_organization<'a, I>(beacons: I) -> OrganizationGroups
where
    I: IntoIterator<Item = &'a Beacon>,
{
    let mut groups: HashMap<String, Vec<GroupMember>> = HashMap::new();

    for beacon in beacons {
        groups
            .entry(beacon.organization.clone())
            .or_default()
            .push(GroupMember {
                name: beacon.name.clone(),
                aggregator: beacon.aggregator,
            });
    }

    OrganizationGroups { groups }
}

impl OrganizationGroups {
    /// Number of distinct organizations
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, organization: &str) -> Option<&[GroupMember]> {
        self.groups.get(organization).map(Vec::as_slice)
    }

    /// Organization names, unordered
    pub fn organizations(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Emit table rows with organizations in ordinal string order
    pub fn into_sorted_rows(self) -> Vec<OrganizationRow> {
        let mut rows: Vec<OrganizationRow> = self
            .groups
            .into_iter()
            .map(|(organization, beacons)| OrganizationRow { organization, beacons })
            .collect();
        rows.sort_by(|a, b| a.organization.cmp(&b.organization));
        rows
    }
}
