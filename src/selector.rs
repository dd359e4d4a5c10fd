//! Beacon picker projections of the catalog
//!
//! Two views of the same catalog: a flat option list headed by an "All"
//! entry, and a label → id map for the multi-select snippet picker. Null
//! catalog entries are skipped by both.

use crate::model::Beacon;
use crate::query::ALL;
use crate::ranking::AGGREGATOR_TAG;
use serde::Serialize;

/// Label of the leading "every beacon" option
pub const ALL_LABEL: &str = "All";

/// Which picker to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorMode {
    /// Single-select list with an "All" option
    #[default]
    Default,
    /// Multi-select keyed by label, for snippet generation
    GenerateSnippet,
}

/// One option of the single-select picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

/// Option text for a beacon: `"{name} ({organization}) "` plus the tag
///
/// Non-aggregators keep the trailing space; [`SnippetSelector`] keys are
/// trimmed.
pub fn option_label(beacon: &Beacon) -> String {
    let tags = if beacon.aggregator { AGGREGATOR_TAG } else { "" };
    format!("{} ({}) {}", beacon.name, beacon.organization, tags)
}

/// Build the single-select option list
pub fn beacon_options(catalog: &[Option<Beacon>]) -> Vec<SelectorOption> {
    let mut options = vec![SelectorOption {
        value: ALL.to_string(),
        label: ALL_LABEL.to_string(),
    }];

    options.extend(catalog.iter().flatten().map(|beacon| SelectorOption {
        value: beacon.id.clone(),
        label: option_label(beacon),
    }));

    options
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetEntry {
    pub label: String,
    pub id: String,
}

/// Multi-select picker: option texts plus a trimmed-label → id lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnippetSelector {
    /// Option texts in catalog order
    pub options: Vec<String>,
    /// Lookup entries in first-seen order; a repeated label keeps the last id
    pub entries: Vec<SnippetEntry>,
}

impl SnippetSelector {
    pub fn from_catalog(catalog: &[Option<Beacon>]) -> Self {
        let mut selector = Self::default();

        for beacon in catalog.iter().flatten() {
            let label = option_label(beacon);
            selector.insert(label.trim(), &beacon.id);
            selector.options.push(label);
        }

        selector
    }

    fn insert(&mut self, label: &str, id: &str) {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.id = id.to_string(),
            None => self.entries.push(SnippetEntry {
                label: label.to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// Resolve a picked label (trimmed or not) back to its beacon id
    pub fn id_for(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.id.as_str())
    }

    /// Resolve several picked labels, skipping any that are unknown
    pub fn ids_for<'a, I>(&self, labels: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels.into_iter().filter_map(|l| self.id_for(l)).collect()
    }
}
