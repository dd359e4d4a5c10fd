//! Query parameter extraction and validation
//!
//! A variant query is described by five page parameters: `beacon`, `chrom`,
//! `pos`, `alt` and `ref`. Every field is checked independently so a caller
//! can surface all problems in one pass. Nothing is dispatched unless all
//! five fields are present.

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Serialize;
use thiserror::Error;

/// Sentinel value meaning "every beacon" or "every reference genome"
pub const ALL: &str = "all";

/// A single missing or empty query field
///
/// Display strings match the notices shown to the user, one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Invalid beacon")]
    Beacon,
    #[error("Invalid chromosome")]
    Chromosome,
    #[error("Invalid position")]
    Position,
    #[error("Invalid allele")]
    Allele,
    #[error("Invalid genome")]
    Genome,
}

/// Raw query fields as read from the page; `None` and `""` both mean absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pub beacon: Option<String>,
    pub chrom: Option<String>,
    pub pos: Option<String>,
    pub alt: Option<String>,
    pub reference: Option<String>,
}

impl QueryParameters {
    /// Extract the five fields from a page URL or bare query string
    ///
    /// Accepts `http://host/page?beacon=..`, `?beacon=..` or `beacon=..`.
    /// Values are URL-decoded as UTF-8 with `+` read as a space. Only the first
    /// occurrence of each name is used.
    pub fn from_query_string(input: &str) -> Result<Self> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(_) => {
                let mut url = Url::parse("http://localhost/").context("Failed to build page URL")?;
                // A `#fragment` never belongs to the last value.
                let query = input.split('#').next().unwrap_or_default();
                url.set_query(Some(query.trim_start_matches('?')));
                url
            }
        };

        Ok(Self {
            beacon: get_parameter_by_name(&url, "beacon"),
            chrom: get_parameter_by_name(&url, "chrom"),
            pos: get_parameter_by_name(&url, "pos"),
            alt: get_parameter_by_name(&url, "alt"),
            reference: get_parameter_by_name(&url, "ref"),
        })
    }

    /// Check every field, reporting all that are missing
    pub fn validate(&self) -> std::result::Result<ValidQuery, Vec<ParameterError>> {
        let checks = [
            (&self.beacon, ParameterError::Beacon),
            (&self.chrom, ParameterError::Chromosome),
            (&self.pos, ParameterError::Position),
            (&self.alt, ParameterError::Allele),
            (&self.reference, ParameterError::Genome),
        ];

        let errors: Vec<ParameterError> = checks
            .iter()
            .filter(|(value, _)| is_null(value.as_deref()))
            .map(|(_, error)| *error)
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        // All five were checked above.
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Ok(ValidQuery {
            beacon: field(&self.beacon),
            chrom: field(&self.chrom),
            pos: field(&self.pos),
            alt: field(&self.alt),
            reference: field(&self.reference),
        })
    }
}

fn get_parameter_by_name(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn is_null(value: Option<&str>) -> bool {
    matches!(value, None | Some(""))
}

/// A fully-populated query, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidQuery {
    pub beacon: String,
    pub chrom: String,
    pub pos: String,
    pub alt: String,
    pub reference: String,
}

impl ValidQuery {
    /// Build the responses URL for this query
    ///
    /// `beacon` and `ref` are left out entirely when they hold the `all`
    /// sentinel; the service treats a missing parameter as "everything".
    pub fn responses_url(&self, responses_endpoint: &Url) -> Url {
        let mut url = responses_endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("chrom", &self.chrom)
                .append_pair("pos", &self.pos)
                .append_pair("allele", &self.alt);
            if self.beacon != ALL {
                pairs.append_pair("beacon", &self.beacon);
            }
            if self.reference != ALL {
                pairs.append_pair("ref", &self.reference);
            }
        }
        url
    }

    /// Labelled badges echoing the query back to the user
    pub fn summary(&self) -> Vec<SummaryBadge> {
        vec![
            SummaryBadge::new("Beacon", &self.beacon, BadgeStyle::Primary),
            SummaryBadge::new("Chromosome", &self.chrom, BadgeStyle::Success),
            SummaryBadge::new("Position", &self.pos, BadgeStyle::Warning),
            SummaryBadge::new("Allele", &self.alt, BadgeStyle::Danger),
            SummaryBadge::new("Genome", &self.reference, BadgeStyle::Info),
        ]
    }
}

/// Visual style hint for a summary badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBadge {
    pub label: String,
    pub value: String,
    pub style: BadgeStyle,
}

impl SummaryBadge {
    fn new(label: &str, value: &str, style: BadgeStyle) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(beacon: &str, chrom: &str, pos: &str, alt: &str, reference: &str) -> QueryParameters {
        let opt = |s: &str| Some(s.to_string());
        QueryParameters {
            beacon: opt(beacon),
            chrom: opt(chrom),
            pos: opt(pos),
            alt: opt(alt),
            reference: opt(reference),
        }
    }

    fn endpoint() -> Url {
        Url::parse("http://beacon.example.org/rest/responses").unwrap()
    }

    #[test]
    fn test_from_query_string() {
        let parsed = QueryParameters::from_query_string(
            "?beacon=all&chrom=13&pos=32888799&alt=G&ref=hg19",
        )
        .unwrap();
        assert_eq!(parsed, params("all", "13", "32888799", "G", "hg19"));
    }

    #[test]
    fn test_from_full_page_url() {
        let parsed = QueryParameters::from_query_string(
            "http://bob.example.org/results.html?chrom=X&pos=100&alt=A&ref=all&beacon=clinvar#top",
        )
        .unwrap();
        assert_eq!(parsed, params("clinvar", "X", "100", "A", "all"));
    }

    #[test]
    fn test_from_query_string_decoding() {
        let parsed = QueryParameters::from_query_string("beacon=my+beacon&chrom=%31%33&alt=%C3%A9").unwrap();
        assert_eq!(parsed.beacon.as_deref(), Some("my beacon"));
        assert_eq!(parsed.chrom.as_deref(), Some("13"));
        assert_eq!(parsed.alt.as_deref(), Some("é"));
        assert_eq!(parsed.pos, None);
    }

    #[test]
    fn test_bare_query_fragment_ignored() {
        let parsed = QueryParameters::from_query_string(
            "?beacon=all&chrom=1&pos=2&alt=A&ref=hg19#results",
        )
        .unwrap();
        assert_eq!(parsed.reference.as_deref(), Some("hg19"));

        let parsed = QueryParameters::from_query_string("chrom=1#pos=2").unwrap();
        assert_eq!(parsed.chrom.as_deref(), Some("1"));
        assert_eq!(parsed.pos, None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let parsed = QueryParameters::from_query_string("chrom=1&chrom=2").unwrap();
        assert_eq!(parsed.chrom.as_deref(), Some("1"));
    }

    #[test]
    fn test_validate_ok() {
        let valid = params("all", "1", "100", "T", "all").validate().unwrap();
        assert_eq!(valid.chrom, "1");
        assert_eq!(valid.reference, "all");
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let mut p = params("all", "", "100", "T", "hg19");
        p.alt = None;
        let errors = p.validate().unwrap_err();
        assert_eq!(errors, vec![ParameterError::Chromosome, ParameterError::Allele]);
    }

    #[test]
    fn test_validate_all_missing() {
        let errors = QueryParameters::default().validate().unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Invalid beacon",
                "Invalid chromosome",
                "Invalid position",
                "Invalid allele",
                "Invalid genome"
            ]
        );
    }

    #[test]
    fn test_responses_url_omits_all_sentinels() {
        let valid = params("all", "13", "32888799", "G", "all").validate().unwrap();
        let url = valid.responses_url(&endpoint());
        assert_eq!(url.as_str(), "http://beacon.example.org/rest/responses?chrom=13&pos=32888799&allele=G");
        assert!(!url.query_pairs().any(|(k, _)| k == "beacon" || k == "ref"));
    }

    #[test]
    fn test_responses_url_includes_specific_values() {
        let valid = params("clinvar", "13", "32888799", "G", "hg19").validate().unwrap();
        let url = valid.responses_url(&endpoint());
        assert_eq!(
            url.as_str(),
            "http://beacon.example.org/rest/responses?chrom=13&pos=32888799&allele=G&beacon=clinvar&ref=hg19"
        );
    }

    #[test]
    fn test_responses_url_form_encodes_reserved_characters() {
        let valid = params("my beacon", "13", "100", "A/T", "GRCh37:p13").validate().unwrap();
        let url = valid.responses_url(&endpoint());
        assert_eq!(
            url.as_str(),
            "http://beacon.example.org/rest/responses?chrom=13&pos=100&allele=A%2FT&beacon=my+beacon&ref=GRCh37%3Ap13"
        );
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(decoded.contains(&("allele".to_string(), "A/T".to_string())));
        assert!(decoded.contains(&("ref".to_string(), "GRCh37:p13".to_string())));
        assert!(decoded.contains(&("beacon".to_string(), "my beacon".to_string())));
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        let valid = params("ALL", "1", "1", "A", "all").validate().unwrap();
        let url = valid.responses_url(&endpoint());
        assert!(url.query_pairs().any(|(k, v)| k == "beacon" && v == "ALL"));
    }

    #[test]
    fn test_summary_badges() {
        let valid = params("all", "13", "100", "G", "hg19").validate().unwrap();
        let summary = valid.summary();
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].label, "Beacon");
        assert_eq!(summary[4].value, "hg19");
        assert_eq!(summary[4].style, BadgeStyle::Info);
    }
}
