//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::OutputFormat;
use crate::query::QueryParameters;
use anyhow::{Context, Result};

/// Parse a timeout string (e.g., "500ms", "30s", "1m") to milliseconds
///
/// A bare number is taken as milliseconds.
pub fn parse_timeout_ms(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("ms") {
        (s.trim_end_matches("ms"), 1u64)
    } else if s.ends_with("s") || s.ends_with("sec") {
        (s.trim_end_matches("sec").trim_end_matches("s"), 1000)
    } else if s.ends_with("m") || s.ends_with("min") {
        (s.trim_end_matches("min").trim_end_matches("m"), 60_000)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.parse()
        .with_context(|| format!("Invalid timeout format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Timeout too large: {}", s))
}

/// Convert CLI output format
pub fn convert_format(format: cli::Format) -> OutputFormat {
    match format {
        cli::Format::Text => OutputFormat::Text,
        cli::Format::Json => OutputFormat::Json,
    }
}

/// Collect query parameters from either `--page-query` or the field flags
pub fn query_parameters(cli: &cli::Cli) -> Result<QueryParameters> {
    if let Some(ref page_query) = cli.page_query {
        return QueryParameters::from_query_string(page_query)
            .context("Invalid page query");
    }

    Ok(QueryParameters {
        beacon: cli.beacon.clone(),
        chrom: cli.chrom.clone(),
        pos: cli.pos.clone(),
        alt: cli.alt.clone(),
        reference: cli.reference.clone(),
    })
}
