//! Human-readable text output

use crate::aggregate::OrganizationRow;
use crate::client::QueryView;
use crate::query::{ParameterError, SummaryBadge};
use crate::ranking::RenderRow;
use crate::selector::{SelectorOption, SnippetSelector};
use crate::transport::FetchOutcome;
use std::fmt::Write;

/// Shown in place of results when a request times out
pub const TIMEOUT_MESSAGE: &str = "Request timed out.";

const RULE: &str = "═══════════════════════════════════════════════════════════";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render the single-select picker as `value<TAB>label` lines
pub fn format_options(options: &[SelectorOption]) -> String {
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "{}\t{}", option.value, option.label);
    }
    out
}

/// Render the snippet picker as `label => id` lines
pub fn format_snippet(selector: &SnippetSelector) -> String {
    let mut out = String::new();
    for entry in &selector.entries {
        let _ = writeln!(out, "{} => {}", entry.label, entry.id);
    }
    out
}

/// Render the organization table
///
/// Each organization appears once; its beacons follow on indented lines with
/// a Yes/No aggregator column.
pub fn format_organizations(rows: &[OrganizationRow]) -> String {
    let name_width = rows
        .iter()
        .flat_map(|r| r.beacons.iter())
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Beacon".len());

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:<w$}  {}", "Organization / Beacon", "Aggregator", w = name_width + 4);
    let _ = writeln!(out, "{}", RULE);

    for row in rows {
        let _ = writeln!(out, "{}", row.organization);
        for beacon in &row.beacons {
            let aggregator = if beacon.aggregator { "Yes" } else { "No" };
            let _ = writeln!(out, "    {:<w$}  {}", beacon.name, aggregator, w = name_width);
        }
    }

    let _ = writeln!(out, "{}", RULE);
    out
}

/// One notice per invalid field
pub fn format_parameter_errors(errors: &[ParameterError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(out, "{}", error);
    }
    out
}

pub fn format_summary(summary: &[SummaryBadge]) -> String {
    let badges: Vec<String> = summary
        .iter()
        .map(|b| format!("{}: {}", b.label, b.value))
        .collect();
    format!("{}\n", badges.join("  "))
}

/// Render ranked rows; the meta-aggregator row is bold
pub fn format_rows(rows: &[RenderRow]) -> String {
    let mut out = String::new();
    for row in rows {
        if row.emphasized {
            let _ = writeln!(out, "{:<6} {}{}{}", row.indicator.as_str(), BOLD, row.label, RESET);
        } else {
            let _ = writeln!(out, "{:<6} {}", row.indicator.as_str(), row.label);
        }
    }
    out
}

/// Render a whole query view: summary, then results or the failure notice
pub fn format_query(view: &QueryView) -> String {
    let mut out = format_summary(&view.summary);
    out.push('\n');
    out.push_str(&format_outcome(&view.results, |rows| format_rows(rows)));
    out
}

/// Render any fetch outcome, using `render` for the success case
pub fn format_outcome<T, F>(outcome: &FetchOutcome<T>, render: F) -> String
where
    F: FnOnce(&T) -> String,
{
    match outcome {
        FetchOutcome::Success(value) => render(value),
        FetchOutcome::Timeout => format!("{}\n", TIMEOUT_MESSAGE),
        FetchOutcome::TransportError(e) => format!("Request failed: {}\n", e),
    }
}
