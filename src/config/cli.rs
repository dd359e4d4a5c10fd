//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which view to fetch and render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Beacon picker with an "All" option (default)
    Select,
    /// Multi-select picker mapping labels to beacon ids
    Snippet,
    /// Organization / beacon / aggregator table
    Organizations,
    /// Query beacons for a variant
    Query,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// bob - Beacon of Beacons client
#[derive(Parser, Debug)]
#[command(name = "bob")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// View to render: select, snippet, organizations, or query
    #[arg(long, value_enum, default_value = "select")]
    pub view: View,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Aggregation service base URL (e.g., "http://localhost:8080/rest/")
    #[arg(long, env = "BOB_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout (e.g., 30s, 500ms)
    #[arg(long)]
    pub timeout: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    // === Query Options ===
    /// Page query string or URL carrying beacon, chrom, pos, alt and ref
    #[arg(long)]
    pub page_query: Option<String>,

    /// Beacon id, or "all"
    #[arg(long)]
    pub beacon: Option<String>,

    /// Chromosome
    #[arg(long)]
    pub chrom: Option<String>,

    /// Position
    #[arg(long)]
    pub pos: Option<String>,

    /// Alternate allele
    #[arg(long)]
    pub alt: Option<String>,

    /// Reference genome, or "all"
    #[arg(long = "ref")]
    pub reference: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        let has_fields = [&self.beacon, &self.chrom, &self.pos, &self.alt, &self.reference]
            .iter()
            .any(|f| f.is_some());

        if self.view != View::Query && (self.page_query.is_some() || has_fields) {
            anyhow::bail!("query parameters are only accepted with --view query");
        }

        if self.page_query.is_some() && has_fields {
            anyhow::bail!("--page-query cannot be combined with --beacon/--chrom/--pos/--alt/--ref");
        }

        Ok(())
    }
}
