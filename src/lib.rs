//! bob - client for the Beacon of Beacons aggregation service
//!
//! Discovers the beacons a Beacon of Beacons service knows about, queries
//! them for the presence of an allele, and turns the answers into view
//! models ready to paint.
//!
//! # Architecture
//!
//! - **Query validation**: every missing field is reported, nothing is sent until all are present
//! - **Transport**: one JSON request per action with a single terminal outcome
//! - **Aggregation**: catalog grouped by organization, organizations sorted for display
//! - **Ranking**: tri-state YES/NO/ERROR rows with the meta-aggregator first
//! - **Selectors**: beacon pickers built from the catalog

pub mod aggregate;
pub mod client;
pub mod config;
pub mod model;
pub mod output;
pub mod query;
pub mod ranking;
pub mod selector;
pub mod transport;

// Re-export commonly used types
pub use client::BeaconClient;
pub use config::Config;
pub use transport::{FetchOutcome, Transport};

/// Result type used throughout bob
pub type Result<T> = anyhow::Result<T>;
