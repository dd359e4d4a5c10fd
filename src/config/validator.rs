//! Configuration validation

use super::*;
use anyhow::{Context, Result};
use reqwest::Url;

/// Longest accepted request deadline (10 minutes)
pub const MAX_TIMEOUT_MS: u64 = 600_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_service(&config.service)?;

    Ok(())
}

/// Validate service configuration
pub fn validate_service(service: &ServiceConfig) -> Result<()> {
    let url = Url::parse(&service.base_url)
        .with_context(|| format!("base_url is not a valid URL: {}", service.base_url))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("base_url must use http or https, got {}", url.scheme());
    }

    if url.query().is_some() || url.fragment().is_some() {
        anyhow::bail!("base_url must not carry a query or fragment: {}", service.base_url);
    }

    if service.timeout_ms == 0 || service.timeout_ms > MAX_TIMEOUT_MS {
        anyhow::bail!(
            "timeout_ms must be between 1 and {}, got {}",
            MAX_TIMEOUT_MS,
            service.timeout_ms
        );
    }

    Ok(())
}
