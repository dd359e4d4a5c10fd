//! bob CLI entry point

use anyhow::{Context, Result};
use bob_client::config::cli::{Cli, View};
use bob_client::config::{cli_convert, OutputFormat};
use bob_client::output::{json, text};
use bob_client::{BeaconClient, Config, FetchOutcome};
use log::{debug, info};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    cli.validate()?;

    let config = bob_client::config::toml::load_config(&cli)
        .context("Failed to load configuration")?;
    bob_client::config::validator::validate_config(&config)
        .context("Configuration validation failed")?;
    debug!("Using service at {} (timeout {} ms)", config.service.base_url, config.service.timeout_ms);

    let client = BeaconClient::from_config(&config.service)?;

    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run_view(&cli, &config, &client))
}

async fn run_view(
    cli: &Cli,
    config: &Config,
    client: &BeaconClient<bob_client::transport::HttpTransport>,
) -> Result<ExitCode> {
    let format = config.output.format;

    match cli.view {
        View::Select => {
            let outcome = client.beacon_options().await;
            emit(format, &outcome, |options| text::format_options(options))?;
        }
        View::Snippet => {
            let outcome = client.snippet_selector().await;
            emit(format, &outcome, |selector| text::format_snippet(selector))?;
        }
        View::Organizations => {
            let outcome = client.organization_table().await;
            match (format, &outcome) {
                // The table area is left empty when the catalog times out.
                (OutputFormat::Text, FetchOutcome::Timeout) => {
                    info!("Beacon list request timed out");
                }
                _ => emit(format, &outcome, |rows| text::format_organizations(rows))?,
            }
        }
        View::Query => {
            let params = cli_convert::query_parameters(cli)?;
            match client.query(&params).await {
                Ok(view) => match format {
                    OutputFormat::Text => print!("{}", text::format_query(&view)),
                    OutputFormat::Json => println!("{}", json::query_to_json(&view)?),
                },
                Err(errors) => {
                    match format {
                        OutputFormat::Text => eprint!("{}", text::format_parameter_errors(&errors)),
                        OutputFormat::Json => println!("{}", json::parameter_errors_to_json(&errors)?),
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn emit<T, F>(format: OutputFormat, outcome: &FetchOutcome<T>, render: F) -> Result<()>
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => print!("{}", text::format_outcome(outcome, render)),
        OutputFormat::Json => println!("{}", json::outcome_to_json(outcome)?),
    }
    Ok(())
}
