//! API Contract Runner
//!
//! Runs the contract cases against the pet-store and reqres services, prints
//! each case's transcript and a verdict summary, and exits non-zero when any
//! case failed.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use api_contract_client::ApiClient;
use api_contract_scenarios::{run_suite, CaseName};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use config::RunnerConfig;
use telemetry::TelemetryConfig;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cases to run: create-pet, get-available-pets, reqres-login (default: all)
    #[arg(value_name = "CASE")]
    cases: Vec<CaseName>,

    /// Configuration directory
    #[arg(short, long, default_value = "config")]
    config_dir: String,

    /// Environment-specific configuration file to layer on top of the defaults
    #[arg(short, long, default_value = "development")]
    environment: String,

    /// Pet-store base URL
    #[arg(long)]
    petstore_url: Option<String>,

    /// Reqres base URL
    #[arg(long)]
    reqres_url: Option<String>,

    /// Log level
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = RunnerConfig::load_or_default(&args.config_dir, &args.environment);

    // Override with command-line arguments
    if let Some(url) = args.petstore_url {
        config.petstore.base_url = url;
    }
    if let Some(url) = args.reqres_url {
        config.reqres.base_url = url;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }
    if args.json_logs {
        config.logging.json_format = true;
    }

    let telemetry_config = TelemetryConfig::new()
        .with_log_level(config.logging.level.clone())
        .with_json_format(config.logging.json_format)
        .with_thread_ids(config.logging.include_thread_ids)
        .with_target(config.logging.include_target);
    telemetry::init_with_config(telemetry_config).context("Failed to initialize logging")?;

    let cases = selected_cases(&args.cases);
    info!("Starting API contract suite");
    info!("Pet-store: {}", config.petstore.base_url);
    info!("Reqres: {}", config.reqres.base_url);

    let client = ApiClient::new(&config.client_config()).context("Failed to build HTTP client")?;
    let report = run_suite(&cases, &client, &config.targets()).await;

    println!();
    println!("{}", report.summary());

    Ok(ExitCode::from(report.exit_code()))
}

/// Cases to run, in first-mention order without repeats; all when none named
fn selected_cases(requested: &[CaseName]) -> Vec<CaseName> {
    if requested.is_empty() {
        return CaseName::ALL.to_vec();
    }

    let mut cases = Vec::with_capacity(requested.len());
    for case in requested {
        if !cases.contains(case) {
            cases.push(*case);
        }
    }
    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_cases_defaults_to_all() {
        assert_eq!(selected_cases(&[]), CaseName::ALL.to_vec());
    }

    #[test]
    fn test_selected_cases_dedups_in_order() {
        let cases = selected_cases(&[
            CaseName::ReqresLogin,
            CaseName::CreatePet,
            CaseName::ReqresLogin,
        ]);
        assert_eq!(cases, vec![CaseName::ReqresLogin, CaseName::CreatePet]);
    }

    #[test]
    fn test_args_parse_cases_and_overrides() {
        let args = Args::try_parse_from([
            "api-contract-runner",
            "create-pet",
            "reqres-login",
            "--petstore-url",
            "http://localhost:4010/v2",
        ])
        .unwrap();

        assert_eq!(args.cases, vec![CaseName::CreatePet, CaseName::ReqresLogin]);
        assert_eq!(args.petstore_url.as_deref(), Some("http://localhost:4010/v2"));
        assert!(args.reqres_url.is_none());
        assert_eq!(args.config_dir, "config");
    }

    #[test]
    fn test_args_reject_unknown_case() {
        assert!(Args::try_parse_from(["api-contract-runner", "delete-pet"]).is_err());
    }
}
