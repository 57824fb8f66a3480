//! Revue API end-to-end check runner
//!
//! Authenticates against the configured RevueCrafters deployment, runs the
//! ordered checks and reports pass/fail per check. Exits nonzero when any
//! check failed.

use clap::Parser;
use revue_e2e::{
    RevueClient, ScenarioContext,
    config::{LogFormat, load_config},
    scenario::{checks, run_checks},
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// End-to-end checks for the RevueCrafters Revue API
#[derive(Parser, Debug)]
#[command(name = "revue-e2e")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "REVUE_E2E_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REVUE_E2E_LOG_LEVEL")]
    log_level: Option<String>,

    /// Base URL of the Revue API
    #[arg(long)]
    base_url: Option<String>,

    /// Login email
    #[arg(long)]
    email: Option<String>,

    /// Login password
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up REVUE_EMAIL/REVUE_PASSWORD from a local .env if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = load_config(args.config.as_deref())?;

    // CLI flags override file and environment
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(email) = args.email {
        config.credentials.email = Some(email);
    }
    if let Some(password) = args.password {
        config.credentials.password = Some(password);
    }

    // Initialize logging
    let level = args.log_level.unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);
    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt_layer.json())
            .with(filter)
            .init(),
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Starting Revue API checks"
    );

    // Credentials must come from config, environment, or flags
    let email = config.credentials.email()?.to_string();
    let password = config.credentials.password()?.to_string();

    // Session bootstrap; fatal when the API is unreachable
    let client = RevueClient::login(&config.api, &email, &password)
        .await
        .inspect_err(|e| error!(error = %e, "Authentication bootstrap failed"))?;

    let mut ctx = ScenarioContext::new(client);
    let report = run_checks(&mut ctx, &checks()).await;

    for outcome in report.outcomes() {
        match &outcome.failure {
            None => info!(check = outcome.name, "PASS"),
            Some(reason) => error!(check = outcome.name, reason = %reason, "FAIL"),
        }
    }

    if !report.all_passed() {
        anyhow::bail!("{} of {} checks failed", report.failed(), report.len());
    }

    info!("All {} checks passed", report.len());
    Ok(())
}
