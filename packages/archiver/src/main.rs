// Entry point: one archive pass per invocation.
//
// Exit code 0 on success or when no stage is scheduled, 1 on any failure.

use archiver_core::kernel::ArchiverDeps;
use archiver_core::{Config, RunOutcome, Runner};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,archiver_core=debug,standings=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting live stage archiver");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let date_override = config.date_override;
    if let Some(date) = date_override {
        tracing::info!(date = %date, "Using date override");
    }

    let runner = Runner::new(ArchiverDeps::from_config(config)).with_date_override(date_override);

    // Failures are logged by the runner with stage and step.
    match runner.run_today().await {
        Ok(RunOutcome::NoStage { .. }) => ExitCode::SUCCESS,
        Ok(RunOutcome::Archived { stage, stored, .. }) => {
            tracing::info!(stage, key = %stored.key, "Run complete");
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
