use std::process::ExitCode;

use market_brief::{BriefClient, ReportConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing("info");

    let config = ReportConfig::default();
    let client = match BriefClient::builder().build() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "cannot build http client");
            return ExitCode::FAILURE;
        }
    };

    match market_brief::generate_report(&client, &config).await {
        Ok(written) => {
            tracing::info!(
                current = %written.current.display(),
                archive = %written.archive.display(),
                "wrote report"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "report generation failed");
            ExitCode::FAILURE
        }
    }
}
