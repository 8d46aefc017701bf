//! Proxyboot - Main Entry Point
//!
//! Runs the first-run setup sequence against the proxy manager API:
//! authenticate, rotate the default admin credentials, register the
//! hardcoded proxy hosts. Exits with status 1 if authentication fails.

mod plan;

use proxyboot_application::{SetupError, SetupFlow};
use proxyboot_infrastructure::NpmHttpClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        url = plan::NPM_API_URL,
        "starting proxyboot v{}",
        env!("CARGO_PKG_VERSION")
    );

    let plan = plan::setup_plan()?;
    let client = NpmHttpClient::new(plan::NPM_API_URL)?;
    let flow = SetupFlow::new(client);

    match flow.execute(&plan).await {
        Ok(report) => {
            tracing::info!(
                credentials_rotated = report.credentials_rotated,
                hosts_created = report.hosts_created,
                "setup complete"
            );
            Ok(())
        }
        Err(SetupError::AuthenticationFailed) => {
            eprintln!("Authentication failed. Please check your credentials.");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
