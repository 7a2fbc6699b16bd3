use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vdp_fetch::app::App;
use vdp_fetch::Error;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vdp_fetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vdp-fetch");

    match App::new() {
        Ok(app) => match app.run().await {
            Ok(_) => {
                info!("Extraction completed successfully");
                Ok(())
            }
            Err(e) => {
                report_failure(&e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

/// One distinct diagnostic per failure class; nothing is retried.
fn report_failure(err: &Error) {
    match err {
        Error::Timeout(_) => error!("Extraction timed out: {}", err),
        Error::Network(_) => error!("Could not reach extraction endpoint: {}", err),
        Error::HttpStatus { .. } => error!("Extraction rejected: {}", err),
        _ => error!("Unexpected failure: {}", err),
    }
}
