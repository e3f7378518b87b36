//! fnd-ui - Fake News Checker web widget
//!
//! **Module Identity:**
//! - Name: fnd-ui (Checker Widget)
//! - Port: 5731 (default)
//!
//! Serves the standalone checker widget and brokers analysis requests
//! between the widget and the remote classification backend. The
//! aggregation logic itself lives in fnd-common.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use fnd_ui::client::ClassifierClient;
use fnd_ui::{build_router, config, AppState};

#[derive(Debug, Parser)]
#[command(name = "fnd-ui", version, about = "Fake News Checker web widget")]
struct Args {
    /// Classification backend endpoint
    #[arg(long, env = "FND_BACKEND_URL")]
    backend_url: Option<String>,

    /// Port to listen on
    #[arg(long, env = "FND_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting FND Checker widget (fnd-ui)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let cfg = config::resolve(args.backend_url, args.port)?;

    let classifier = ClassifierClient::new(cfg.backend_url.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create classifier client: {}", e))?;
    info!("Classification backend: {}", classifier.endpoint());

    let state = AppState::new(classifier);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", cfg.port)).await?;
    info!("fnd-ui listening on http://127.0.0.1:{}", cfg.port);
    info!("Health check: http://127.0.0.1:{}/health", cfg.port);

    axum::serve(listener, app).await?;

    Ok(())
}
