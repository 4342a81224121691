//! Skylark - board KPI and BI chat server
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use skylark_api::utils::logging::{self, LogFormat};
use skylark_api::{router, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    logging::init(LogFormat::from_env())?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let config = skylark_infra::config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = Arc::new(AppContext::new(config).context("failed to initialize application")?);
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "Skylark listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
