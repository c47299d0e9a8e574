//! Serve command: run the HTTP API until interrupted.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::Config;
use crate::http::{AppState, create_router};

/// Binds the listener and serves requests until Ctrl-C.
pub async fn run(config: &Config, bind: Option<SocketAddr>) -> Result<()> {
    let addr = bind.unwrap_or(config.bind_address);
    let state = AppState::from_config(config);
    let app = create_router(state, config.max_body_bytes);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
