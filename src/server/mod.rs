//! HTTP API server
//!
//! One endpoint per feature plus a generic `/tasks` route, all backed by the
//! same task dispatcher.

mod routes;

pub use routes::router;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::dispatch::Dispatcher;
use crate::stats::UsageStats;

pub struct AppState {
    pub dispatcher: Dispatcher,
    pub stats: UsageStats,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            stats: UsageStats::new(),
        }
    }
}

/// Run the HTTP server until ctrl-c.
pub async fn run(settings: &Settings) -> Result<()> {
    let dispatcher = Dispatcher::from_settings(settings)?;
    let state = Arc::new(AppState::new(dispatcher));

    let addr = settings
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", settings.bind_addr()))?;

    info!("starting server on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(state, settings.server.max_body_bytes).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
