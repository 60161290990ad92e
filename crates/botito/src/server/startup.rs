//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::server::routing::create_router;
use crate::server::state::AppState;

/// Start the REST server and serve until Ctrl-C
#[cfg(not(tarpaulin_include))]
pub async fn start_server(config: ServerConfig) -> Result<()> {
  let cors = config.cors_layer()?;
  let addr = config.bind;

  if config.requires_api_key() {
    tracing::info!(quota = config.quota_per_key, "API key required on protected endpoints");
  } else {
    tracing::warn!(quota = config.quota_per_key, "No API key configured, running in demo mode");
  }

  let state = AppState::new(config);
  let app = create_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

  let listener = TcpListener::bind(addr).await?;
  tracing::info!(%addr, "Server listening");

  match serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
    Ok(()) => {
      tracing::info!("Server shutdown gracefully");
      Ok(())
    }
    Err(e) => {
      tracing::error!("Server error: {e}");
      Err(anyhow::anyhow!("Server error: {}", e))
    }
  }
}

#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("Failed to listen for shutdown signal: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("Shutdown signal received");
}
