//! Bot-ito REST Server
//!
//! HTTP API server for the Bot-ito text utilities.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use botito::config::ServerArgs;
use botito::server::startup::start_server;

#[tokio::main]
async fn main() -> Result<()> {
  let args = ServerArgs::parse();

  // RUST_LOG wins over the built-in filters
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if args.verbose {
      EnvFilter::new("botito=debug,tower_http=debug,info")
    } else {
      EnvFilter::new("botito=info,tower_http=warn,warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  let config = args.into_config()?;
  tracing::info!(version = env!("CARGO_PKG_VERSION"), bind = %config.bind, "Starting Bot-ito API server");

  start_server(config).await?;

  Ok(())
}
