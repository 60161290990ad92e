//! Shared application state handed to every handler and middleware

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::server::quota::UsageCounter;
use crate::server::request_log::RequestLog;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<ServerConfig>,
  pub usage: UsageCounter,
  pub request_log: RequestLog,
  pub started_at: DateTime<Utc>,
}

impl AppState {
  pub fn new(config: ServerConfig) -> Self {
    let request_log = RequestLog::new(config.request_log_capacity);
    Self { config: Arc::new(config), usage: UsageCounter::new(), request_log, started_at: Utc::now() }
  }
}
