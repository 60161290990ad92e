//! Server configuration
//!
//! Parsed once at startup from CLI flags with environment fallbacks, then
//! validated into a [`ServerConfig`] that the rest of the service reads.

use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_QUOTA: u64 = 1000;
pub const DEFAULT_LOG_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid CORS origin '{origin}'")]
  InvalidOrigin { origin: String },

  #[error("Quota must allow at least one call per key")]
  ZeroQuota,

  #[error("Request log capacity must be at least 1")]
  ZeroLogCapacity,
}

#[derive(Parser, Debug)]
#[command(name = "botito_server")]
#[command(about = "Bot-ito API Server - echo, slug and Spanish sentiment scoring")]
#[command(version)]
pub struct ServerArgs {
  /// Server bind address
  #[arg(long, env = "BOTITO_BIND", default_value = DEFAULT_BIND)]
  pub bind: SocketAddr,

  /// API key callers must send in `x-api-key` (unset runs in demo mode)
  #[arg(long, env = "API_KEY", hide_env_values = true)]
  pub api_key: Option<String>,

  /// Metered calls allowed per API key
  #[arg(long, env = "BOTITO_QUOTA", default_value_t = DEFAULT_QUOTA)]
  pub quota: u64,

  /// Allowed CORS origins, comma-separated ("*" allows any)
  #[arg(long = "cors-origin", env = "BOTITO_CORS_ORIGINS", value_delimiter = ',', default_value = "*")]
  pub cors_origins: Vec<String>,

  /// Number of requests kept in the in-memory request log
  #[arg(long, env = "BOTITO_LOG_CAPACITY", default_value_t = DEFAULT_LOG_CAPACITY)]
  pub log_capacity: usize,

  /// Enable verbose logging
  #[arg(short, long)]
  pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub bind: SocketAddr,
  pub api_key: Option<String>,
  pub quota_per_key: u64,
  pub cors_origins: Vec<String>,
  pub request_log_capacity: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
      api_key: None,
      quota_per_key: DEFAULT_QUOTA,
      cors_origins: vec!["*".to_string()],
      request_log_capacity: DEFAULT_LOG_CAPACITY,
    }
  }
}

impl ServerArgs {
  pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
    let config = ServerConfig {
      bind: self.bind,
      // An empty key behaves like no key at all
      api_key: self.api_key.filter(|key| !key.trim().is_empty()),
      quota_per_key: self.quota,
      cors_origins: self
        .cors_origins
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect(),
      request_log_capacity: self.log_capacity,
    };
    config.validate()?;
    Ok(config)
  }
}

impl ServerConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.quota_per_key == 0 {
      return Err(ConfigError::ZeroQuota);
    }
    if self.request_log_capacity == 0 {
      return Err(ConfigError::ZeroLogCapacity);
    }
    self.cors_layer().map(|_| ())
  }

  /// Whether callers must present the configured API key
  pub fn requires_api_key(&self) -> bool {
    self.api_key.is_some()
  }

  /// Build the CORS layer; a "*" entry (or no entries) allows any origin
  pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
    if self.cors_origins.is_empty() || self.cors_origins.iter().any(|origin| origin == "*") {
      return Ok(CorsLayer::permissive());
    }

    let origins = self
      .cors_origins
      .iter()
      .map(|origin| {
        HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin { origin: origin.clone() })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> ServerArgs {
    let mut argv = vec!["botito_server"];
    argv.extend_from_slice(args);
    ServerArgs::try_parse_from(argv).unwrap()
  }

  #[test]
  fn test_explicit_flags() {
    let config = parse(&["--bind", "0.0.0.0:9000", "--api-key", "secreto", "--quota", "3"]).into_config().unwrap();
    assert_eq!(config.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    assert_eq!(config.api_key.as_deref(), Some("secreto"));
    assert_eq!(config.quota_per_key, 3);
    assert!(config.requires_api_key());
  }

  #[test]
  fn test_empty_api_key_means_demo_mode() {
    let config = parse(&["--api-key", "  ", "--quota", "10"]).into_config().unwrap();
    assert!(config.api_key.is_none());
    assert!(!config.requires_api_key());
  }

  #[test]
  fn test_zero_quota_rejected() {
    let err = parse(&["--quota", "0"]).into_config().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroQuota));
  }

  #[test]
  fn test_zero_log_capacity_rejected() {
    let err = parse(&["--log-capacity", "0"]).into_config().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroLogCapacity));
  }

  #[test]
  fn test_cors_origin_list() {
    let config = parse(&["--cors-origin", "https://a.example,https://b.example"]).into_config().unwrap();
    assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    assert!(config.cors_layer().is_ok());
  }

  #[test]
  fn test_invalid_cors_origin_rejected() {
    let config = ServerConfig { cors_origins: vec!["bad\norigin".to_string()], ..ServerConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
  }

  #[test]
  fn test_default_config_is_valid() {
    assert!(ServerConfig::default().validate().is_ok());
  }
}
