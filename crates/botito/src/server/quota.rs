//! Per-key usage counting with a hard cap

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::error::ServiceError;

/// Snapshot of one key's consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
  pub used: u64,
  pub limit: u64,
}

impl Usage {
  pub fn remaining(&self) -> u64 {
    self.limit.saturating_sub(self.used)
  }
}

/// Shared call counter keyed by API key
#[derive(Clone, Default)]
pub struct UsageCounter {
  counts: Arc<Mutex<HashMap<String, u64>>>,
}

impl UsageCounter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Count one call for `key` unless it already reached `limit`.
  ///
  /// The check and the increment share one critical section, so concurrent
  /// callers can never push a key past its limit.
  pub async fn try_consume(&self, key: &str, limit: u64) -> Result<Usage, ServiceError> {
    let mut counts = self.counts.lock().await;
    let used = counts.entry(key.to_string()).or_insert(0);

    if *used >= limit {
      return Err(ServiceError::QuotaExceeded { used: *used, limit });
    }

    *used += 1;
    Ok(Usage { used: *used, limit })
  }

  /// Current consumption for `key` without counting a call
  pub async fn usage(&self, key: &str, limit: u64) -> Usage {
    let counts = self.counts.lock().await;
    Usage { used: counts.get(key).copied().unwrap_or(0), limit }
  }
}
