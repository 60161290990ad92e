//! Bounded in-memory log of completed requests

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::types::RequestRecord;

/// Ring of the most recent requests; the oldest entry is dropped at capacity
#[derive(Clone)]
pub struct RequestLog {
  entries: Arc<Mutex<VecDeque<RequestRecord>>>,
  capacity: usize,
}

impl RequestLog {
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self { entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))), capacity }
  }

  pub async fn record(&self, entry: RequestRecord) {
    let mut entries = self.entries.lock().await;
    if entries.len() >= self.capacity {
      entries.pop_front();
    }
    entries.push_back(entry);
  }

  /// The newest `limit` records (all when `None`), oldest first
  pub async fn recent(&self, limit: Option<usize>) -> Vec<RequestRecord> {
    let entries = self.entries.lock().await;
    let skip = limit.map_or(0, |limit| entries.len().saturating_sub(limit));
    entries.iter().skip(skip).cloned().collect()
  }

  /// Records currently held
  pub async fn len(&self) -> usize {
    self.entries.lock().await.len()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }
}
