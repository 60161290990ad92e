//! Request context and authentication middleware, plus quota charging
//!
//! Layer order (outermost first): request context on every route, then
//! authentication on protected routes. Metered handlers charge the quota
//! themselves once their body has been parsed.

use axum::{
  extract::{Request, State},
  http::{Method, Uri},
  middleware::Next,
  response::Response,
};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::time::Instant;
use uuid::Uuid;

use crate::server::error::ServiceError;
use crate::server::quota::Usage;
use crate::server::state::AppState;
use crate::server::types::RequestRecord;

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Quota bucket shared by every caller in demo mode
pub const DEMO_KEY: &str = "demo";

/// Request metadata injected into every request's extensions
#[derive(Debug, Clone)]
pub struct RequestContext {
  /// Unique ID for this request, echoed as the response transaction id
  pub request_id: Uuid,
  pub method: Method,
  pub uri: Uri,
  pub user_agent: String,
}

impl RequestContext {
  pub fn from_request(request: &Request) -> Self {
    let user_agent = request
      .headers()
      .get("user-agent")
      .and_then(|v| v.to_str().ok())
      .unwrap_or("none")
      .to_string();

    Self { request_id: Uuid::new_v4(), method: request.method().clone(), uri: request.uri().clone(), user_agent }
  }
}

/// Identity a request is authenticated (and metered) as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerKey(pub String);

impl CallerKey {
  /// Key safe to echo back or log: first four chars, the rest hidden
  pub fn masked(&self) -> String {
    let visible: String = self.0.chars().take(4).collect();
    if self.0.chars().count() <= 4 {
      visible
    } else {
      format!("{visible}****")
    }
  }
}

/// Compare keys by SHA-256 digest in constant time
pub fn keys_match(provided: &str, expected: &str) -> bool {
  let provided = Sha256::digest(provided.as_bytes());
  let expected = Sha256::digest(expected.as_bytes());
  provided.iter().zip(expected.iter()).fold(0u8, |diff, (a, b)| diff | (a ^ b)) == 0
}

fn request_id_of(request: &Request) -> Uuid {
  request.extensions().get::<RequestContext>().map(|context| context.request_id).unwrap_or_else(Uuid::new_v4)
}

/// Middleware to inject RequestContext into all requests and record them
pub async fn request_context_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
  let context = RequestContext::from_request(&request);
  let start_time = Instant::now();

  tracing::info!(
    request_id = %context.request_id,
    method = %context.method,
    path = context.uri.path(),
    user_agent = %context.user_agent,
    "Request started"
  );

  request.extensions_mut().insert(context.clone());
  let response = next.run(request).await;

  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  let status = response.status().as_u16();
  tracing::info!(
    request_id = %context.request_id,
    method = %context.method,
    path = context.uri.path(),
    status,
    duration_ms,
    "Request completed"
  );

  state
    .request_log
    .record(RequestRecord {
      timestamp: Utc::now(),
      request_id: context.request_id,
      method: context.method.to_string(),
      path: context.uri.path().to_string(),
      status,
      duration_ms,
    })
    .await;

  response
}

/// Resolve the caller's key, rejecting bad keys when one is configured
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
  let provided =
    request.headers().get(API_KEY_HEADER).and_then(|v| v.to_str().ok()).map(str::trim).filter(|v| !v.is_empty());

  let caller = match (state.config.api_key.as_deref(), provided) {
    (Some(expected), Some(provided)) if keys_match(provided, expected) => provided.to_string(),
    (Some(_), _) => {
      let request_id = request_id_of(&request);
      tracing::warn!(%request_id, path = request.uri().path(), "Rejected request with missing or invalid API key");
      return ServiceError::InvalidApiKey.into_response_with_id(request_id);
    }
    // Demo mode: the header is not an identity, so it cannot open a new bucket
    (None, _) => DEMO_KEY.to_string(),
  };

  request.extensions_mut().insert(CallerKey(caller));
  next.run(request).await
}

/// Count one metered call for `caller`, or build the 429 response once the
/// quota is exhausted
pub async fn charge_quota(state: &AppState, caller: &CallerKey, request_id: Uuid) -> Result<Usage, Response> {
  match state.usage.try_consume(&caller.0, state.config.quota_per_key).await {
    Ok(usage) => {
      tracing::debug!(%request_id, key = %caller.masked(), used = usage.used, limit = usage.limit, "Quota consumed");
      Ok(usage)
    }
    Err(error) => {
      tracing::warn!(%request_id, key = %caller.masked(), "Quota exhausted");
      Err(error.into_response_with_id(request_id))
    }
  }
}
