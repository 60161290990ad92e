//! Axum router configuration for all endpoints

use axum::{
  middleware::from_fn_with_state,
  routing::{get, post},
  Router,
};

use crate::server::handlers::{logs, status, text, usage};
use crate::server::middleware::{authenticate, request_context_middleware};
use crate::server::state::AppState;
use crate::server::types::EndpointInfo;

/// Every route: (method, path, authenticated, metered)
const ROUTES: &[(&str, &str, bool, bool)] = &[
  ("GET", "/", false, false),
  ("GET", "/health", false, false),
  ("GET", "/version", false, false),
  ("GET", "/api", false, false),
  ("GET", "/schema/sentiment", false, false),
  ("POST", "/echo", true, true),
  ("POST", "/sentiment", true, true),
  ("POST", "/slug", true, true),
  ("GET", "/usage", true, false),
  ("GET", "/logs", true, false),
];

/// Route listing served by GET /api
pub fn endpoints() -> Vec<EndpointInfo> {
  ROUTES
    .iter()
    .map(|(method, path, authenticated, metered)| EndpointInfo {
      method: method.to_string(),
      path: path.to_string(),
      authenticated: *authenticated,
      metered: *metered,
    })
    .collect()
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  // Authenticated; the text utilities charge the quota in their handlers
  let protected: Router<AppState> = Router::new()
    .route("/echo", post(text::echo))
    .route("/sentiment", post(text::sentiment))
    .route("/slug", post(text::slug))
    .route("/usage", get(usage::usage))
    .route("/logs", get(logs::get_logs))
    .route_layer(from_fn_with_state(state.clone(), authenticate));

  Router::new()
    // Status and discovery endpoints
    .route("/", get(status::root))
    .route("/health", get(status::health))
    .route("/version", get(status::version))
    .route("/api", get(status::api_info))
    .route("/schema/sentiment", get(status::sentiment_schema))
    .merge(protected)
    .layer(from_fn_with_state(state.clone(), request_context_middleware))
    .with_state(state)
}
