//! Logs endpoint handler

use axum::{
  extract::{Extension, Query, State},
  response::Json,
};

use crate::server::middleware::RequestContext;
use crate::server::state::AppState;
use crate::server::types::{BaseResponse, LogsQuery, LogsResponse};

/// Records returned when the caller gives no limit
const DEFAULT_LOG_LIMIT: usize = 100;

/// GET /logs - Most recent completed requests, oldest first
pub async fn get_logs(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Query(query): Query<LogsQuery>,
) -> Json<BaseResponse<LogsResponse>> {
  let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT);
  let logs = state.request_log.recent(Some(limit)).await;
  let total = state.request_log.len().await;
  let capacity = state.request_log.capacity();

  tracing::debug!(request_id = %context.request_id, count = logs.len(), total, "Retrieved request log");
  Json(BaseResponse::success(LogsResponse { logs, total, capacity }, context.request_id))
}
