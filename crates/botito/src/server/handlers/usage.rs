//! Usage endpoint handler

use axum::{
  extract::{Extension, State},
  response::Json,
};

use crate::server::middleware::{CallerKey, RequestContext};
use crate::server::state::AppState;
use crate::server::types::{BaseResponse, UsageResponse};

/// GET /usage - The caller's consumption against its quota (not metered)
pub async fn usage(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Extension(caller): Extension<CallerKey>,
) -> Json<BaseResponse<UsageResponse>> {
  let usage = state.usage.usage(&caller.0, state.config.quota_per_key).await;
  let response =
    UsageResponse { key: caller.masked(), used: usage.used, limit: usage.limit, remaining: usage.remaining() };

  Json(BaseResponse::success(response, context.request_id))
}
