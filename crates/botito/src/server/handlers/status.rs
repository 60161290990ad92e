//! Status, version and discovery endpoint handlers

use axum::{
  extract::{Extension, State},
  response::Json,
};
use chrono::Utc;
use schemars::schema_for;

use crate::sentiment::SentimentResult;
use crate::server::error::ServiceError;
use crate::server::middleware::RequestContext;
use crate::server::routing::endpoints;
use crate::server::state::AppState;
use crate::server::types::{
  ApiInfoResponse, ApiVersions, BaseResponse, HealthResponse, MessageResponse, SchemaResponse, VersionResponse,
};

/// GET / - Ping with a greeting
pub async fn root(Extension(context): Extension<RequestContext>) -> Json<BaseResponse<MessageResponse>> {
  let response = MessageResponse { message: "Hola 🌞, Bot-ito API está en línea.".to_string() };
  Json(BaseResponse::success(response, context.request_id))
}

/// GET /health - Health check endpoint
pub async fn health(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Json<BaseResponse<HealthResponse>> {
  let uptime_seconds = (Utc::now() - state.started_at).num_seconds().max(0);
  let response = HealthResponse { status: "ok".to_string(), uptime_seconds };
  Json(BaseResponse::success(response, context.request_id))
}

/// GET /version - Returns current API version
pub async fn version(Extension(context): Extension<RequestContext>) -> Json<BaseResponse<VersionResponse>> {
  let response = VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() };
  Json(BaseResponse::success(response, context.request_id))
}

/// GET /api - Returns API information, supported versions and routes
pub async fn api_info(Extension(context): Extension<RequestContext>) -> Json<BaseResponse<ApiInfoResponse>> {
  let version = env!("CARGO_PKG_VERSION");
  let response = ApiInfoResponse {
    latest: version.to_string(),
    versions: ApiVersions { latest: version.to_string(), active: vec![version.to_string()] },
    endpoints: endpoints(),
  };

  Json(BaseResponse::success(response, context.request_id))
}

/// GET /schema/sentiment - JSON schema of the sentiment result
pub async fn sentiment_schema(
  Extension(context): Extension<RequestContext>,
) -> Result<Json<BaseResponse<SchemaResponse>>, axum::response::Response> {
  let schema = serde_json::to_value(schema_for!(SentimentResult))
    .map_err(|e| ServiceError::from(e).into_response_with_id(context.request_id))?;

  Ok(Json(BaseResponse::success(SchemaResponse { schema }, context.request_id)))
}
