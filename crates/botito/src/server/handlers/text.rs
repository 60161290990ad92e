//! Text utility endpoint handlers
//!
//! Each handler charges the caller's quota only after the JSON body has been
//! accepted, so a rejected body costs nothing.

use axum::{
  extract::{Extension, Json, State},
  response::{Json as ResponseJson, Response},
};

use crate::sentiment;
use crate::server::middleware::{charge_quota, CallerKey, RequestContext};
use crate::server::state::AppState;
use crate::server::types::{BaseResponse, EchoResponse, SentimentResponse, SlugResponse, TextRequest};
use crate::text;

/// POST /echo - Return the text unchanged
pub async fn echo(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Extension(caller): Extension<CallerKey>,
  Json(request): Json<TextRequest>,
) -> Result<ResponseJson<BaseResponse<EchoResponse>>, Response> {
  charge_quota(&state, &caller, context.request_id).await?;
  Ok(ResponseJson(BaseResponse::success(EchoResponse { echo: request.text }, context.request_id)))
}

/// POST /sentiment - Score the text with the Spanish lexicon
pub async fn sentiment(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Extension(caller): Extension<CallerKey>,
  Json(request): Json<TextRequest>,
) -> Result<ResponseJson<BaseResponse<SentimentResponse>>, Response> {
  charge_quota(&state, &caller, context.request_id).await?;
  let result = sentiment::analyze(&request.text);

  tracing::debug!(
    request_id = %context.request_id,
    label = ?result.sentimiento,
    score = result.score,
    tokens = result.tokens.len(),
    "Scored text"
  );

  Ok(ResponseJson(BaseResponse::success(result, context.request_id)))
}

/// POST /slug - URL-friendly slug of the text
pub async fn slug(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Extension(caller): Extension<CallerKey>,
  Json(request): Json<TextRequest>,
) -> Result<ResponseJson<BaseResponse<SlugResponse>>, Response> {
  charge_quota(&state, &caller, context.request_id).await?;
  Ok(ResponseJson(BaseResponse::success(SlugResponse { slug: text::slugify(&request.text) }, context.request_id)))
}
