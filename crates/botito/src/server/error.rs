//! Service errors and their HTTP rendering

use axum::{
  http::StatusCode,
  response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::types::{ApiError, BaseResponse};

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("API key inválida")]
  InvalidApiKey,

  #[error("Cuota agotada: {used} de {limit} llamadas usadas")]
  QuotaExceeded { used: u64, limit: u64 },

  #[error("Failed to serialize response: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl ServiceError {
  pub fn key(&self) -> &'static str {
    match self {
      ServiceError::InvalidApiKey => "invalid_api_key",
      ServiceError::QuotaExceeded { .. } => "quota_exceeded",
      ServiceError::Serialization(_) => "serialization_failed",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ServiceError::InvalidApiKey => StatusCode::UNAUTHORIZED,
      ServiceError::QuotaExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
      ServiceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Render as the error envelope, correlated with `transaction_id`
  pub fn into_response_with_id(self, transaction_id: Uuid) -> Response {
    let mut error = ApiError::new(self.key(), &self.to_string());
    if let ServiceError::QuotaExceeded { used, limit } = &self {
      error = error.with_context(serde_json::json!({ "used": used, "limit": limit }));
    }

    (self.status(), Json(BaseResponse::<()>::error(vec![error], transaction_id))).into_response()
  }
}

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    self.into_response_with_id(Uuid::new_v4())
  }
}
