//! REST API types with schemars annotations for schema generation

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Base Response Structure
// ======================

/// Base response object for all API endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BaseResponse<T> {
  /// API versioning information
  pub versioning: VersionInfo,

  /// Transaction ID for logging correlation (the request id)
  pub transaction_id: Uuid,

  /// Optional error information
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub errors: Vec<ApiError>,

  /// Response data, flattened into the top level
  #[serde(flatten)]
  pub data: T,
}

/// API versioning information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionInfo {
  pub latest: String,
  pub requested: String,
  pub resolved: String,
}

/// API error information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,

  /// Human readable error message
  pub message: String,

  /// Error stack trace (if available)
  #[serde(default)]
  pub stack: Vec<String>,

  /// Additional error context
  #[serde(default)]
  pub context: serde_json::Value,
}

// Status Endpoints
// ================

/// Response for / endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MessageResponse {
  pub message: String,
}

/// Response for /health endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
  pub status: String,

  /// Seconds since the server state was created
  pub uptime_seconds: i64,
}

/// Response for /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  pub version: String,
}

/// Response for /api endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiInfoResponse {
  /// Latest API version
  pub latest: String,

  /// Version information
  pub versions: ApiVersions,

  /// Every route the server exposes
  pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiVersions {
  pub latest: String,
  pub active: Vec<String>,
}

/// One route in the /api listing
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EndpointInfo {
  pub method: String,
  pub path: String,

  /// Requires the `x-api-key` header when a key is configured
  pub authenticated: bool,

  /// Counts against the caller's quota
  pub metered: bool,
}

/// Response for /schema/sentiment endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SchemaResponse {
  pub schema: serde_json::Value,
}

// Text Utility Endpoints
// ======================

/// Request body shared by /echo, /sentiment and /slug
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextRequest {
  pub text: String,
}

/// Response for /echo endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EchoResponse {
  pub echo: String,
}

/// Response for /slug endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SlugResponse {
  pub slug: String,
}

/// Response for /sentiment endpoint
pub type SentimentResponse = crate::sentiment::SentimentResult;

// Usage And Logs
// ==============

/// Response for /usage endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UsageResponse {
  /// Masked caller key
  pub key: String,
  pub used: u64,
  pub limit: u64,
  pub remaining: u64,
}

/// Query parameters for /logs
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LogsQuery {
  pub limit: Option<usize>,
}

/// One completed request as kept by the request log
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RequestRecord {
  pub timestamp: DateTime<Utc>,
  pub request_id: Uuid,
  pub method: String,
  pub path: String,
  pub status: u16,
  pub duration_ms: f64,
}

/// Response for /logs endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogsResponse {
  pub logs: Vec<RequestRecord>,

  /// Records held by the log, before `limit` was applied
  pub total: usize,

  /// Most records the log keeps before dropping the oldest
  pub capacity: usize,
}

// Helper Functions
// ================

fn current_version() -> VersionInfo {
  let version = env!("CARGO_PKG_VERSION");
  VersionInfo { latest: version.to_string(), requested: version.to_string(), resolved: version.to_string() }
}

impl<T> BaseResponse<T> {
  /// Create a successful response
  pub fn success(data: T, transaction_id: Uuid) -> Self {
    Self { versioning: current_version(), transaction_id, errors: Vec::new(), data }
  }

  /// Create an error response
  pub fn error(errors: Vec<ApiError>, transaction_id: Uuid) -> BaseResponse<()> {
    BaseResponse { versioning: current_version(), transaction_id, errors, data: () }
  }
}

impl ApiError {
  /// Create a new API error
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string(), stack: Vec::new(), context: serde_json::Value::Null }
  }

  pub fn with_context(mut self, context: serde_json::Value) -> Self {
    self.context = context;
    self
  }
}
