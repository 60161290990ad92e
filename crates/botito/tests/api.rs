#[cfg(test)]
mod api_tests {
  use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
  };
  use botito::config::ServerConfig;
  use botito::server::{routing::create_router, state::AppState};
  use serde_json::{json, Value};
  use tower::ServiceExt;

  fn router_with(api_key: Option<&str>, quota: u64) -> Router {
    let config =
      ServerConfig { api_key: api_key.map(str::to_string), quota_per_key: quota, ..ServerConfig::default() };
    create_router(AppState::new(config))
  }

  fn post_json(path: &str, key: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(path).header("content-type", "application/json");
    if let Some(key) = key {
      builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
  }

  fn get(path: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(key) = key {
      builder = builder.header("x-api-key", key);
    }
    builder.body(Body::empty()).unwrap()
  }

  async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, body)
  }

  #[tokio::test]
  async fn test_health_and_root_need_no_key() {
    let router = router_with(Some("secreto"), 10);

    let (status, body) = send(&router, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
    assert!(body["transaction_id"].is_string());

    let (status, body) = send(&router, get("/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Bot-ito"));
  }

  #[tokio::test]
  async fn test_version_and_api_listing() {
    let router = router_with(None, 10);

    let (status, body) = send(&router, get("/version", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let (status, body) = send(&router, get("/api", None)).await;
    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e["path"] == "/sentiment" && e["metered"] == true));
    assert!(endpoints.iter().any(|e| e["path"] == "/health" && e["authenticated"] == false));
  }

  #[tokio::test]
  async fn test_sentiment_schema() {
    let router = router_with(None, 10);
    let (status, body) = send(&router, get("/schema/sentiment", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["schema"]["properties"]["sentimiento"].is_object());
    assert!(body["schema"]["properties"]["detalles"].is_object());
  }

  #[tokio::test]
  async fn test_sentiment_endpoint_shape() {
    let router = router_with(None, 10);
    let (status, body) =
      send(&router, post_json("/sentiment", None, json!({ "text": "no estoy feliz, estoy muy triste" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentimiento"], "negativo");
    assert_eq!(body["score"], -0.5);
    assert_eq!(body["color"], "#e74c3c");
    assert_eq!(body["detalles"]["tristeza"], 1);
    assert_eq!(body["tokens"][0], "no");
    assert!(body.get("errors").is_none());
  }

  #[tokio::test]
  async fn test_echo_and_slug() {
    let router = router_with(None, 10);

    let (status, body) = send(&router, post_json("/echo", None, json!({ "text": "hola 🌞" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["echo"], "hola 🌞");

    let (status, body) = send(&router, post_json("/slug", None, json!({ "text": "¡Canción de Año Nuevo!" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "cancion-de-ano-nuevo");
  }

  #[tokio::test]
  async fn test_configured_key_is_enforced() {
    let router = router_with(Some("secreto"), 10);

    let (status, body) = send(&router, post_json("/echo", None, json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0]["key"], "invalid_api_key");

    let (status, _) = send(&router, post_json("/echo", Some("otra"), json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&router, post_json("/echo", Some("secreto"), json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["echo"], "x");

    let (status, _) = send(&router, get("/usage", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn test_quota_is_enforced() {
    let router = router_with(Some("secreto"), 2);

    for _ in 0..2 {
      let (status, _) = send(&router, post_json("/slug", Some("secreto"), json!({ "text": "a b" }))).await;
      assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, post_json("/sentiment", Some("secreto"), json!({ "text": "feliz" }))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["errors"][0]["key"], "quota_exceeded");
    assert_eq!(body["errors"][0]["context"]["limit"], 2);
  }

  #[tokio::test]
  async fn test_demo_mode_shares_one_bucket_across_header_values() {
    let router = router_with(None, 2);

    let (status, _) = send(&router, post_json("/echo", Some("cliente-a"), json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&router, post_json("/echo", None, json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::OK);

    // Switching the header value does not open a fresh allowance
    for key in ["cliente-b", "cliente-c"] {
      let (status, _) = send(&router, post_json("/echo", Some(key), json!({ "text": "x" }))).await;
      assert_eq!(status, StatusCode::TOO_MANY_REQUESTS, "{key}");
    }

    let (_, body) = send(&router, get("/usage", Some("cualquiera"))).await;
    assert_eq!(body["key"], "demo");
    assert_eq!(body["used"], 2);
  }

  #[tokio::test]
  async fn test_usage_reports_without_consuming() {
    let router = router_with(None, 5);

    send(&router, post_json("/echo", None, json!({ "text": "uno" }))).await;
    send(&router, post_json("/echo", None, json!({ "text": "dos" }))).await;

    for _ in 0..3 {
      let (status, body) = send(&router, get("/usage", None)).await;
      assert_eq!(status, StatusCode::OK);
      assert_eq!(body["key"], "demo");
      assert_eq!(body["used"], 2);
      assert_eq!(body["limit"], 5);
      assert_eq!(body["remaining"], 3);
    }
  }

  #[tokio::test]
  async fn test_usage_masks_key() {
    let router = router_with(Some("secreto-largo"), 5);
    let (status, body) = send(&router, get("/usage", Some("secreto-largo"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "secr****");
  }

  #[tokio::test]
  async fn test_logs_record_completed_requests() {
    let router = router_with(None, 5);

    send(&router, get("/health", None)).await;
    send(&router, post_json("/echo", None, json!({ "text": "x" }))).await;

    let (status, body) = send(&router, get("/logs?limit=2", None)).await;
    assert_eq!(status, StatusCode::OK);

    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["path"], "/health");
    assert_eq!(logs[1]["path"], "/echo");
    assert_eq!(logs[1]["method"], "POST");
    assert_eq!(logs[1]["status"], 200);
    assert_eq!(body["total"], 2);
    assert_eq!(body["capacity"], 500);
  }

  #[tokio::test]
  async fn test_malformed_body_is_rejected() {
    let router = router_with(None, 5);
    let request = Request::builder()
      .method("POST")
      .uri("/sentiment")
      .header("content-type", "application/json")
      .body(Body::from("{\"texto\": 1}"))
      .unwrap();

    let (status, _) = send(&router, request).await;
    assert!(status.is_client_error());

    // A rejected body is not charged
    let (_, body) = send(&router, get("/usage", None)).await;
    assert_eq!(body["used"], 0);
  }

  #[tokio::test]
  async fn test_transaction_id_matches_request_log() {
    let router = router_with(None, 5);
    let (_, body) = send(&router, get("/version", None)).await;
    let transaction_id = body["transaction_id"].clone();

    let (_, body) = send(&router, get("/logs", None)).await;
    assert_eq!(body["logs"][0]["request_id"], transaction_id);
  }
}
