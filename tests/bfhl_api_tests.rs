use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use bfhl_server::core::envelope::OFFICIAL_EMAIL;
use bfhl_server::core::error::AppError;
use bfhl_server::features::ai::OneWordAnswerer;
use bfhl_server::features::bfhl::BfhlService;
use bfhl_server::server::{AppState, MAX_BODY_BYTES, build_router};

enum MockAnswer {
    Word(&'static str),
    Upstream,
    MissingKey,
}

struct MockAnswerer {
    answer: MockAnswer,
}

#[async_trait]
impl OneWordAnswerer for MockAnswerer {
    async fn answer(&self, _question: &str) -> Result<String, AppError> {
        match self.answer {
            MockAnswer::Word(word) => Ok(word.to_string()),
            MockAnswer::Upstream => Err(AppError::upstream(429, "quota exceeded")),
            MockAnswer::MissingKey => Err(AppError::configuration(
                "GEMINI_API_KEY is not configured",
            )),
        }
    }
}

fn app_with(answer: MockAnswer) -> axum::Router {
    let answerer: Arc<dyn OneWordAnswerer> = Arc::new(MockAnswerer { answer });
    build_router(AppState::new(Arc::new(BfhlService::new(answerer))))
}

fn app() -> axum::Router {
    app_with(MockAnswer::Word("Paris"))
}

async fn post_raw(app: axum::Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    post_raw(app, payload.to_string()).await
}

fn assert_success(body: &Value) {
    assert_eq!(body["is_success"], json!(true));
    assert_eq!(body["official_email"], json!(OFFICIAL_EMAIL));
    assert!(body.get("error").is_none());
}

fn assert_failure(body: &Value) {
    assert_eq!(body["is_success"], json!(false));
    assert_eq!(body["official_email"], json!(OFFICIAL_EMAIL));
    assert!(body.get("data").is_none());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_returns_envelope_without_data() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_success(&body);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn fibonacci_returns_sequence() {
    let (status, body) = post(app(), json!({ "fibonacci": 7 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(body["data"], json!([0, 1, 1, 2, 3, 5, 8]));
}

#[tokio::test]
async fn fibonacci_zero_is_empty() {
    let (status, body) = post(app(), json!({ "fibonacci": 0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn fibonacci_upper_bound_is_exact() {
    let (status, body) = post(app(), json!({ "fibonacci": 1000 })).await;
    assert_eq!(status, StatusCode::OK);

    let sequence = body["data"].as_array().unwrap();
    assert_eq!(sequence.len(), 1000);
    // F(100)
    assert_eq!(sequence[100].to_string(), "354224848179261915075");
}

#[tokio::test]
async fn fibonacci_over_limit_is_out_of_range() {
    let (status, body) = post(app(), json!({ "fibonacci": 1001 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
}

#[tokio::test]
async fn prime_filters_in_order() {
    let (status, body) = post(app(), json!({ "prime": [1, 2, 3, 4, 5, 17] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(body["data"], json!([2, 3, 5, 17]));
}

#[tokio::test]
async fn prime_rejects_non_integer_elements() {
    let (status, body) = post(app(), json!({ "prime": [2, "three"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
}

#[tokio::test]
async fn prime_rejects_empty_array() {
    let (status, body) = post(app(), json!({ "prime": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
}

#[tokio::test]
async fn lcm_and_hcf_values() {
    let (status, body) = post(app(), json!({ "lcm": [4, 6] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(12));

    let (_, body) = post(app(), json!({ "lcm": [0, 5] })).await;
    assert_eq!(body["data"], json!(0));

    let (status, body) = post(app(), json!({ "hcf": [12, 18, 24] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(6));
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let payload = json!({ "lcm": [3, 7, 11, 13] });
    let (_, first) = post(app(), payload.clone()).await;
    let (_, second) = post(app(), payload).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn shape_errors() {
    for payload in [json!({}), json!({ "a": 1, "b": 2 }), json!([1, 2]), json!("hcf")] {
        let (status, body) = post(app(), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_failure(&body);
    }
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let (status, body) = post(app(), json!({ "foo": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
    assert!(body["error"].as_str().unwrap().contains("foo"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let (status, body) = post_raw(app(), "{\"fibonacci\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let padding = "1,".repeat(MAX_BODY_BYTES);
    let body = format!("{{\"prime\": [{padding}1]}}");
    let (status, body) = post_raw(app(), body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_failure(&body);
}

#[tokio::test]
async fn ai_returns_answer_word() {
    let (status, body) = post(app(), json!({ "AI": "What is the capital of France?" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(body["data"], json!("Paris"));
}

#[tokio::test]
async fn ai_rejects_non_string_question() {
    let (status, body) = post(app(), json!({ "AI": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
}

#[tokio::test]
async fn ai_missing_key_is_server_error() {
    let (status, body) = post(app_with(MockAnswer::MissingKey), json!({ "AI": "Why?" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure(&body);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn ai_upstream_failure_is_server_error() {
    let (status, body) = post(app_with(MockAnswer::Upstream), json!({ "AI": "Why?" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure(&body);
    assert!(body["error"].as_str().unwrap().contains("429"));
}

async fn send_empty(app: axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn wrong_method_on_known_route_returns_envelope() {
    for (method, uri) in [("GET", "/bfhl"), ("POST", "/health"), ("DELETE", "/bfhl")] {
        let (status, body) = send_empty(app(), method, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_failure(&body);
        assert!(body["error"].as_str().unwrap().contains(method));
    }
}

#[tokio::test]
async fn ai_empty_question_is_server_error() {
    for question in ["", "   "] {
        let (status, body) = post(app(), json!({ "AI": question })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_failure(&body);
        assert!(body["error"].as_str().unwrap().contains("question must not be empty"));
    }
}

#[tokio::test]
async fn prime_element_beyond_i64_is_out_of_range() {
    let (status, body) = post_raw(app(), r#"{"prime": [7, 99999999999999999999]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("64-bit"));
    assert!(!message.contains("not an integer"));
}

#[tokio::test]
async fn lcm_and_hcf_accept_integers_beyond_i64() {
    let (status, body) = post_raw(app(), r#"{"lcm": [99999999999999999999, 2]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].to_string(), "199999999999999999998");

    let (status, body) = post_raw(app(), r#"{"hcf": [9007199254740993.0, 3]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].to_string(), "3");

    let (status, body) = post_raw(app(), r#"{"hcf": [9007199254740993.0]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].to_string(), "9007199254740993");
}

#[tokio::test]
async fn unknown_route_returns_envelope() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_failure(&body);
}
