use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

use chat_analyzer::config::LlmConfig;
use chat_analyzer::errors::LlmError;
use chat_analyzer::llm::{LlmGateway, OpenAiGateway, MAX_ERROR_BODY_CHARS};

/// serves `router` on an ephemeral local port and returns its base URL
async fn spawn_provider(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", address)
}

fn gateway(base_url: String, timeout: Duration) -> OpenAiGateway {
    OpenAiGateway::new(&LlmConfig {
        api_key: "sk-test".to_string(),
        model: "m".to_string(),
        base_url,
        timeout,
    })
}

fn completion(content: Value) -> Json<Value> {
    Json(json!({ "choices": [{ "message": { "content": content } }] }))
}

/// answers with the received request body and auth header as the completion text
async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    completion(Value::String(
        json!({ "authorization": auth, "request": body }).to_string(),
    ))
}

#[tokio::test]
async fn test_request_carries_fixed_sampling_and_message_order() {
    let router = Router::new().route("/chat/completions", post(echo));
    let base_url = spawn_provider(router).await;
    let gateway = gateway(format!("{}/", base_url), Duration::from_secs(5));

    let reply = gateway.complete("sys", "usr").await.unwrap();
    let echoed: Value = serde_json::from_str(&reply).unwrap();

    assert_eq!(echoed["authorization"], "Bearer sk-test");

    let request = &echoed["request"];
    assert_eq!(request["model"], "m");
    let temperature = request["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
    assert_eq!(request["max_tokens"], 1000);
    assert_eq!(request["response_format"]["type"], "json_object");

    let messages = request["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], "sys");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "usr");
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::UNAUTHORIZED, "nope") }),
    );
    let gateway = gateway(spawn_provider(router).await, Duration::from_secs(5));

    let err = gateway.complete("sys", "usr").await.unwrap_err();

    match &err {
        LlmError::Status { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, "nope");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "LLM provider returned HTTP 401: nope");
}

#[tokio::test]
async fn test_long_error_body_is_truncated() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "x".repeat(1000)) }),
    );
    let gateway = gateway(spawn_provider(router).await, Duration::from_secs(5));

    let err = gateway.complete("sys", "usr").await.unwrap_err();

    let LlmError::Status { status, body } = &err else {
        panic!("expected a status error, got {:?}", err);
    };
    assert_eq!(*status, 500);
    assert_eq!(body.chars().filter(|c| *c == 'x').count(), MAX_ERROR_BODY_CHARS);
    assert!(body.ends_with("..."));
    assert!(!err.to_string().contains(&"x".repeat(MAX_ERROR_BODY_CHARS + 1)));
}

#[tokio::test]
async fn test_null_content_is_an_empty_response() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { completion(Value::Null) }),
    );
    let gateway = gateway(spawn_provider(router).await, Duration::from_secs(5));

    let err = gateway.complete("sys", "usr").await.unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_unreadable_envelope_is_reported() {
    let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
    let gateway = gateway(spawn_provider(router).await, Duration::from_secs(5));

    let err = gateway.complete("sys", "usr").await.unwrap_err();

    assert!(matches!(err, LlmError::MalformedEnvelope(_)));
}

#[tokio::test]
async fn test_slow_provider_hits_the_deadline() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            completion(Value::String("{}".to_string()))
        }),
    );
    let gateway = gateway(spawn_provider(router).await, Duration::from_secs(1));

    let err = gateway.complete("sys", "usr").await.unwrap_err();

    assert!(matches!(err, LlmError::Timeout(deadline) if deadline == Duration::from_secs(1)));
    assert_eq!(err.to_string(), "LLM call timed out after 1s");
}
