use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

use chat_analyzer::analysis_result::ResultShape;
use chat_analyzer::analyzers;

use super::mock_gateway::ScriptedGateway;
use super::{test_app, ALICE_AND_BOB, HOGWARTS_REPLY};

const BOUNDARY: &str = "chat-analyzer-test-boundary";

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_file(uri: &str, filename: &str, contents: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: text/plain\r\n\r\n",
            BOUNDARY, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn analyze_body(analyzer_type: &str) -> Value {
    json!({ "chat_content": ALICE_AND_BOB, "analyzer_type": analyzer_type })
}

#[tokio::test]
async fn test_health() {
    let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_analyzer_listing_matches_registry_on_both_prefixes() {
    let expected: Vec<Value> = analyzers::all()
        .iter()
        .map(|profile| {
            json!({ "id": profile.id, "name": profile.name, "description": profile.description })
        })
        .collect();

    for uri in ["/analyzers", "/api/analyzers"] {
        let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);
        let (status, body) = send(app, get(uri)).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["analyzers"], Value::Array(expected.clone()), "{}", uri);
    }
}

#[tokio::test]
async fn test_hogwarts_analysis_end_to_end() {
    let gateway = ScriptedGateway::replying(HOGWARTS_REPLY);
    let app = test_app(gateway.clone(), ResultShape::Dual);

    let (status, body) = send(app, post_json("/analyze", analyze_body("hogwarts"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let results = &body["results"];
    assert_eq!(results["analysis_type"], "hogwarts");
    assert_eq!(results["name_person_1"], "Alice");
    assert_eq!(results["result_1"], "Gryffindor");
    assert_eq!(results["result_2"], "Ravenclaw");
    assert_eq!(results["indicators_2"], json!(["witty"]));
    assert!(results["timestamp"].is_string());
    assert!(results.get("confidence_score").is_none());

    // the model sees the flattened, parsed transcript
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].user_content, ALICE_AND_BOB);
}

#[tokio::test]
async fn test_numeric_levels_are_strings_in_the_response() {
    let reply = json!({
        "name_person_1": "Alice", "name_person_2": "Bob",
        "red_flag_level_1": 1, "red_flag_level_2": 4,
        "analysis_1": "fine", "analysis_2": "hmm",
        "identified_flags_1": [], "identified_flags_2": ["love bombing"],
    });
    let app = test_app(ScriptedGateway::replying(&reply.to_string()), ResultShape::Dual);

    let (status, body) = send(app, post_json("/api/analyze", analyze_body("red_flag"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["result_1"], "1");
    assert_eq!(body["results"]["result_2"], "4");
}

#[tokio::test]
async fn test_unknown_analyzer_is_rejected() {
    let gateway = ScriptedGateway::replying(HOGWARTS_REPLY);
    let app = test_app(gateway.clone(), ResultShape::Dual);

    let (status, body) = send(app, post_json("/analyze", analyze_body("unknown"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("unknown"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_transcript_without_messages_is_rejected() {
    let gateway = ScriptedGateway::replying(HOGWARTS_REPLY);
    let app = test_app(gateway.clone(), ResultShape::Dual);
    let body = json!({ "chat_content": "just some text\nwithout timestamps", "analyzer_type": "hogwarts" });

    let (status, body) = send(app, post_json("/analyze", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("No valid messages"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_model_json_is_a_server_error() {
    let app = test_app(ScriptedGateway::replying("not json"), ResultShape::Dual);

    let (status, body) = send(app, post_json("/analyze", analyze_body("hogwarts"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("parse"));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_incomplete_model_json_is_a_server_error() {
    let app = test_app(
        ScriptedGateway::replying(r#"{"name_person_1":"Alice","house_1":"Gryffindor"}"#),
        ResultShape::Dual,
    );

    let (status, body) = send(app, post_json("/analyze", analyze_body("hogwarts"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("name_person_2"));
}

#[tokio::test]
async fn test_gateway_timeout_is_a_server_error() {
    let app = test_app(
        ScriptedGateway::timing_out(Duration::from_secs(30)),
        ResultShape::Dual,
    );

    let (status, body) = send(app, post_json("/analyze", analyze_body("boomer"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_single_shape_deployment() {
    let reply = json!({
        "house": "Hufflepuff",
        "confidence": 0.6,
        "analysis": "kind and patient",
        "key_traits": ["kind"],
    });
    let gateway = ScriptedGateway::replying(&reply.to_string());
    let app = test_app(gateway.clone(), ResultShape::Single);

    let (status, body) = send(app, post_json("/analyze", analyze_body("hogwarts"))).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["results"];
    assert_eq!(results["primary_result"], "Hufflepuff");
    assert_eq!(results["confidence_score"], 0.6);
    assert_eq!(results["key_indicators"], json!(["kind"]));
    assert!(results.get("result_1").is_none());

    assert!(gateway.calls()[0].system_prompt.contains("\"confidence\""));
}

#[tokio::test]
async fn test_malformed_request_body_is_a_client_error() {
    let app = test_app(ScriptedGateway::replying(HOGWARTS_REPLY), ResultShape::Dual);

    let (status, body) = send(app, post_json("/analyze", json!({ "chat_content": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_upload_parses_text_file() {
    let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);

    let (status, body) = send(app, post_file("/api/upload", "chat.txt", ALICE_AND_BOB.as_bytes())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message_count"], 2);
    assert_eq!(body["messages"][0]["sender"], "Alice");
    assert_eq!(body["messages"][1]["content"], "hey");
    assert_eq!(body["messages"][1]["timestamp"], "2023-02-01T10:00:05");
}

#[tokio::test]
async fn test_upload_rejects_other_extensions() {
    let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);

    let (status, body) = send(app, post_file("/upload", "chat.zip", ALICE_AND_BOB.as_bytes())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains(".txt"));
}

#[tokio::test]
async fn test_upload_rejects_non_utf8() {
    let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);

    let (status, body) = send(app, post_file("/upload", "chat.txt", &[0xff, 0xfe, 0x41, 0x00])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn test_upload_rejects_file_without_messages() {
    let app = test_app(ScriptedGateway::replying("{}"), ResultShape::Dual);

    let (status, body) = send(app, post_file("/upload", "chat.txt", b"hello\nworld")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("No valid messages"));
}
