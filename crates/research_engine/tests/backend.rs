use std::time::Duration;

use research_engine::{
    source_list_schema, BackendSettings, GeminiBackend, GenerateRequest, GenerativeBackend,
    UpstreamKind,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::new(BackendSettings {
        base_url: server.uri(),
        model: "test-model".to_string(),
        api_key: "secret-key".to_string(),
        ..BackendSettings::default()
    })
    .expect("client builds")
}

fn text_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn text_request_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "secret-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Tell me about Etna" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("Etna is tall.")))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let text = backend
        .generate(GenerateRequest::text("Tell me about Etna"))
        .await
        .expect("generate ok");
    assert_eq!(text, "Etna is tall.");
}

#[tokio::test]
async fn structured_request_sends_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": source_list_schema()
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let text = backend
        .generate(GenerateRequest::structured("find", source_list_schema()))
        .await
        .expect("generate ok");
    assert_eq!(text, "[]");
}

#[tokio::test]
async fn http_error_carries_status_and_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .generate(GenerateRequest::text("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, UpstreamKind::HttpStatus(429));
    assert_eq!(err.message, "Quota exceeded");
}

#[tokio::test]
async fn undecodable_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .generate(GenerateRequest::text("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, UpstreamKind::Decode);
}

#[tokio::test]
async fn configured_request_timeout_applies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(text_reply("late")),
        )
        .mount(&server)
        .await;

    let backend = GeminiBackend::new(BackendSettings {
        base_url: server.uri(),
        model: "test-model".to_string(),
        request_timeout: Some(Duration::from_millis(50)),
        ..BackendSettings::default()
    })
    .unwrap();

    let err = backend.generate(GenerateRequest::text("hi")).await.unwrap_err();
    assert_eq!(err.kind, UpstreamKind::Timeout);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let backend = GeminiBackend::new(BackendSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        model: "test-model".to_string(),
        ..BackendSettings::default()
    })
    .unwrap();

    let err = backend.generate(GenerateRequest::text("hi")).await.unwrap_err();
    assert_eq!(err.kind, UpstreamKind::Network);
}
