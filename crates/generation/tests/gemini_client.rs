//! Wire-level tests for the Gemini client against a mock server.

use generation::{
    GeminiClient, GeminiConfig, GenerationClient, GenerationError, GenerationRequest,
    ImageAttachment, MarketingGenerator,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new("test-key").with_base_url(format!("{}/v1beta/models", server.uri()));
    GeminiClient::new(config).unwrap()
}

fn candidate_reply(parts: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }]
    }))
}

fn marketing_json() -> String {
    json!({
        "video_script": "Open on a sunrise.",
        "poster_content": "WAKE UP BETTER",
        "email_content": "Hi there,",
        "tagline": "Rise and shine."
    })
    .to_string()
}

#[tokio::test]
async fn test_sends_schema_constrained_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(candidate_reply(json!([{ "text": marketing_json() }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let image = ImageAttachment::from_data_url("data:image/webp;base64,UklGRg==");
    let request = GenerationRequest::marketing("Alarm clock", "Night owls", image);
    let text = client.generate(&request).await.unwrap();
    assert_eq!(text, marketing_json());

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();

    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        "Product/Service: Alarm clock. Target Audience: Night owls."
    );
    assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["data"], "UklGRg==");
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        request.system_instruction.as_str()
    );
    assert_eq!(body["generationConfig"]["temperature"], 0.8);
    assert_eq!(
        body["generationConfig"]["responseSchema"]["required"],
        json!(["video_script", "poster_content", "email_content", "tagline"])
    );
}

#[tokio::test]
async fn test_concatenates_text_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(candidate_reply(json!([{ "text": "{\"a\":" }, { "text": "1}" }])))
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate(&GenerationRequest::marketing("x", "y", None))
        .await
        .unwrap();
    assert_eq!(text, "{\"a\":1}");
}

#[tokio::test]
async fn test_api_error_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::marketing("x", "y", None))
        .await
        .unwrap_err();

    match err {
        GenerationError::Service(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("INVALID_ARGUMENT: API key not valid"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_blocked_prompt_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::marketing("x", "y", None))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Service(ref msg) if msg.contains("SAFETY")));
}

#[tokio::test]
async fn test_candidate_without_text_is_malformed_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "role": "model", "parts": [] }, "finishReason": "MAX_TOKENS" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::marketing("x", "y", None))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::MalformedOutput(ref msg) if msg.contains("MAX_TOKENS")));
}

#[tokio::test]
async fn test_timeout_is_service_error_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            candidate_reply(json!([{ "text": marketing_json() }]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta/models", server.uri()))
        .with_timeout_seconds(1);
    let client = GeminiClient::new(config).unwrap();

    let err = client
        .generate(&GenerationRequest::marketing("x", "y", None))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Service(ref msg) if msg.contains("timed out")));
}

#[tokio::test]
async fn test_generator_over_gemini_flags_non_json_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(candidate_reply(json!([{ "text": "Here you go: a tagline!" }])))
        .mount(&server)
        .await;

    let generator = MarketingGenerator::new(client_for(&server));
    let err = generator.generate("x", "y", None).await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedOutput(_)));
}
