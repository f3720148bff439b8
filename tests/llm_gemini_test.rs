// ABOUTME: HTTP-level tests for the native Gemini provider against a mock server
// ABOUTME: Verifies key header, system instruction, JSON mime type, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use fitai_coach::{
    errors::ErrorCode,
    llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider},
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::with_timeout("test-key", Duration::from_secs(5))
        .unwrap()
        .with_base_url(format!("{}/v1beta", server.uri()))
}

fn request() -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system("You are a fitness coach."),
        ChatMessage::user("Plan an upper body workout"),
    ])
}

fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 9, "candidatesTokenCount": 3, "totalTokenCount": 12}
    })
}

#[tokio::test]
async fn test_generate_content_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "system_instruction": {"parts": [{"text": "You are a fitness coach."}]},
            "contents": [{"role": "user", "parts": [{"text": "Plan an upper body workout"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Do push-ups.")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server).complete(&request()).await.unwrap();
    assert_eq!(response.content, "Do push-ups.");
    assert_eq!(response.model, "gemini-2.0-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.map(|u| u.prompt_tokens), Some(9));
}

#[tokio::test]
async fn test_json_mode_sets_mime_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .and(body_partial_json(json!({
            "generation_config": {"response_mime_type": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server)
        .with_default_model("gemini-1.5-pro")
        .complete(&request().with_json_mode())
        .await
        .unwrap();
    assert_eq!(response.content, "{}");
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = provider(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_server_error_maps_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 503, "message": "The model is overloaded", "status": "UNAVAILABLE"}
        })))
        .mount(&server)
        .await;

    let err = provider(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("The model is overloaded"));
}

#[tokio::test]
async fn test_candidate_without_text_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": []}, "finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let err = provider(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}
