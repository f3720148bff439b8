// ABOUTME: Integration tests for completion agents over an LLM provider
// ABOUTME: Covers request shaping by capability and the unavailable-service wrapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{init_test_logging, test_config, MockLlmProvider};
use fitai_coach::{
    errors::ErrorCode,
    llm::{LlmCapabilities, LlmProvider, MessageRole},
    services::{Agent, ServiceContext, TextCompletionService},
};

#[tokio::test]
async fn test_agent_sends_instructions_as_system_message() {
    init_test_logging();
    let provider = Arc::new(MockLlmProvider::answering("Salam from Qasim Husnain"));
    let agent = Agent::greeter(provider.clone());

    let reply = agent.generate("hello").await.unwrap();
    assert_eq!(reply, "Salam from Qasim Husnain");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::System);
    assert!(messages[0].content.contains("greeting"));
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, "hello");
    assert!(!requests[0].json_mode);
}

#[tokio::test]
async fn test_agent_inlines_instructions_without_system_support() {
    init_test_logging();
    let provider = Arc::new(
        MockLlmProvider::answering("{}").with_capabilities(LlmCapabilities::empty()),
    );
    let agent = Agent::fitness_coach(provider.clone());

    agent.generate("upper body please").await.unwrap();

    let requests = provider.requests();
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::User);
    assert!(messages[0].content.ends_with("\n\nupper body please"));
    assert!(!requests[0].json_mode);
}

#[tokio::test]
async fn test_coach_requests_json_mode() {
    let provider = Arc::new(MockLlmProvider::answering("{}"));
    Agent::fitness_coach(provider.clone())
        .generate("legs")
        .await
        .unwrap();
    assert!(provider.requests()[0].json_mode);
}

#[tokio::test]
async fn test_provider_failure_becomes_service_unavailable() {
    init_test_logging();
    let provider = Arc::new(MockLlmProvider::failing(ErrorCode::ExternalAuthFailed));
    let agent = Agent::fitness_assistant(provider);

    let err = agent.generate("anything").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(err.root_code(), ErrorCode::ExternalAuthFailed);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_service_context_routes_fallback_to_assistant() {
    let provider = Arc::new(MockLlmProvider::answering("Drink water."));
    let services = ServiceContext::with_provider(&test_config(), provider.clone());

    let answer = services
        .dispatcher
        .dispatch("guide about nutrition fit for me")
        .await
        .unwrap();
    assert_eq!(answer.to_string(), "Drink water.");
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(provider.name(), "mock");
}
