// ABOUTME: Shared test utilities for FitAI integration tests
// ABOUTME: Quiet logging setup and scripted completion/provider doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitai_coach`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use fitai_coach::{
    config::{ApiKey, AppConfig, LlmConfig, LlmProviderType},
    errors::{AppError, AppResult, ErrorCode},
    llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider},
    services::TextCompletionService,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing at a fake key; no network call is made from it
pub fn test_config() -> AppConfig {
    let key = ApiKey::new("test-key").unwrap();
    AppConfig::new(LlmConfig::new(LlmProviderType::OpenAiCompatible, key))
}

/// Completion service that returns a fixed answer and counts calls
pub struct MockCompletionService {
    response: Result<String, ErrorCode>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionService {
    pub fn answering(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with `ExternalServiceUnavailable` wrapping `cause`
    pub fn failing(cause: ErrorCode) -> Self {
        Self {
            response: Err(cause),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletionService for MockCompletionService {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(code) => Err(AppError::service_unavailable(AppError::new(
                *code,
                "scripted failure",
            ))),
        }
    }
}

/// LLM provider that records requests and replies from a script
pub struct MockLlmProvider {
    capabilities: LlmCapabilities,
    response: Result<String, ErrorCode>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlmProvider {
    pub fn answering(text: impl Into<String>) -> Self {
        Self {
            capabilities: LlmCapabilities::full_featured(),
            response: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(code: ErrorCode) -> Self {
        Self {
            capabilities: LlmCapabilities::full_featured(),
            response: Err(code),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub const fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(text) => Ok(ChatResponse {
                content: text.clone(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(code) => Err(AppError::new(*code, "scripted provider failure")),
        }
    }
}
