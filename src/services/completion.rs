// ABOUTME: Text completion capability and the agents that implement it over an LLM provider
// ABOUTME: An agent is a name plus system instructions bound to a shared provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Text completion agents
//!
//! The dispatcher and CLI only see [`TextCompletionService`]. Every failure
//! from the underlying provider is surfaced as `ExternalServiceUnavailable`
//! with the provider error kept as the source. Nothing here retries.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use fitai_core::errors::{AppError, AppResult};
use tracing::{debug, instrument, warn};

use crate::llm::prompts::{FITNESS_ASSISTANT_PROMPT, FITNESS_COACH_PROMPT, GREETING_AGENT_PROMPT};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Single-shot text generation
#[async_trait]
pub trait TextCompletionService: Send + Sync {
    /// Generate a response for a prompt
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` if the completion service cannot
    /// produce an answer.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Instructions bound to a provider
pub struct Agent {
    name: String,
    instructions: String,
    provider: Arc<dyn LlmProvider>,
    json_output: bool,
}

impl Agent {
    /// Create an agent
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        provider: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            provider,
            json_output: false,
        }
    }

    /// Ask the provider for JSON output when it supports JSON mode
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// General assistant for free-text fitness and nutrition questions
    pub fn fitness_assistant(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new("Fitness Assistant", FITNESS_ASSISTANT_PROMPT, provider)
    }

    /// Greeting-only agent
    pub fn greeter(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new("Greeting Agent", GREETING_AGENT_PROMPT, provider)
    }

    /// Coach that answers with a JSON workout plan
    pub fn fitness_coach(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new("Fitness Coach", FITNESS_COACH_PROMPT, provider).with_json_output()
    }

    /// Agent name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        let capabilities = self.provider.capabilities();
        let messages = if capabilities.supports_system_messages() {
            vec![
                ChatMessage::system(self.instructions.as_str()),
                ChatMessage::user(prompt),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{}\n\n{prompt}",
                self.instructions
            ))]
        };

        let request = ChatRequest::new(messages);
        if self.json_output && capabilities.supports_json_mode() {
            request.with_json_mode()
        } else {
            request
        }
    }
}

#[async_trait]
impl TextCompletionService for Agent {
    #[instrument(skip(self, prompt), fields(agent = %self.name, provider = self.provider.name()))]
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = self.build_request(prompt);
        match self.provider.complete(&request).await {
            Ok(response) => {
                debug!(
                    chars = response.content.len(),
                    finish_reason = ?response.finish_reason,
                    "Completion received"
                );
                Ok(response.content)
            }
            Err(e) => {
                warn!(code = ?e.code, "Completion failed: {}", e.message);
                Err(AppError::service_unavailable(e))
            }
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("provider", &self.provider.name())
            .field("json_output", &self.json_output)
            .finish_non_exhaustive()
    }
}
