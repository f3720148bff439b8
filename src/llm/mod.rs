// ABOUTME: LLM provider abstraction for the hosted model behind free-text answers
// ABOUTME: Defines chat message types, capability flags, and the provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! # LLM Provider Interface
//!
//! This module defines the contract that LLM providers implement so the
//! agents in [`crate::services`] can reach a hosted model without knowing
//! which HTTP API shape sits underneath.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features (JSON mode, system messages)
//! - **`LlmProvider`**: Async trait for single-shot chat completion
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Request configuration including model, temperature, JSON mode
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use fitai_coach::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let messages = vec![
//!         ChatMessage::system("You are a helpful fitness assistant."),
//!         ChatMessage::user("What's a good warm-up routine?"),
//!     ];
//!
//!     let request = ChatRequest::new(messages);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
mod openai_compatible;
pub mod prompts;
mod provider;

pub use gemini::GeminiProvider;
pub use openai_compatible::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};
pub use provider::ChatProvider;

use async_trait::async_trait;
use fitai_core::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LlmCapabilities: u8 {
        /// Provider can be asked to emit a JSON object
        const JSON_MODE = 0b0000_0001;
        /// Provider honors system messages
        const SYSTEM_MESSAGES = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Create capabilities for a basic text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::SYSTEM_MESSAGES
    }

    /// Create capabilities for a provider with structured output support
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::JSON_MODE.union(Self::SYSTEM_MESSAGES)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if system messages are supported
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Ask the provider for a JSON object response
    pub json_mode: bool,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            json_mode: false,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request a JSON object response
    #[must_use]
    pub const fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
///
/// One request, one response. Providers do not retry.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini", "openai_compatible")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

// ============================================================================
// Shared HTTP error mapping
// ============================================================================

/// Map a non-success HTTP status from a provider to an error code
///
/// 401/403 are credential failures, 429 is quota, everything else is a
/// generic service error.
pub(crate) fn map_status_code(status: u16) -> ErrorCode {
    match status {
        401 | 403 => ErrorCode::ExternalAuthFailed,
        429 => ErrorCode::ExternalRateLimited,
        _ => ErrorCode::ExternalServiceError,
    }
}

/// Map a transport-level reqwest failure
pub(crate) fn map_transport_error(service: &str, error: &reqwest::Error) -> AppError {
    let detail = if error.is_timeout() {
        "request timed out".to_owned()
    } else if error.is_connect() {
        "could not connect".to_owned()
    } else {
        // reqwest errors can embed the request URL; keep only the kind
        "request failed".to_owned()
    };
    AppError::external_service(service, detail)
}

/// Extract a user-friendly retry hint from a rate limit message
///
/// Looks for "retry in N" / "try again in N" and rounds the seconds up.
pub(crate) fn rate_limit_message(message: &str) -> String {
    let lower = message.to_lowercase();
    let found = ["retry in ", "try again in "]
        .iter()
        .find_map(|marker| lower.find(marker).map(|pos| pos + marker.len()));

    if let Some(start) = found {
        let after_prefix = &lower[start..];
        let end = after_prefix
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(after_prefix.len());
        if let Ok(seconds) = after_prefix[..end].parse::<f64>() {
            let seconds_int = seconds.ceil() as u64;
            return format!("AI service quota exceeded. Please try again in {seconds_int} seconds.");
        }
    }
    "AI service quota exceeded. Please wait a moment and try again.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_status_code(401), ErrorCode::ExternalAuthFailed);
        assert_eq!(map_status_code(403), ErrorCode::ExternalAuthFailed);
        assert_eq!(map_status_code(429), ErrorCode::ExternalRateLimited);
        assert_eq!(map_status_code(500), ErrorCode::ExternalServiceError);
    }

    #[test]
    fn test_rate_limit_message_extracts_seconds() {
        assert_eq!(
            rate_limit_message("Quota exceeded. Please retry in 6.406453963s."),
            "AI service quota exceeded. Please try again in 7 seconds."
        );
        assert_eq!(
            rate_limit_message("slow down"),
            "AI service quota exceeded. Please wait a moment and try again."
        );
    }

    #[test]
    fn test_capabilities() {
        assert!(LlmCapabilities::full_featured().supports_json_mode());
        assert!(!LlmCapabilities::text_only().supports_json_mode());
        assert!(LlmCapabilities::text_only().supports_system_messages());
        assert_eq!(LlmCapabilities::default(), LlmCapabilities::empty());
        assert!(!LlmCapabilities::empty().supports_system_messages());
    }
}
