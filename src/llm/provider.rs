// ABOUTME: Unified LLM provider selector built from the startup configuration
// ABOUTME: Wraps the native Gemini and OpenAI-compatible providers behind one type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! # LLM Provider Selector
//!
//! `FITAI_LLM_PROVIDER` picks the API shape:
//! - `openai_compatible` (default): Gemini through its `OpenAI`-compatible endpoint
//! - `gemini`: the native `generateContent` API

use std::fmt;

use async_trait::async_trait;
use fitai_core::errors::AppError;
use tracing::info;

use super::{
    ChatRequest, ChatResponse, GeminiProvider, LlmCapabilities, LlmProvider,
    OpenAiCompatibleConfig, OpenAiCompatibleProvider,
};
use crate::config::{LlmConfig, LlmProviderType};

/// Unified chat provider that wraps the configured backend
pub enum ChatProvider {
    /// Native Gemini API
    Gemini(GeminiProvider),
    /// `OpenAI`-compatible chat completions API
    OpenAiCompatible(OpenAiCompatibleProvider),
}

impl ChatProvider {
    /// Create the provider described by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &LlmConfig) -> Result<Self, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            config.provider,
            LlmProviderType::ENV_VAR
        );

        let provider = match config.provider {
            LlmProviderType::Gemini => Self::Gemini(
                GeminiProvider::with_timeout(config.api_key.expose(), config.request_timeout)?
                    .with_base_url(&config.base_url)
                    .with_default_model(&config.model),
            ),
            LlmProviderType::OpenAiCompatible => {
                let provider_config = OpenAiCompatibleConfig::gemini(config.api_key.expose())
                    .with_base_url(&config.base_url)
                    .with_default_model(&config.model)
                    .with_request_timeout(config.request_timeout);
                Self::OpenAiCompatible(OpenAiCompatibleProvider::new(provider_config)?)
            }
        };
        Ok(provider)
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(p) => f.debug_tuple("ChatProvider::Gemini").field(p).finish(),
            Self::OpenAiCompatible(p) => f
                .debug_tuple("ChatProvider::OpenAiCompatible")
                .field(p)
                .finish(),
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::OpenAiCompatible(p) => p.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.display_name(),
            Self::OpenAiCompatible(p) => p.display_name(),
        }
    }

    fn capabilities(&self) -> LlmCapabilities {
        match self {
            Self::Gemini(p) => p.capabilities(),
            Self::OpenAiCompatible(p) => p.capabilities(),
        }
    }

    fn default_model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.default_model(),
            Self::OpenAiCompatible(p) => p.default_model(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match self {
            Self::Gemini(p) => p.complete(request).await,
            Self::OpenAiCompatible(p) => p.complete(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_provider_follows_config() {
        let Ok(key) = ApiKey::new("test-key") else {
            unreachable!("non-empty key is valid");
        };
        let config = LlmConfig::new(LlmProviderType::Gemini, key.clone());
        assert!(ChatProvider::from_config(&config).is_ok_and(|p| p.name() == "gemini"));

        let config = LlmConfig::new(LlmProviderType::OpenAiCompatible, key).with_model("custom");
        assert!(ChatProvider::from_config(&config)
            .is_ok_and(|p| p.name() == "openai_compatible" && p.default_model() == "custom"));
    }
}
