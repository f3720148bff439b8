// ABOUTME: Environment-based configuration loaded once at startup and held immutably
// ABOUTME: Reads the API credential, provider selection, endpoint, model, and timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Environment-based configuration management
//!
//! Configuration is read from the process environment, after loading a
//! `.env` file if one exists. A missing credential is a fatal startup
//! condition: [`AppConfig::from_env`] fails before any request is processed.

use std::env;
use std::fmt;
use std::time::Duration;

use fitai_core::constants::{env_vars, llm};
use fitai_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::nutrition::NutritionConfig;

/// Which HTTP API shape is used to reach the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LlmProviderType {
    /// `OpenAI`-compatible `chat/completions` (Gemini's compatibility endpoint by default)
    #[default]
    OpenAiCompatible,
    /// Native Gemini `generateContent`
    Gemini,
}

impl LlmProviderType {
    /// Environment variable that selects the provider
    pub const ENV_VAR: &'static str = env_vars::LLM_PROVIDER;

    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for unknown provider names.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai_compatible" | "openai-compatible" | "openai" => Ok(Self::OpenAiCompatible),
            "gemini" => Ok(Self::Gemini),
            other => Err(AppError::config_invalid(format!(
                "Unknown {} value '{other}' (expected 'openai_compatible' or 'gemini')",
                Self::ENV_VAR
            ))),
        }
    }

    /// Default base URL for this provider
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAiCompatible => llm::GEMINI_OPENAI_BASE_URL,
            Self::Gemini => llm::GEMINI_NATIVE_BASE_URL,
        }
    }
}

impl fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenAiCompatible => "openai_compatible",
            Self::Gemini => "gemini",
        })
    }
}

/// API credential for the hosted model
///
/// `Debug` output is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AppError::config_invalid("API key must not be empty"));
        }
        Ok(Self(key))
    }

    /// The raw credential, for request signing only
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Completion service settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Provider API shape
    pub provider: LlmProviderType,
    /// API credential
    pub api_key: ApiKey,
    /// Base URL for the provider API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Timeout applied to each completion request
    pub request_timeout: Duration,
}

impl LlmConfig {
    /// Settings for a provider with its default endpoint and model
    #[must_use]
    pub fn new(provider: LlmProviderType, api_key: ApiKey) -> Self {
        Self {
            provider,
            api_key,
            base_url: provider.default_base_url().to_owned(),
            model: llm::DEFAULT_MODEL.to_owned(),
            request_timeout: Duration::from_secs(llm::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Application configuration, validated at startup and never mutated
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Completion service settings
    pub llm: LlmConfig,
    /// Nutrition calculation coefficients
    pub nutrition: NutritionConfig,
}

impl AppConfig {
    /// Build a configuration around explicit LLM settings with default nutrition math
    #[must_use]
    pub fn new(llm: LlmConfig) -> Self {
        Self {
            llm,
            nutrition: NutritionConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Loads `.env` first if present, then reads the variables listed in
    /// [`env_vars`]. The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no API key is set, or `ConfigInvalid` if any
    /// value cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }
        Self::from_current_env()
    }

    /// Load configuration from the process environment without reading `.env`
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_current_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = ApiKey::new(read_api_key()?)?;

        let provider = non_empty_var(env_vars::LLM_PROVIDER)
            .map(|v| LlmProviderType::parse(&v))
            .transpose()?
            .unwrap_or_default();

        let mut llm_config = LlmConfig::new(provider, api_key);
        if let Some(base_url) = non_empty_var(env_vars::LLM_BASE_URL) {
            llm_config = llm_config.with_base_url(base_url);
        }
        if let Some(model) = non_empty_var(env_vars::LLM_MODEL) {
            llm_config = llm_config.with_model(model);
        }
        if let Some(timeout) = non_empty_var(env_vars::LLM_TIMEOUT_SECS) {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                AppError::config_invalid(format!(
                    "Invalid {} value '{timeout}' (expected whole seconds)",
                    env_vars::LLM_TIMEOUT_SECS
                ))
            })?;
            llm_config.request_timeout = Duration::from_secs(secs);
        }

        let config = Self::new(llm_config);
        config.validate()?;

        info!(
            provider = %config.llm.provider,
            model = %config.llm.model,
            base_url = %config.llm.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate the full configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` on an unusable URL, empty model, zero timeout,
    /// or invalid nutrition coefficients.
    pub fn validate(&self) -> AppResult<()> {
        let base_url = self.llm.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config_invalid(format!(
                "{} must be an http(s) URL, got '{base_url}'",
                env_vars::LLM_BASE_URL
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(AppError::config_invalid("Model name must not be empty"));
        }
        if self.llm.request_timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_vars::LLM_TIMEOUT_SECS
            )));
        }
        self.nutrition.validate()
    }
}

/// Read the credential from the primary variable, then the legacy alias
fn read_api_key() -> AppResult<String> {
    non_empty_var(env_vars::GEMINI_API_KEY)
        .or_else(|| non_empty_var(env_vars::LEGACY_API_KEY))
        .ok_or_else(|| {
            AppError::config_missing(format!(
                "{} is not set. Please ensure it is defined in your environment or .env file",
                env_vars::GEMINI_API_KEY
            ))
        })
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(
            LlmProviderType::parse("gemini").ok(),
            Some(LlmProviderType::Gemini)
        );
        assert_eq!(
            LlmProviderType::parse("OpenAI-Compatible").ok(),
            Some(LlmProviderType::OpenAiCompatible)
        );
        assert!(LlmProviderType::parse("groq").is_err());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("secret-value").ok();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("secret-value"));
    }
}
