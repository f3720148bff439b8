// ABOUTME: Application constants for environment variables, LLM defaults, and nutrition math
// ABOUTME: Centralizes magic values so configuration and calculations share one source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Application-wide constants organized by domain

/// Environment variable names read at startup
pub mod env_vars {
    /// API credential for the hosted model
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Credential name used by older `.env` files
    pub const LEGACY_API_KEY: &str = "API_key";
    /// Provider selector (`openai_compatible` or `gemini`)
    pub const LLM_PROVIDER: &str = "FITAI_LLM_PROVIDER";
    /// Base URL override for the selected provider
    pub const LLM_BASE_URL: &str = "FITAI_LLM_BASE_URL";
    /// Model override
    pub const LLM_MODEL: &str = "FITAI_LLM_MODEL";
    /// Per-request timeout for completion calls, in seconds
    pub const LLM_TIMEOUT_SECS: &str = "FITAI_LLM_TIMEOUT_SECS";
}

/// Defaults for the hosted completion service
pub mod llm {
    /// Default model for every provider
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
    /// Gemini's `OpenAI`-compatible endpoint
    pub const GEMINI_OPENAI_BASE_URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/openai/";
    /// Gemini native `generateContent` endpoint
    pub const GEMINI_NATIVE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Connect timeout for the HTTP client
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARB_KCAL_PER_G: f64 = 4.0;
}

/// Service names used in structured logs
pub mod service_names {
    /// The CLI binary
    pub const FITAI_CLI: &str = "fitai";
}
