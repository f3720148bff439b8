// ABOUTME: Configuration module root for environment and nutrition settings
// ABOUTME: Re-exports the startup configuration types used by the CLI and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Configuration management
//!
//! - **environment**: credential and completion-service settings from the process environment
//! - **nutrition**: BMR coefficients, activity multiplier, and goal macro splits

/// Environment-based configuration loaded at startup
pub mod environment;

/// Nutrition calculation coefficients
pub mod nutrition;

pub use environment::{ApiKey, AppConfig, LlmConfig, LlmProviderType};
pub use nutrition::{
    ActivityConfig, BmrConfig, GoalTarget, GoalTargetsConfig, MacroSplit, NutritionConfig,
};
