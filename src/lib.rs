// ABOUTME: Main library entry point for the FitAI fitness assistant
// ABOUTME: Nutrition targets, exercise lookup, keyword dispatch, and LLM-backed answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![deny(unsafe_code)]

//! # FitAI Coach
//!
//! A command-line fitness assistant. Deterministic components answer what
//! they can locally and everything else goes to a hosted model.
//!
//! ## Components
//!
//! - **Intelligence**: Mifflin-St Jeor nutrition calculator and a static exercise catalog
//! - **Services**: keyword dispatcher, completion agents, and structured workout planning
//! - **LLM**: Gemini native and `OpenAI`-compatible providers behind one trait
//! - **Config**: environment configuration validated once at startup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitai_coach::config::AppConfig;
//! use fitai_coach::errors::AppResult;
//! use fitai_coach::services::ServiceContext;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let services = ServiceContext::from_config(&config)?;
//!
//!     let answer = services.dispatcher.dispatch("How many calories should I eat?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Nutrition calculation and exercise lookup
pub mod intelligence;

/// LLM provider abstraction and implementations
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Domain data models
pub mod models;

/// Request handling services
pub mod services;
