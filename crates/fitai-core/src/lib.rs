// ABOUTME: Core types and constants for the FitAI fitness assistant
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![deny(unsafe_code)]

//! # FitAI Core
//!
//! Foundation crate providing shared types for the FitAI coach. It has no
//! network or runtime dependencies so the deterministic nutrition and
//! exercise logic can build against it alone.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Environment variable names, defaults, and energy densities
//! - **models**: User profile, nutrition results, and workout plan types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `NutritionResult`, `WorkoutPlan`)
pub mod models;
