// ABOUTME: Core data models re-exported from fitai-core
// ABOUTME: UserProfile, NutritionResult, MacroBreakdown, and WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

pub use fitai_core::models::*;
