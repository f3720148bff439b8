// ABOUTME: Deterministic fitness intelligence that runs without the completion service
// ABOUTME: Nutrition targets from body metrics and the static exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! # Intelligence Module
//!
//! Pure, synchronous components the dispatcher can answer from directly.

/// Static muscle-group exercise table
pub mod exercise_catalog;
/// Mifflin-St Jeor calorie and macro calculation
pub mod nutrition_calculator;

pub use exercise_catalog::{ExerciseCatalog, NO_DATA_MESSAGE};
pub use nutrition_calculator::{
    calculate_daily_nutrition, calculate_macros, calculate_mifflin_st_jeor, calculate_tdee,
    NutritionCalculator,
};
