// ABOUTME: Daily calorie and macronutrient targets from body metrics and a fitness goal
// ABOUTME: Mifflin-St Jeor BMR, moderate-activity TDEE, and goal-specific macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Nutrition Calculator Module
//!
//! Deterministic and side-effect free: the same profile and configuration
//! always produce the same [`NutritionResult`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use fitai_core::constants::energy::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use fitai_core::errors::AppResult;
use fitai_core::models::{FitnessGoal, Gender, MacroBreakdown, NutritionResult, UserProfile};
use tracing::debug;

use crate::config::nutrition::{ActivityConfig, BmrConfig, MacroSplit, NutritionConfig};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women and unspecified: -161
///
/// No floor is applied; extreme inputs can produce a small or negative BMR.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidProfile` if weight or height is not a positive finite
/// number, or age is zero
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    UserProfile {
        weight_kg,
        height_cm,
        age,
        gender,
        goal: FitnessGoal::Maintenance,
    }
    .validate()?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Unspecified => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x 1.55 (moderately active, 3-5 days/week)
#[must_use]
pub fn calculate_tdee(bmr: f64, config: &ActivityConfig) -> f64 {
    bmr * config.moderate_multiplier
}

/// Split a calorie target into whole grams of protein, fat, and carbohydrate
///
/// Each macro is rounded independently (half away from zero) from the
/// unrounded target, so the grams converted back to kcal may differ from the
/// rounded target by a few kcal.
#[must_use]
pub fn calculate_macros(target_kcal: f64, split: &MacroSplit) -> MacroBreakdown {
    MacroBreakdown {
        protein_grams: round_non_negative(target_kcal * split.protein / PROTEIN_KCAL_PER_G),
        fat_grams: round_non_negative(target_kcal * split.fat / FAT_KCAL_PER_G),
        carb_grams: round_non_negative(target_kcal * split.carbs / CARB_KCAL_PER_G),
    }
}

/// Calculate daily calorie and macro targets for a profile
///
/// 1. BMR via Mifflin-St Jeor
/// 2. TDEE = BMR x activity multiplier
/// 3. Target = TDEE + goal adjustment (-500 loss, +300 gain, 0 maintenance)
/// 4. Macro grams from the goal's split of the unrounded target
///
/// # Errors
///
/// Returns `InvalidProfile` if the profile violates its field constraints
pub fn calculate_daily_nutrition(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<NutritionResult> {
    profile.validate()?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, &config.activity);

    let goal_target = config.goals.for_goal(profile.goal);
    let target_kcal = tdee + goal_target.calorie_adjustment;
    let macros = calculate_macros(target_kcal, &goal_target.split);

    debug!(
        goal = %profile.goal,
        bmr,
        tdee,
        target_kcal,
        "Calculated daily nutrition"
    );

    Ok(NutritionResult {
        daily_calories: round_non_negative(target_kcal),
        macros,
        bmr,
        tdee,
    })
}

/// Nutrition calculator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    config: NutritionConfig,
}

impl NutritionCalculator {
    /// Create a calculator with the given coefficients
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Coefficients in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Calculate daily targets for a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the profile violates its field constraints
    pub fn calculate(&self, profile: &UserProfile) -> AppResult<NutritionResult> {
        calculate_daily_nutrition(profile, &self.config)
    }
}

/// Round half away from zero, clamping negatives to zero
fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
