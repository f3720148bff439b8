// ABOUTME: Nutrition calculation configuration for BMR, activity, and goal macro splits
// ABOUTME: Defaults reproduce the Mifflin-St Jeor moderate-activity targets used by the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factor: `McArdle` et al. (2010) - Exercise Physiology

use fitai_core::errors::{AppError, AppResult};
use fitai_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Tolerance when checking that a macro split sums to 1.0
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity multiplier applied to BMR
    pub activity: ActivityConfig,
    /// Calorie adjustment and macro split per goal
    pub goals: GoalTargetsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also used when gender is unspecified
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity multiplier for TDEE calculation
///
/// Only the "moderately active" factor is used; there is no per-user activity level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Moderately active (3-5 days/week): 1.55
    pub moderate_multiplier: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            moderate_multiplier: 1.55,
        }
    }
}

/// Fraction of daily calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share (0-1)
    pub protein: f64,
    /// Fat share (0-1)
    pub fat: f64,
    /// Carbohydrate share (0-1)
    pub carbs: f64,
}

impl MacroSplit {
    /// Create a new macro split
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    fn validate(&self, goal: FitnessGoal) -> AppResult<()> {
        let parts = [self.protein, self.fat, self.carbs];
        if parts.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(AppError::config_invalid(format!(
                "Macro split for {goal} must contain non-negative shares"
            )));
        }
        let sum: f64 = parts.iter().sum();
        if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(AppError::config_invalid(format!(
                "Macro split for {goal} must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Calorie adjustment relative to TDEE plus macro split for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTarget {
    /// kcal added to TDEE (negative for a deficit)
    pub calorie_adjustment: f64,
    /// Macro split applied to the adjusted target
    pub split: MacroSplit,
}

/// Goal-specific targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// 500 kcal deficit, 40/30/30 protein/fat/carbs
    pub weight_loss: GoalTarget,
    /// 300 kcal surplus, 30/25/45 protein/fat/carbs
    pub muscle_gain: GoalTarget,
    /// No adjustment, 30/30/40 protein/fat/carbs
    pub maintenance: GoalTarget,
}

impl GoalTargetsConfig {
    /// Target for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: FitnessGoal) -> &GoalTarget {
        match goal {
            FitnessGoal::WeightLoss => &self.weight_loss,
            FitnessGoal::MuscleGain => &self.muscle_gain,
            FitnessGoal::Maintenance => &self.maintenance,
        }
    }
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            weight_loss: GoalTarget {
                calorie_adjustment: -500.0,
                split: MacroSplit::new(0.40, 0.30, 0.30),
            },
            muscle_gain: GoalTarget {
                calorie_adjustment: 300.0,
                split: MacroSplit::new(0.30, 0.25, 0.45),
            },
            maintenance: GoalTarget {
                calorie_adjustment: 0.0,
                split: MacroSplit::new(0.30, 0.30, 0.40),
            },
        }
    }
}

impl NutritionConfig {
    /// Validate coefficients and splits
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the activity multiplier is not positive or
    /// any macro split does not sum to 1.0.
    pub fn validate(&self) -> AppResult<()> {
        if !self.activity.moderate_multiplier.is_finite() || self.activity.moderate_multiplier <= 0.0
        {
            return Err(AppError::config_invalid(
                "Activity multiplier must be a positive number",
            ));
        }
        for goal in [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Maintenance,
        ] {
            self.goals.for_goal(goal).split.validate(goal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitai_core::errors::ErrorCode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_split_must_sum_to_one() {
        let mut config = NutritionConfig::default();
        config.goals.muscle_gain.split = MacroSplit::new(0.5, 0.5, 0.5);

        let err = config.validate().err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::ConfigInvalid));
    }

    #[test]
    fn test_activity_multiplier_must_be_positive() {
        let mut config = NutritionConfig::default();
        config.activity.moderate_multiplier = 0.0;
        assert!(config.validate().is_err());
    }
}
