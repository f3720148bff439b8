// ABOUTME: Domain models for nutrition requests, nutrition results, and workout plans
// ABOUTME: Immutable value types constructed per request and discarded after display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Core data models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::energy::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use crate::errors::{AppError, AppResult};

/// Gender used to select the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Not stated; shares the female constant
    Unspecified,
}

impl Gender {
    /// Parse from common string forms, case-insensitive
    ///
    /// `"male"`/`"m"` and `"female"`/`"f"` are recognized; anything else is
    /// `Unspecified`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        })
    }
}

/// Fitness goal selecting the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

impl FitnessGoal {
    /// Parse from string, case-insensitive, accepting `_`, `-`, or space separators
    ///
    /// Unrecognized goals fall back to `Maintenance`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            _ => Self::Maintenance,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Maintenance => "maintenance",
        })
    }
}

/// Body metrics and goal for a single nutrition request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for BMR constant selection
    pub gender: Gender,
    /// Fitness goal
    pub goal: FitnessGoal,
}

impl UserProfile {
    /// Build a profile and validate it
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if any field violates its constraint.
    pub fn new(
        goal: FitnessGoal,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
    ) -> AppResult<Self> {
        let profile = Self {
            weight_kg,
            height_cm,
            age,
            gender,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check field constraints: weight and height finite and positive, age positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` naming the first violated field.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_profile(format!(
                "Weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_profile(format!(
                "Height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if self.age == 0 {
            return Err(AppError::invalid_profile("Age must be at least 1 year"));
        }
        Ok(())
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein (g)
    pub protein_grams: u32,
    /// Fat (g)
    pub fat_grams: u32,
    /// Carbohydrates (g)
    pub carb_grams: u32,
}

impl MacroBreakdown {
    /// Calories represented by these grams (4/9/4 kcal per gram)
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        f64::from(self.protein_grams).mul_add(
            PROTEIN_KCAL_PER_G,
            f64::from(self.fat_grams).mul_add(
                FAT_KCAL_PER_G,
                f64::from(self.carb_grams) * CARB_KCAL_PER_G,
            ),
        )
    }
}

/// Output of the nutrition calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Daily calorie target, rounded
    pub daily_calories: u32,
    /// Macronutrient grams derived from the unrounded target
    pub macros: MacroBreakdown,
    /// Basal metabolic rate the target was derived from (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure the target was derived from (kcal/day)
    pub tdee: f64,
}

/// Structured workout recommendation returned by the coach agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Primary focus of the workout (e.g. "upper body", "cardio")
    pub focus_area: String,
    /// Difficulty level (Beginner, Intermediate, Advanced)
    pub difficulty: String,
    /// Recommended exercises
    pub exercises: Vec<String>,
    /// Equipment required
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    /// Rest between sets or exercises
    #[serde(default)]
    pub rest_periods: String,
    /// Form tips and other notes
    #[serde(default)]
    pub notes: String,
}

impl WorkoutPlan {
    /// Check the fields the CLI relies on are populated
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first empty required field.
    pub fn validate(&self) -> AppResult<()> {
        if self.focus_area.trim().is_empty() {
            return Err(AppError::invalid_input("Workout plan has no focus_area"));
        }
        if self.difficulty.trim().is_empty() {
            return Err(AppError::invalid_input("Workout plan has no difficulty"));
        }
        if self.exercises.iter().all(|e| e.trim().is_empty()) {
            return Err(AppError::invalid_input("Workout plan has no exercises"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_gender_parse_forms() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse("m"), Gender::Male);
        assert_eq!(Gender::parse("F"), Gender::Female);
        assert_eq!(Gender::parse("female"), Gender::Female);
        assert_eq!(Gender::parse("nonbinary"), Gender::Unspecified);
        assert_eq!(Gender::parse(""), Gender::Unspecified);
    }

    #[test]
    fn test_goal_parse_separators() {
        assert_eq!(FitnessGoal::parse("weight loss"), FitnessGoal::WeightLoss);
        assert_eq!(FitnessGoal::parse("Weight-Loss"), FitnessGoal::WeightLoss);
        assert_eq!(FitnessGoal::parse("muscle_gain"), FitnessGoal::MuscleGain);
        assert_eq!(FitnessGoal::parse("bulk"), FitnessGoal::Maintenance);
    }

    #[test]
    fn test_profile_rejects_non_positive_fields() {
        let err = UserProfile::new(FitnessGoal::Maintenance, 0.0, 175.0, 30, Gender::Male)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile);

        let err = UserProfile::new(FitnessGoal::Maintenance, 80.0, f64::NAN, 30, Gender::Male)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile);

        let err =
            UserProfile::new(FitnessGoal::Maintenance, 80.0, 175.0, 0, Gender::Male).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile);
    }

    #[test]
    fn test_macro_total_kcal() {
        let macros = MacroBreakdown {
            protein_grams: 214,
            fat_grams: 71,
            carb_grams: 161,
        };
        assert!((macros.total_kcal() - 2139.0).abs() < f64::EPSILON);
    }
}
