// ABOUTME: Local calculation commands for the fitai CLI
// ABOUTME: Nutrition targets for a user-supplied profile and exercise catalog lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use fitai_coach::{
    errors::AppResult,
    intelligence::ExerciseCatalog,
    models::{FitnessGoal, Gender, UserProfile},
    services::{DispatchResponse, ServiceContext},
};
use tracing::info;

/// Calculate and print nutrition targets
pub fn calories(
    services: &ServiceContext,
    goal: &str,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
) -> AppResult<()> {
    let profile = UserProfile::new(
        FitnessGoal::parse(goal),
        weight_kg,
        height_cm,
        age,
        Gender::parse(gender),
    )?;
    info!(goal = %profile.goal, gender = %profile.gender, "Calculating nutrition");

    let result = services.calculator.calculate(&profile)?;
    print!("{}", DispatchResponse::Nutrition(result));
    println!("BMR: {:.2} kcal", result.bmr);
    println!("TDEE: {:.2} kcal", result.tdee);
    Ok(())
}

/// Print the catalog entries for a muscle group
pub fn exercises(group: &str) {
    let group = group.trim().to_lowercase();
    let exercises = ExerciseCatalog::lookup(&group);
    print!(
        "{}",
        DispatchResponse::Exercises {
            muscle_group: group,
            exercises,
        }
    );
    println!();
}
