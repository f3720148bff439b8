// ABOUTME: Output formatting helpers for the fitai CLI
// ABOUTME: Section separators and workout plan rendering on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use fitai_coach::models::WorkoutPlan;

const SEPARATOR_WIDTH: usize = 50;

/// Print the header that precedes each answered query
pub fn display_query_header(marker: char, query: &str) {
    println!("\n{}", marker.to_string().repeat(SEPARATOR_WIDTH));
    println!("QUERY: {query}\n{}", "=".repeat(SEPARATOR_WIDTH));
}

/// Print a dispatcher answer
pub fn display_response(response: &str) {
    println!("RESPONSE:\n{response}");
}

/// Print a workout plan followed by its notes section
pub fn display_workout_plan(plan: &WorkoutPlan) {
    println!("\nSTRUCTURED RESPONSE:");
    println!("Focus area: {}", plan.focus_area);
    println!("Difficulty: {}", plan.difficulty);
    println!("Exercises:");
    for exercise in &plan.exercises {
        println!("  - {exercise}");
    }
    if plan.equipment_needed.is_empty() {
        println!("Equipment needed: none");
    } else {
        println!("Equipment needed: {}", plan.equipment_needed.join(", "));
    }
    println!("Rest periods: {}", plan.rest_periods);

    println!("\n{}", "#".repeat(SEPARATOR_WIDTH));
    println!("\nNOTES:");
    println!("{}", plan.notes);
}
