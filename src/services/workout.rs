// ABOUTME: Structured workout plans requested from the coach agent
// ABOUTME: Strips markdown fences, deserializes the JSON object, and validates required fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use std::sync::Arc;

use fitai_core::errors::{AppError, AppResult};
use fitai_core::models::WorkoutPlan;
use tracing::{debug, warn};

use super::completion::TextCompletionService;

/// Query used when the user does not provide one
pub const DEFAULT_WORKOUT_QUERY: &str =
    "I want to build some muscle in my upper body. I'm a beginner and don't have much equipment.";

/// Requests workout plans from a coach and parses the structured answer
pub struct WorkoutPlanner {
    coach: Arc<dyn TextCompletionService>,
}

impl WorkoutPlanner {
    /// Create a planner around a coach that answers in JSON
    pub fn new(coach: Arc<dyn TextCompletionService>) -> Self {
        Self { coach }
    }

    /// Ask the coach for a plan
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` if the coach cannot answer, or
    /// `InvalidInput` if the answer is not a valid workout plan.
    pub async fn plan(&self, query: &str) -> AppResult<WorkoutPlan> {
        let raw = self.coach.generate(query).await?;
        debug!(chars = raw.len(), "Coach responded");
        parse_workout_plan(&raw)
    }
}

/// Parse a model answer into a validated [`WorkoutPlan`]
///
/// Accepts a bare JSON object, a ```` ```json ```` fenced block, or an
/// object surrounded by prose.
///
/// # Errors
///
/// Returns `InvalidInput` if no JSON object can be parsed or a required
/// field is empty.
pub fn parse_workout_plan(raw: &str) -> AppResult<WorkoutPlan> {
    let json = extract_json_object(raw)
        .ok_or_else(|| AppError::invalid_input("Coach response did not contain a JSON object"))?;

    let plan: WorkoutPlan = serde_json::from_str(json).map_err(|e| {
        warn!("Coach response is not a valid workout plan: {}", e);
        AppError::invalid_input(format!("Coach response is not a valid workout plan: {e}"))
            .with_source(e)
    })?;
    plan.validate()?;
    Ok(plan)
}

/// Slice from the first `{` to the last `}` after removing code fences
fn extract_json_object(raw: &str) -> Option<&str> {
    let trimmed = strip_code_fence(raw.trim());
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (start < end).then(|| &trimmed[start..=end])
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
