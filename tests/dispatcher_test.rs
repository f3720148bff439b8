// ABOUTME: Integration tests for keyword routing of free-text queries
// ABOUTME: Checks route precedence, single downstream call, and error propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{init_test_logging, MockCompletionService};
use fitai_coach::{
    errors::ErrorCode,
    intelligence::{ExerciseCatalog, NutritionCalculator},
    services::{DispatchResponse, RequestDispatcher},
};

fn dispatcher(completion: &Arc<MockCompletionService>) -> RequestDispatcher {
    init_test_logging();
    RequestDispatcher::new(NutritionCalculator::default(), completion.clone())
}

#[tokio::test]
async fn test_leg_query_returns_chest_exercises() {
    let completion = Arc::new(MockCompletionService::answering("unused"));
    let dispatcher = dispatcher(&completion);

    let query = "What are some good leg exercises I can do at home without tools?";
    assert_eq!(dispatcher.route(query).map(|r| r.name), Some("exercise_catalog"));

    let response = dispatcher.dispatch(query).await.unwrap();
    assert_eq!(
        response,
        DispatchResponse::Exercises {
            muscle_group: "chest".to_owned(),
            exercises: ExerciseCatalog::lookup("chest"),
        }
    );
    assert!(response
        .to_string()
        .starts_with("Here are recommended chest exercises:\nPush-ups: 3 sets of 10-15 reps"));
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn test_calories_query_uses_demo_profile() {
    let completion = Arc::new(MockCompletionService::answering("unused"));
    let dispatcher = dispatcher(&completion);

    let query = "I'm 30 years old, male, 175cm tall, and weigh 80kg. How many calories should I eat to lose weight?";
    let response = dispatcher.dispatch(query).await.unwrap();

    let DispatchResponse::Nutrition(result) = response else {
        panic!("expected nutrition response, got {response:?}");
    };
    assert_eq!(result.daily_calories, 2211);
    assert_eq!(result.macros.protein_grams, 221);
    assert_eq!(result.macros.fat_grams, 74);
    assert_eq!(result.macros.carb_grams, 166);
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn test_keywords_match_case_insensitively() {
    let completion = Arc::new(MockCompletionService::answering("unused"));
    let dispatcher = dispatcher(&completion);

    assert_eq!(
        dispatcher.route("CHEST day tips").map(|r| r.name),
        Some("exercise_catalog")
    );
    assert_eq!(
        dispatcher.route("How many CALORIES?").map(|r| r.name),
        Some("nutrition_calculator")
    );
}

#[tokio::test]
async fn test_fallback_calls_completion_once() {
    let completion = Arc::new(MockCompletionService::answering("Eat whole foods."));
    let dispatcher = dispatcher(&completion);

    let response = dispatcher
        .dispatch("guide about nutrition fit for me")
        .await
        .unwrap();

    assert_eq!(response, DispatchResponse::Completion("Eat whole foods.".to_owned()));
    assert_eq!(response.to_string(), "Eat whole foods.");
    assert_eq!(completion.calls(), 1);
    assert_eq!(completion.prompts(), ["guide about nutrition fit for me"]);
}

#[tokio::test]
async fn test_completion_failure_propagates_unchanged() {
    let completion = Arc::new(MockCompletionService::failing(
        ErrorCode::ExternalRateLimited,
    ));
    let dispatcher = dispatcher(&completion);

    let err = dispatcher.dispatch("what should I eat?").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(err.root_code(), ErrorCode::ExternalRateLimited);
    assert_eq!(completion.calls(), 1);
}

#[tokio::test]
async fn test_empty_route_table_rejects_query() {
    let completion = Arc::new(MockCompletionService::answering("unused"));
    let dispatcher =
        RequestDispatcher::with_routes(Vec::new(), NutritionCalculator::default(), completion.clone());

    let err = dispatcher.dispatch("anything").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(completion.calls(), 0);
}
