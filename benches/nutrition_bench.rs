// ABOUTME: Criterion benchmarks for nutrition calculation, catalog lookup, and query routing
// ABOUTME: Measures the local answer paths that never touch the network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Criterion benchmarks for the deterministic components.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitai_coach::errors::AppResult;
use fitai_coach::intelligence::{ExerciseCatalog, NutritionCalculator};
use fitai_coach::models::{FitnessGoal, Gender, UserProfile};
use fitai_coach::services::{RequestDispatcher, TextCompletionService};

struct EchoCompletion;

#[async_trait]
impl TextCompletionService for EchoCompletion {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        Ok(prompt.to_owned())
    }
}

fn bench_nutrition(c: &mut Criterion) {
    let calculator = NutritionCalculator::default();
    let mut group = c.benchmark_group("nutrition");

    for goal in [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Maintenance,
    ] {
        let profile = UserProfile::new(goal, 80.0, 175.0, 30, Gender::Male).unwrap();
        group.bench_with_input(
            BenchmarkId::new("calculate", goal.to_string()),
            &profile,
            |b, profile| b.iter(|| calculator.calculate(black_box(profile))),
        );
    }

    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_catalog");
    for muscle_group in ["chest", "CORE", "shoulders"] {
        group.bench_with_input(
            BenchmarkId::new("lookup", muscle_group),
            &muscle_group,
            |b, muscle_group| b.iter(|| ExerciseCatalog::lookup(black_box(muscle_group))),
        );
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let dispatcher =
        RequestDispatcher::new(NutritionCalculator::default(), Arc::new(EchoCompletion));

    let mut group = c.benchmark_group("dispatch");
    for (name, query) in [
        ("catalog", "What are some good leg exercises I can do at home?"),
        ("calories", "How many calories should I eat to lose weight?"),
        ("completion", "guide about nutrition fit for me"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| runtime.block_on(dispatcher.dispatch(black_box(query))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nutrition, bench_catalog, bench_dispatch);
criterion_main!(benches);
