// ABOUTME: Wires the configured provider into the agents, dispatcher, and workout planner
// ABOUTME: Built once at startup from the validated configuration and shared read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use std::sync::Arc;

use fitai_core::errors::AppResult;
use tracing::debug;

use super::completion::{Agent, TextCompletionService};
use super::dispatcher::RequestDispatcher;
use super::workout::WorkoutPlanner;
use crate::config::AppConfig;
use crate::intelligence::NutritionCalculator;
use crate::llm::{ChatProvider, LlmProvider};

/// Everything a command needs to answer a request
pub struct ServiceContext {
    /// Keyword router for free-text queries
    pub dispatcher: RequestDispatcher,
    /// Greeting-only agent
    pub greeter: Arc<dyn TextCompletionService>,
    /// Structured workout planner
    pub planner: WorkoutPlanner,
    /// Calculator configured from `AppConfig::nutrition`
    pub calculator: NutritionCalculator,
}

impl ServiceContext {
    /// Build the services for a validated configuration
    ///
    /// No network call is made here.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let provider: Arc<dyn LlmProvider> = Arc::new(ChatProvider::from_config(&config.llm)?);
        debug!(
            provider = provider.display_name(),
            model = provider.default_model(),
            "LLM provider ready"
        );
        Ok(Self::with_provider(config, provider))
    }

    /// Build the services around an existing provider
    pub fn with_provider(config: &AppConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let calculator = NutritionCalculator::new(config.nutrition.clone());
        let assistant: Arc<dyn TextCompletionService> =
            Arc::new(Agent::fitness_assistant(Arc::clone(&provider)));
        let coach: Arc<dyn TextCompletionService> =
            Arc::new(Agent::fitness_coach(Arc::clone(&provider)));

        Self {
            dispatcher: RequestDispatcher::new(calculator.clone(), assistant),
            greeter: Arc::new(Agent::greeter(provider)),
            planner: WorkoutPlanner::new(coach),
            calculator,
        }
    }
}
