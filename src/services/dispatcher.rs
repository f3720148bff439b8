// ABOUTME: Keyword router that answers queries from local components before falling back to the model
// ABOUTME: Ordered route table over the exercise catalog, nutrition calculator, and text completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Request dispatcher
//!
//! Routes are evaluated in order against the lowercased query; the first
//! match handles it and exactly one downstream component is called.
//!
//! | Order | Route                  | Matches when the query contains | Handler                         |
//! |-------|------------------------|---------------------------------|---------------------------------|
//! | 1     | `exercise_catalog`     | `exercise` or `chest`           | catalog lookup of `chest`       |
//! | 2     | `nutrition_calculator` | `calories`                      | calculator on the demo profile  |
//! | 3     | `text_completion`      | anything                        | one `generate` call             |
//!
//! The catalog route always looks up `chest`, so "leg exercises" answers
//! with chest exercises.

use std::fmt;
use std::sync::Arc;

use fitai_core::errors::{AppError, AppResult};
use fitai_core::models::{FitnessGoal, Gender, NutritionResult, UserProfile};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::completion::TextCompletionService;
use crate::intelligence::{ExerciseCatalog, NutritionCalculator};

/// Profile used by the calorie route: weight loss, 80 kg, 175 cm, 30 years, male
pub const DEMO_PROFILE: UserProfile = UserProfile {
    weight_kg: 80.0,
    height_cm: 175.0,
    age: 30,
    gender: Gender::Male,
    goal: FitnessGoal::WeightLoss,
};

/// Muscle group the catalog route always looks up
pub const DEFAULT_MUSCLE_GROUP: &str = "chest";

/// What a matched route does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteHandler {
    /// Return the catalog entries for a fixed muscle group
    ExerciseCatalog {
        /// Group to look up
        muscle_group: &'static str,
    },
    /// Run the calculator on a fixed profile
    NutritionCalculator {
        /// Profile to calculate for
        profile: UserProfile,
    },
    /// Forward the original query to the completion service
    TextCompletion,
}

/// One entry in the routing table
#[derive(Clone, Copy)]
pub struct Route {
    /// Stable route name for logs and inspection
    pub name: &'static str,
    /// Predicate over the lowercased query
    pub predicate: fn(&str) -> bool,
    /// Handler run when the predicate matches
    pub handler: RouteHandler,
}

impl Route {
    /// Whether this route handles the query
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        (self.predicate)(&query.to_lowercase())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}

/// The routing table in evaluation order
#[must_use]
pub fn default_routes() -> Vec<Route> {
    vec![
        Route {
            name: "exercise_catalog",
            predicate: |q| q.contains("exercise") || q.contains("chest"),
            handler: RouteHandler::ExerciseCatalog {
                muscle_group: DEFAULT_MUSCLE_GROUP,
            },
        },
        Route {
            name: "nutrition_calculator",
            predicate: |q| q.contains("calories"),
            handler: RouteHandler::NutritionCalculator {
                profile: DEMO_PROFILE,
            },
        },
        Route {
            name: "text_completion",
            predicate: |_| true,
            handler: RouteHandler::TextCompletion,
        },
    ]
}

/// Answer produced by a route
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResponse {
    /// Catalog entries for a muscle group
    Exercises {
        /// Group that was looked up
        muscle_group: String,
        /// Entries in catalog order
        exercises: Vec<String>,
    },
    /// Calculated nutrition targets
    Nutrition(NutritionResult),
    /// Text returned by the completion service
    Completion(String),
}

impl fmt::Display for DispatchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exercises {
                muscle_group,
                exercises,
            } => {
                writeln!(f, "Here are recommended {muscle_group} exercises:")?;
                f.write_str(&exercises.join("\n"))
            }
            Self::Nutrition(result) => {
                writeln!(f, "Daily Calorie Needs: {} kcal", result.daily_calories)?;
                writeln!(f, "Macronutrient Breakdown:")?;
                writeln!(f, "- Protein: {}g", result.macros.protein_grams)?;
                writeln!(f, "- Fat: {}g", result.macros.fat_grams)?;
                writeln!(f, "- Carbs: {}g", result.macros.carb_grams)
            }
            Self::Completion(text) => f.write_str(text),
        }
    }
}

/// Routes free-text queries to the component that answers them
pub struct RequestDispatcher {
    routes: Vec<Route>,
    calculator: NutritionCalculator,
    completion: Arc<dyn TextCompletionService>,
}

impl RequestDispatcher {
    /// Create a dispatcher with the default routing table
    pub fn new(calculator: NutritionCalculator, completion: Arc<dyn TextCompletionService>) -> Self {
        Self::with_routes(default_routes(), calculator, completion)
    }

    /// Create a dispatcher with an explicit routing table
    pub fn with_routes(
        routes: Vec<Route>,
        calculator: NutritionCalculator,
        completion: Arc<dyn TextCompletionService>,
    ) -> Self {
        Self {
            routes,
            calculator,
            completion,
        }
    }

    /// Routing table in evaluation order
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The first route whose predicate matches the query
    #[must_use]
    pub fn route(&self, query: &str) -> Option<&Route> {
        let lowered = query.to_lowercase();
        self.routes.iter().find(|route| (route.predicate)(&lowered))
    }

    /// Answer a query through the first matching route
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` unchanged from the completion
    /// service, `InvalidProfile` if a calculator route carries an invalid
    /// profile, or `InvalidInput` if no route matches.
    pub async fn dispatch(&self, query: &str) -> AppResult<DispatchResponse> {
        let route = *self
            .route(query)
            .ok_or_else(|| AppError::invalid_input("No route matched the query"))?;

        let span = info_span!(
            "dispatch",
            request_id = %Uuid::new_v4(),
            route = route.name
        );

        async move {
            info!("Dispatching query");
            self.handle(route.handler, query).await
        }
        .instrument(span)
        .await
    }

    async fn handle(&self, handler: RouteHandler, query: &str) -> AppResult<DispatchResponse> {
        match handler {
            RouteHandler::ExerciseCatalog { muscle_group } => Ok(DispatchResponse::Exercises {
                muscle_group: muscle_group.to_owned(),
                exercises: ExerciseCatalog::lookup(muscle_group),
            }),
            RouteHandler::NutritionCalculator { profile } => self
                .calculator
                .calculate(&profile)
                .map(DispatchResponse::Nutrition),
            RouteHandler::TextCompletion => self
                .completion
                .generate(query)
                .await
                .map(DispatchResponse::Completion),
        }
    }
}

impl fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
