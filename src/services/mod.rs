// ABOUTME: Request handling services shared by every CLI command
// ABOUTME: Completion agents, the keyword dispatcher, and structured workout planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Domain service layer
//!
//! Services depend on the [`TextCompletionService`] capability rather than a
//! concrete provider, so tests can substitute a mock.

/// Text completion capability and agents
pub mod completion;

/// Startup wiring of provider, agents, and dispatcher
pub mod context;

/// Ordered keyword routing of free-text queries
pub mod dispatcher;

/// Structured workout plans from the coach agent
pub mod workout;

pub use completion::{Agent, TextCompletionService};
pub use context::ServiceContext;
pub use dispatcher::{
    default_routes, DispatchResponse, RequestDispatcher, Route, RouteHandler, DEMO_PROFILE,
};
pub use workout::{parse_workout_plan, WorkoutPlanner, DEFAULT_WORKOUT_QUERY};
