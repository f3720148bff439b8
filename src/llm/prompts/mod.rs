// ABOUTME: System prompts for the FitAI agents loaded at compile time
// ABOUTME: General assistant, greeting agent, and structured-output fitness coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// General fitness assistant used for queries the dispatcher cannot answer locally
pub const FITNESS_ASSISTANT_PROMPT: &str = include_str!("fitness_assistant.md");

/// Greeting-only agent
pub const GREETING_AGENT_PROMPT: &str = include_str!("greeting_agent.md");

/// Fitness coach that answers with a JSON workout plan
pub const FITNESS_COACH_PROMPT: &str = include_str!("fitness_coach.md");

