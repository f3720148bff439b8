// ABOUTME: Command modules for the fitai CLI
// ABOUTME: Dispatcher queries, agent conversations, and local calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

pub mod agent;
pub mod nutrition;
pub mod query;
