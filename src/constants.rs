// ABOUTME: Re-exports application constants from fitai-core
// ABOUTME: Environment variable names, LLM defaults, and macronutrient energy values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

pub use fitai_core::constants::*;
