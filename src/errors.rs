// ABOUTME: Re-exports the unified error type from fitai-core
// ABOUTME: Keeps AppError/ErrorCode the same type across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

pub use fitai_core::errors::*;
