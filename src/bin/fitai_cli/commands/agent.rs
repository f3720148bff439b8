// ABOUTME: Agent conversation commands for the fitai CLI
// ABOUTME: Greeting agent over stdin and structured workout plans from the coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use fitai_coach::{
    errors::{AppError, AppResult},
    services::{ServiceContext, DEFAULT_WORKOUT_QUERY},
};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::helpers::display::{display_query_header, display_workout_plan};

/// Send a message to the greeting agent, prompting on stdin if none was given
pub async fn greet(services: &ServiceContext, message: Option<String>) -> AppResult<()> {
    let message = match message {
        Some(message) => message,
        None => read_line("Please enter your question: ").await?,
    };
    debug!(chars = message.len(), "Greeting agent input");

    let reply = services.greeter.generate(&message).await?;
    println!("{reply}");
    Ok(())
}

/// Ask the coach for a workout plan and print it
pub async fn workout(services: &ServiceContext, query: Option<String>) -> AppResult<()> {
    let query = query.unwrap_or_else(|| DEFAULT_WORKOUT_QUERY.to_owned());
    display_query_header('*', &query);

    let plan = services.planner.plan(&query).await?;
    display_workout_plan(&plan);
    Ok(())
}

async fn read_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    stdout
        .write_all(prompt.as_bytes())
        .await
        .map_err(|e| AppError::internal(format!("Failed to write prompt: {e}")))?;
    stdout
        .flush()
        .await
        .map_err(|e| AppError::internal(format!("Failed to write prompt: {e}")))?;

    let mut line = String::new();
    BufReader::new(io::stdin())
        .read_line(&mut line)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read input: {e}")))?;

    let line = line.trim();
    if line.is_empty() {
        return Err(AppError::invalid_input("No message entered"));
    }
    Ok(line.to_owned())
}
