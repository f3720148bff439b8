// ABOUTME: Dispatcher-backed commands for the fitai CLI
// ABOUTME: Runs the example query set or a single user query through the keyword router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

use fitai_coach::{errors::AppResult, services::ServiceContext};
use tracing::info;

use crate::helpers::display::{display_query_header, display_response};

/// Example queries covering each route in order
const DEMO_QUERIES: [&str; 3] = [
    "What are some good leg exercises I can do at home without tools?",
    "I'm 30 years old, male, 175cm tall, and weigh 80kg. How many calories should I eat to lose weight?",
    "guide about nutrition fit for me",
];

/// Answer each example query in sequence
pub async fn demo(services: &ServiceContext) -> AppResult<()> {
    info!("Running {} example queries", DEMO_QUERIES.len());
    for query in DEMO_QUERIES {
        answer(services, query).await?;
    }
    Ok(())
}

/// Answer one query
pub async fn ask(services: &ServiceContext, query: &str) -> AppResult<()> {
    answer(services, query).await
}

async fn answer(services: &ServiceContext, query: &str) -> AppResult<()> {
    display_query_header('#', query);
    let response = services.dispatcher.dispatch(query).await?;
    display_response(&response.to_string());
    Ok(())
}
