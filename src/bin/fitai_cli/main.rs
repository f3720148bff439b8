// ABOUTME: FitAI CLI - command-line fitness assistant
// ABOUTME: Dispatches queries, greets, plans workouts, and calculates nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors
//!
//! Usage:
//! ```bash
//! # Run the three example queries through the dispatcher
//! fitai demo
//!
//! # Dispatch a single query
//! fitai ask "How many calories should I eat?"
//!
//! # Talk to the greeting agent (reads stdin when no message is given)
//! fitai greet hello
//!
//! # Ask the coach for a structured workout plan
//! fitai workout "I want stronger legs"
//!
//! # Calculate nutrition targets for your own profile
//! fitai calories --goal "muscle gain" --weight 70 --height 180 --age 25 --gender male
//!
//! # Look up catalog exercises
//! fitai exercises back
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fitai_coach::{
    config::AppConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    services::ServiceContext,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitai",
    version,
    about = "FitAI fitness assistant",
    long_about = "Answers fitness questions from a local exercise catalog and nutrition calculator, falling back to a hosted language model."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the built-in example queries through the dispatcher
    Demo,

    /// Dispatch a single free-text query
    Ask {
        /// Question to answer
        query: String,
    },

    /// Send a message to the greeting agent
    Greet {
        /// Message to send (read from stdin if omitted)
        message: Option<String>,
    },

    /// Request a structured workout plan from the coach
    Workout {
        /// What you want to train (defaults to a beginner upper-body request)
        query: Option<String>,
    },

    /// Calculate daily calories and macronutrients
    Calories {
        /// Fitness goal: "weight loss", "muscle gain", or "maintenance"
        #[arg(long, default_value = "maintenance")]
        goal: String,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender: male, female, or anything else for unspecified
        #[arg(long, default_value = "unspecified")]
        gender: String,
    },

    /// List catalog exercises for a muscle group
    Exercises {
        /// Muscle group (chest, back, legs, arms, core)
        group: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Logging setup failed: {e}")))?;

    // Missing credentials end the process here, before any request is handled
    let config = AppConfig::from_env()?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "Configuration loaded");

    let services = ServiceContext::from_config(&config)?;

    match cli.command {
        Command::Demo => commands::query::demo(&services).await?,
        Command::Ask { query } => commands::query::ask(&services, &query).await?,
        Command::Greet { message } => commands::agent::greet(&services, message).await?,
        Command::Workout { query } => commands::agent::workout(&services, query).await?,
        Command::Calories {
            goal,
            weight,
            height,
            age,
            gender,
        } => commands::nutrition::calories(&services, &goal, weight, height, age, &gender)?,
        Command::Exercises { group } => commands::nutrition::exercises(&group),
    }

    Ok(())
}
