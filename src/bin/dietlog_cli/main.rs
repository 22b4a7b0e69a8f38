// ABOUTME: Dietlog CLI - command-line front end for progress diagnosis, plans, and BMI
// ABOUTME: Parses flags, loads environment configuration, and dispatches through the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors
//!
//! Usage:
//! ```bash
//! # Where am I against my goal?
//! dietlog-cli diagnose --start-date 2024-01-01 --start-weight 80 \
//!     --target-date 2024-03-31 --goal-weight 72 --current-weight 77.4
//!
//! # Checkpoints every 7 days (or DIETLOG_DEFAULT_PLAN_INTERVAL_DAYS)
//! dietlog-cli plan --start-date 2024-01-01 --start-weight 80 \
//!     --target-date 2024-03-31 --goal-weight 72
//!
//! # BMI with JSON output
//! dietlog-cli --json bmi --height-cm 170 --weight-kg 65
//!
//! # Pretend today is another day
//! dietlog-cli --today 2024-02-15 diagnose ...
//! ```

mod commands;

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use dietlog::config::AppConfig;
use dietlog::models::{parse_calendar_date, CalendarDate};
use dietlog::tools::{ToolExecutionContext, ToolRegistry};
use tracing::debug;

use commands::{GoalArgs, OutputMode};

#[derive(Parser)]
#[command(
    name = "dietlog-cli",
    about = "Dietlog weight goal calculator",
    long_about = "Diagnose progress toward a weight goal, generate a checkpoint plan, or calculate BMI."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Day to treat as today (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<CalendarDate>,

    /// Print the raw JSON result
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Diagnose progress toward the goal
    Diagnose {
        #[command(flatten)]
        goal: GoalArgs,

        /// Today's weight in kilograms
        #[arg(long)]
        current_weight: String,
    },

    /// Generate checkpoint weights between start and goal
    Plan {
        #[command(flatten)]
        goal: GoalArgs,

        /// Days between checkpoints
        #[arg(long)]
        interval_days: Option<i64>,
    },

    /// Calculate body mass index
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height_cm: String,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: String,
    },
}

fn parse_date_arg(value: &str) -> Result<CalendarDate, String> {
    parse_calendar_date(value).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init().context("Failed to initialize logging")?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, "Dietlog CLI");

    let registry = ToolRegistry::with_builtin_tools();
    let ctx = ToolExecutionContext::new(today, Arc::new(config.intelligence));
    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    match cli.command {
        Command::Diagnose {
            goal,
            current_weight,
        } => commands::diagnose::run(&registry, &ctx, &goal, &current_weight, output)?,
        Command::Plan {
            goal,
            interval_days,
        } => {
            let interval_days = interval_days.unwrap_or(config.default_plan_interval_days);
            commands::plan::run(&registry, &ctx, &goal, interval_days, output)?;
        }
        Command::Bmi {
            height_cm,
            weight_kg,
        } => commands::bmi::run(&registry, &ctx, &height_cm, &weight_kg, output)?,
    }

    Ok(())
}
