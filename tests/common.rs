// ABOUTME: Shared test utilities and fixtures for dietlog integration tests
// ABOUTME: Provides a fixed "today", sample goals, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `dietlog`

use std::sync::{Arc, Once};

use dietlog::config::IntelligenceConfig;
use dietlog::models::{parse_calendar_date, CalendarDate, ProgressSnapshot, WeightGoal};
use dietlog::tools::ToolExecutionContext;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(value: &str) -> CalendarDate {
    parse_calendar_date(value).expect("valid test date")
}

/// Fixed "today" used throughout the suite
pub fn today() -> CalendarDate {
    date("2024-01-21")
}

/// 80 kg -> 70 kg between 2024-01-01 and 2024-03-01 (60 days)
pub fn loss_goal() -> WeightGoal {
    WeightGoal::new(date("2024-01-01"), 80.0, date("2024-03-01"), 70.0)
}

/// 60 kg -> 66 kg between 2024-01-01 and 2024-03-01 (60 days)
pub fn gain_goal() -> WeightGoal {
    WeightGoal::new(date("2024-01-01"), 60.0, date("2024-03-01"), 66.0)
}

/// Snapshot on the fixed "today"
pub fn snapshot(current_weight_kg: f64) -> ProgressSnapshot {
    ProgressSnapshot::new(current_weight_kg, today())
}

/// Tool context with default configuration on the fixed "today"
pub fn tool_context() -> ToolExecutionContext {
    init_test_logging();
    ToolExecutionContext::new(today(), Arc::new(IntelligenceConfig::default()))
}
