// ABOUTME: Typed failure union for the diagnosis, plan, and BMI calculation engines
// ABOUTME: Converts into AppError so request handlers can map failures to status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use chrono::NaiveDate;

use super::{AppError, ErrorCode};

/// Failures raised by the calculation engines.
///
/// Every failure is detected before any result is built, so a caller never
/// receives a partial diagnosis or plan.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    /// Non-finite, non-positive, or degenerate weight/height value
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Target date does not fall strictly after the start date
    #[error("Target date {target_date} must be after start date {start_date}")]
    InvalidDateRange {
        /// Start of the goal window
        start_date: NaiveDate,
        /// End of the goal window
        target_date: NaiveDate,
    },

    /// Plan step interval is not a positive number of days
    #[error("Plan interval must be at least 1 day, got {interval_days}")]
    InvalidInterval {
        /// Interval that was requested
        interval_days: i64,
    },

    /// Plan would exceed the configured number of checkpoints
    #[error("Plan would contain {steps} checkpoints, more than the limit of {max_steps}")]
    PlanTooLarge {
        /// Checkpoints the request would produce
        steps: i64,
        /// Configured ceiling
        max_steps: usize,
    },
}

impl CalculationError {
    /// Shorthand for an [`CalculationError::InvalidInput`]
    #[must_use]
    pub const fn invalid_input(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }

    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            Self::InvalidInterval { .. } | Self::PlanTooLarge { .. } => ErrorCode::InvalidInterval,
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(error: CalculationError) -> Self {
        let app_error = Self::new(error.code(), error.to_string());
        match error {
            CalculationError::InvalidInput { field, .. } => app_error.with_field(field),
            CalculationError::InvalidDateRange {
                start_date,
                target_date,
            } => app_error.with_details(serde_json::json!({
                "start_date": start_date.to_string(),
                "target_date": target_date.to_string(),
            })),
            CalculationError::InvalidInterval { interval_days } => app_error
                .with_field("interval_days")
                .with_details(serde_json::json!({ "interval_days": interval_days })),
            CalculationError::PlanTooLarge { steps, max_steps } => app_error
                .with_field("interval_days")
                .with_details(serde_json::json!({ "steps": steps, "max_steps": max_steps })),
        }
    }
}
