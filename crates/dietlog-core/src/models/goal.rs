// ABOUTME: Weight goal and progress snapshot value types
// ABOUTME: Defines the single calendar-date convention used by every engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar day with no time-of-day or timezone component.
///
/// Every day count in dietlog is a whole-day difference between two of
/// these, so diagnosis and plan generation always agree on durations.
pub type CalendarDate = NaiveDate;

/// Wire format for calendar dates
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a [`CalendarDate`]
///
/// # Errors
///
/// Returns the chrono parse error if the string is not a valid date
pub fn parse_calendar_date(value: &str) -> Result<CalendarDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT)
}

/// Start/target bounds of a weight change goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightGoal {
    /// Day the goal started
    pub start_date: CalendarDate,
    /// Weight on the start day (kg)
    pub start_weight_kg: f64,
    /// Day the goal should be reached
    pub target_date: CalendarDate,
    /// Weight to reach (kg)
    pub goal_weight_kg: f64,
}

impl WeightGoal {
    /// Create a goal from its four bounds
    #[must_use]
    pub const fn new(
        start_date: CalendarDate,
        start_weight_kg: f64,
        target_date: CalendarDate,
        goal_weight_kg: f64,
    ) -> Self {
        Self {
            start_date,
            start_weight_kg,
            target_date,
            goal_weight_kg,
        }
    }

    /// Whether the goal asks for weight loss
    #[must_use]
    pub fn is_weight_loss(&self) -> bool {
        self.goal_weight_kg < self.start_weight_kg
    }
}

/// A current-weight observation taken on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Observed weight (kg)
    pub current_weight_kg: f64,
    /// Day of the observation, normally today
    pub as_of: CalendarDate,
}

impl ProgressSnapshot {
    /// Create a snapshot for the given day
    #[must_use]
    pub const fn new(current_weight_kg: f64, as_of: CalendarDate) -> Self {
        Self {
            current_weight_kg,
            as_of,
        }
    }
}
