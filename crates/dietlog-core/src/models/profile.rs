// ABOUTME: Stored goal profile with optional fields used as request defaults
// ABOUTME: Request values override the profile; resolve() reports the first missing field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde::{Deserialize, Serialize};

use super::goal::{CalendarDate, WeightGoal};
use crate::errors::{AppError, AppResult};

/// A user's saved goal settings. Any field may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Saved start date
    pub start_date: Option<CalendarDate>,
    /// Saved start weight (kg)
    pub start_weight_kg: Option<f64>,
    /// Saved target date
    pub target_date: Option<CalendarDate>,
    /// Saved goal weight (kg)
    pub goal_weight_kg: Option<f64>,
}

impl GoalProfile {
    /// Overlay `overrides` on top of this profile; set fields in `overrides` win
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        Self {
            start_date: overrides.start_date.or(self.start_date),
            start_weight_kg: overrides.start_weight_kg.or(self.start_weight_kg),
            target_date: overrides.target_date.or(self.target_date),
            goal_weight_kg: overrides.goal_weight_kg.or(self.goal_weight_kg),
        }
    }

    /// Whether every field is set
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.start_date.is_some()
            && self.start_weight_kg.is_some()
            && self.target_date.is_some()
            && self.goal_weight_kg.is_some()
    }

    /// Build a [`WeightGoal`] from the profile
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first unset field
    pub fn resolve(&self) -> AppResult<WeightGoal> {
        let start_date = self
            .start_date
            .ok_or_else(|| AppError::missing_field("start_date"))?;
        let start_weight_kg = self
            .start_weight_kg
            .ok_or_else(|| AppError::missing_field("start_weight_kg"))?;
        let target_date = self
            .target_date
            .ok_or_else(|| AppError::missing_field("target_date"))?;
        let goal_weight_kg = self
            .goal_weight_kg
            .ok_or_else(|| AppError::missing_field("goal_weight_kg"))?;

        Ok(WeightGoal::new(
            start_date,
            start_weight_kg,
            target_date,
            goal_weight_kg,
        ))
    }
}
