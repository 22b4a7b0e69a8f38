// ABOUTME: Weight plan generator producing fixed-interval checkpoints between start and goal
// ABOUTME: Assumes linear progress at the ideal daily rate and always ends exactly on the goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Plan Generator Module
//!
//! Builds an ordered list of intermediate target weights at day offsets
//! `interval, 2 x interval, ...` strictly before the goal window ends, then
//! appends the goal itself at `total_days`. The final checkpoint is assigned
//! the goal weight directly, so it is exact regardless of rate rounding.

use dietlog_core::constants::plan::MAX_PLAN_STEPS;
use dietlog_core::errors::CalculationError;
use dietlog_core::models::{CalendarDate, WeightGoal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PlanConfig;

/// A scheduled checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Days from the start date
    pub day: i64,
    /// Target weight on that day (kg)
    pub weight_kg: f64,
}

/// Plan with the summary figures shown alongside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPlan {
    /// Planned signed change (kg)
    pub total_change: f64,
    /// Whole days in the goal window
    pub total_days: i64,
    /// Linear daily rate the checkpoints follow (kg/day)
    pub ideal_daily_change: f64,
    /// Spacing between checkpoints (days)
    pub interval_days: i64,
    /// Checkpoints, strictly increasing in `day`
    pub steps: Vec<PlanStep>,
}

/// Planned signed change: `goal_weight - start_weight`
#[must_use]
pub fn calculate_plan_total_change(start_weight_kg: f64, goal_weight_kg: f64) -> f64 {
    goal_weight_kg - start_weight_kg
}

/// Whole days between the start and target dates
#[must_use]
pub fn calculate_total_days(start_date: CalendarDate, target_date: CalendarDate) -> i64 {
    (target_date - start_date).num_days()
}

/// Linear daily rate over the plan window, zero for an empty window
#[must_use]
pub fn calculate_plan_ideal_daily_change(total_change: f64, total_days: i64) -> f64 {
    if total_days == 0 {
        0.0
    } else {
        total_change / total_days as f64
    }
}

/// Number of checkpoints a plan will contain
const fn planned_step_count(total_days: i64, interval_days: i64) -> i64 {
    if total_days <= 0 {
        0
    } else {
        // Intermediate days interval..total_days-1, plus the final goal step
        (total_days - 1) / interval_days + 1
    }
}

fn build_plan(
    goal: &WeightGoal,
    interval_days: i64,
    max_steps: usize,
) -> Result<WeightPlan, CalculationError> {
    if interval_days <= 0 {
        return Err(CalculationError::InvalidInterval { interval_days });
    }

    let total_change = calculate_plan_total_change(goal.start_weight_kg, goal.goal_weight_kg);
    let total_days = calculate_total_days(goal.start_date, goal.target_date);
    let ideal_daily_change = calculate_plan_ideal_daily_change(total_change, total_days);

    let step_count = planned_step_count(total_days, interval_days);
    if step_count > i64::try_from(max_steps).unwrap_or(i64::MAX) {
        return Err(CalculationError::PlanTooLarge {
            steps: step_count,
            max_steps,
        });
    }

    let mut steps = Vec::with_capacity(step_count as usize);
    let mut day = interval_days;
    while day < total_days {
        steps.push(PlanStep {
            day,
            weight_kg: goal.start_weight_kg + ideal_daily_change * day as f64,
        });
        day += interval_days;
    }

    if total_days > 0 {
        steps.push(PlanStep {
            day: total_days,
            weight_kg: goal.goal_weight_kg,
        });
    }

    Ok(WeightPlan {
        total_change,
        total_days,
        ideal_daily_change,
        interval_days,
        steps,
    })
}

/// Generate checkpoints for `goal` every `interval_days` days
///
/// The result is empty when the target date is not after the start date.
///
/// # Errors
///
/// Returns `InvalidInterval` if `interval_days` is not positive and
/// `PlanTooLarge` if the plan would exceed the default checkpoint limit
pub fn generate_plan(
    goal: &WeightGoal,
    interval_days: i64,
) -> Result<Vec<PlanStep>, CalculationError> {
    build_plan(goal, interval_days, MAX_PLAN_STEPS).map(|plan| plan.steps)
}

/// Plan generator with a configurable checkpoint limit
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    config: PlanConfig,
}

impl PlanGenerator {
    /// Create a generator with the given configuration
    #[must_use]
    pub const fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Build a plan with its summary figures
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `interval_days` is not positive and
    /// `PlanTooLarge` if the plan would exceed `PlanConfig::max_steps`
    pub fn create_plan(
        &self,
        goal: &WeightGoal,
        interval_days: i64,
    ) -> Result<WeightPlan, CalculationError> {
        let plan = build_plan(goal, interval_days, self.config.max_steps).inspect_err(|error| {
            warn!(%error, "Rejected plan request");
        })?;

        debug!(
            total_days = plan.total_days,
            interval_days,
            steps = plan.steps.len(),
            ideal_daily_change = plan.ideal_daily_change,
            "Weight plan generated"
        );

        Ok(plan)
    }
}
