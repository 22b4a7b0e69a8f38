// ABOUTME: Progress diagnosis engine deriving pace metrics from a weight goal and observation
// ABOUTME: Computes progress, ideal/real/needed daily change, achievement date, and pace verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Progress Diagnosis Module
//!
//! Derives a coherent set of progress metrics from a [`WeightGoal`] and a
//! [`ProgressSnapshot`], then classifies the observed pace.
//!
//! Every formula is exposed as its own function so request handlers can
//! show intermediate values. All signed quantities follow the goal's
//! direction convention: negative means weight loss, positive means gain.
//!
//! "Today" is never read from the wall clock here. It arrives as
//! `ProgressSnapshot::as_of`, which keeps every function deterministic.

use chrono::Days;
use dietlog_core::constants::diagnosis::PROGRESS_DECIMAL_SCALE;
use dietlog_core::errors::CalculationError;
use dietlog_core::models::{CalendarDate, ProgressSnapshot, WeightGoal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DiagnosisConfig;

/// Derived progress metrics for one diagnosis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Planned signed change from start to goal (kg)
    pub total_change: f64,
    /// Observed signed change from start to now (kg)
    pub current_change: f64,
    /// Share of the planned change achieved, one decimal place, unclamped
    pub progress_percent: f64,
    /// Whole days since the start date, negative if the goal starts later
    pub days_elapsed: i64,
    /// Whole days until the target date, negative once it has passed
    pub remaining_days: i64,
    /// Signed change still needed to reach the goal (kg)
    pub remaining_change: f64,
    /// Constant daily rate that meets the goal exactly on the target date (kg/day)
    pub ideal_daily_change: f64,
    /// Average observed daily rate since the start date (kg/day)
    pub real_daily_change: f64,
    /// Daily rate needed from today to meet the goal on the target date (kg/day)
    pub needed_daily_change: f64,
    /// Projected day the goal is reached at the observed rate
    pub achievement_date: Option<CalendarDate>,
    /// Signed whole days between the projected achievement and the target date
    pub days_from_target: Option<i64>,
}

/// Qualitative classification of the observed pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceVerdict {
    /// Start and goal weights are equal; no direction to judge
    NotApplicable,
    /// Observed change moves away from the goal (or has not started)
    WrongDirection,
    /// No achievement date could be projected
    AtRisk,
    /// Projected achievement is within the tolerance of the target date
    OnPace,
    /// Projected achievement is earlier than the target date
    AheadOfPace,
    /// Projected achievement is later than the target date
    BehindPace,
}

/// Display tone for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceTone {
    /// On schedule
    Good,
    /// Ahead of schedule
    Fast,
    /// Behind schedule or unlikely to make it
    Slow,
    /// Moving the wrong way or not evaluable
    Warning,
}

/// Verdict with the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaceEvaluation {
    /// Classification of the pace
    pub verdict: PaceVerdict,
    /// Display tone
    pub tone: PaceTone,
    /// One-line summary
    pub headline: &'static str,
    /// Advice paragraph
    pub detail: &'static str,
}

impl PaceVerdict {
    /// Display tone for this verdict
    #[must_use]
    pub const fn tone(self) -> PaceTone {
        match self {
            Self::OnPace => PaceTone::Good,
            Self::AheadOfPace => PaceTone::Fast,
            Self::BehindPace | Self::AtRisk => PaceTone::Slow,
            Self::WrongDirection | Self::NotApplicable => PaceTone::Warning,
        }
    }

    /// User-facing message for this verdict
    #[must_use]
    pub const fn evaluation(self) -> PaceEvaluation {
        let (headline, detail) = match self {
            Self::NotApplicable => (
                "Pace cannot be evaluated",
                "The start and goal weights are the same, so there is no pace to evaluate.",
            ),
            Self::WrongDirection => (
                "Heading the wrong way",
                "You seem to be moving away from your goal. Start by reviewing your daily routine a little.",
            ),
            Self::AtRisk => (
                "Reaching the goal on time looks difficult",
                "At the current pace the target date looks hard to reach. Review your meals and activity level within reason.",
            ),
            Self::OnPace => (
                "Great pace, keep it up!",
                "You are progressing almost exactly on schedule. Keep going at a comfortable rhythm.",
            ),
            Self::AheadOfPace => (
                "Impressive pace, but don't overdo it",
                "You are ahead of schedule. You are working hard; look after your health and keep it sustainable.",
            ),
            Self::BehindPace => (
                "The pace is a little slow",
                "You are slightly behind schedule. No need to rush; adjust meals and activity where you can.",
            ),
        };

        PaceEvaluation {
            verdict: self,
            tone: self.tone(),
            headline,
            detail,
        }
    }
}

/// Full diagnosis: numeric metrics plus the pace evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Derived metrics
    pub result: DiagnosisResult,
    /// Pace verdict and message
    pub pace: PaceEvaluation,
}

/// Reject weights that are not finite and strictly positive
fn validate_weight(field: &'static str, weight_kg: f64) -> Result<f64, CalculationError> {
    if !weight_kg.is_finite() {
        return Err(CalculationError::invalid_input(field, "must be a finite number"));
    }
    if weight_kg <= 0.0 {
        return Err(CalculationError::invalid_input(field, "must be positive"));
    }
    Ok(weight_kg)
}

/// Calculate the planned signed change from start to goal
///
/// Formula: `total_change = goal_weight - start_weight`
///
/// # Errors
///
/// Returns `InvalidInput` if either weight is non-finite or non-positive, or
/// if the weights are equal (the direction of travel would be undefined)
#[allow(clippy::float_cmp)]
pub fn calculate_total_change(
    start_weight_kg: f64,
    goal_weight_kg: f64,
) -> Result<f64, CalculationError> {
    let start = validate_weight("start_weight_kg", start_weight_kg)?;
    let goal = validate_weight("goal_weight_kg", goal_weight_kg)?;

    if start == goal {
        return Err(CalculationError::invalid_input(
            "goal_weight_kg",
            "must differ from the start weight",
        ));
    }

    let total_change = goal - start;
    if !total_change.is_finite() {
        return Err(CalculationError::invalid_input(
            "goal_weight_kg",
            "weight difference is not representable",
        ));
    }

    Ok(total_change)
}

/// Calculate the observed signed change from start to now
#[must_use]
pub fn calculate_current_change(start_weight_kg: f64, current_weight_kg: f64) -> f64 {
    current_weight_kg - start_weight_kg
}

/// Calculate progress as a percentage with one decimal place
///
/// Formula: `round(current_change / total_change x 1000) / 10`
///
/// Halves round toward positive infinity. The result is not clamped: an
/// overshoot reports more than 100 and a wrong-way change reports a
/// negative value. `total_change` must be non-zero, which
/// [`calculate_total_change`] guarantees.
#[must_use]
pub fn calculate_progress_percent(current_change: f64, total_change: f64) -> f64 {
    let scaled = current_change / total_change * (100.0 * PROGRESS_DECIMAL_SCALE);
    (scaled + 0.5).floor() / PROGRESS_DECIMAL_SCALE
}

/// Whole days from the start date to today; negative before the start
#[must_use]
pub fn calculate_days_elapsed(start_date: CalendarDate, today: CalendarDate) -> i64 {
    (today - start_date).num_days()
}

/// Whole days from today to the target date; negative once it has passed
#[must_use]
pub fn calculate_remaining_days(target_date: CalendarDate, today: CalendarDate) -> i64 {
    (target_date - today).num_days()
}

/// Signed change still needed: `goal_weight - current_weight`
#[must_use]
pub fn calculate_remaining_change(goal_weight_kg: f64, current_weight_kg: f64) -> f64 {
    goal_weight_kg - current_weight_kg
}

/// Constant daily rate that meets the goal exactly on the target date
///
/// Formula: `total_change / (target_date - start_date)`
///
/// # Errors
///
/// Returns `InvalidDateRange` unless the target date is strictly after the
/// start date
pub fn calculate_ideal_daily_change(
    total_change: f64,
    start_date: CalendarDate,
    target_date: CalendarDate,
) -> Result<f64, CalculationError> {
    let window_days = (target_date - start_date).num_days();
    if window_days <= 0 {
        return Err(CalculationError::InvalidDateRange {
            start_date,
            target_date,
        });
    }
    Ok(total_change / window_days as f64)
}

/// Average observed daily rate since the start date
///
/// Zero until at least one full day has elapsed.
#[must_use]
pub fn calculate_real_daily_change(current_change: f64, days_elapsed: i64) -> f64 {
    if days_elapsed > 0 {
        current_change / days_elapsed as f64
    } else {
        0.0
    }
}

/// Daily rate needed from today to meet the goal on the target date
///
/// On or after the target date the whole remaining change is due at once,
/// so the result is `remaining_change` rather than a division by zero or by
/// a negative day count.
#[must_use]
pub fn calculate_needed_daily_change(remaining_change: f64, remaining_days: i64) -> f64 {
    if remaining_days > 0 {
        remaining_change / remaining_days as f64
    } else {
        remaining_change
    }
}

/// Project the day the remaining change closes at the observed daily rate
///
/// Returns `None` when the rate is zero, when the trend does not point
/// toward the goal, or when the projection falls outside the calendar.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn estimate_achievement_date(
    remaining_change: f64,
    real_daily_change: f64,
    today: CalendarDate,
) -> Option<CalendarDate> {
    if real_daily_change == 0.0 {
        return None;
    }

    let horizon_days = remaining_change / real_daily_change;
    if !horizon_days.is_finite() || horizon_days <= 0.0 {
        return None;
    }

    // Float-to-int casts saturate, so absurd horizons fail the checked add
    let days = horizon_days.ceil() as u64;
    today.checked_add_days(Days::new(days))
}

/// Classify the observed pace
///
/// Evaluated in order: equal weights, wrong direction, no projection, then
/// the signed distance between projected achievement and the target date.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify_pace(
    total_change: f64,
    current_change: f64,
    achievement_date: Option<CalendarDate>,
    target_date: CalendarDate,
    on_pace_tolerance_days: i64,
) -> PaceVerdict {
    if total_change == 0.0 {
        return PaceVerdict::NotApplicable;
    }

    // Opposite signs, or no movement yet
    if total_change * current_change <= 0.0 {
        return PaceVerdict::WrongDirection;
    }

    let Some(achievement) = achievement_date else {
        return PaceVerdict::AtRisk;
    };

    let days_from_target = (achievement - target_date).num_days();
    if days_from_target.abs() <= on_pace_tolerance_days {
        PaceVerdict::OnPace
    } else if days_from_target < 0 {
        PaceVerdict::AheadOfPace
    } else {
        PaceVerdict::BehindPace
    }
}

/// Progress diagnosis engine
///
/// Stateless apart from its configuration; one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ProgressDiagnosisEngine {
    config: DiagnosisConfig,
}

impl ProgressDiagnosisEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: DiagnosisConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &DiagnosisConfig {
        &self.config
    }

    /// Diagnose progress toward `goal` given the observation in `snapshot`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unusable weights and `InvalidDateRange` if
    /// the target date is not after the start date. No partial result is
    /// produced on failure.
    pub fn diagnose(
        &self,
        goal: &WeightGoal,
        snapshot: &ProgressSnapshot,
    ) -> Result<Diagnosis, CalculationError> {
        self.compute(goal, snapshot).inspect_err(|error| {
            warn!(%error, "Rejected progress diagnosis input");
        })
    }

    fn compute(
        &self,
        goal: &WeightGoal,
        snapshot: &ProgressSnapshot,
    ) -> Result<Diagnosis, CalculationError> {
        let today = snapshot.as_of;

        let total_change = calculate_total_change(goal.start_weight_kg, goal.goal_weight_kg)?;
        let current_weight = validate_weight("current_weight_kg", snapshot.current_weight_kg)?;
        let ideal_daily_change =
            calculate_ideal_daily_change(total_change, goal.start_date, goal.target_date)?;

        let current_change = calculate_current_change(goal.start_weight_kg, current_weight);
        let progress_percent = calculate_progress_percent(current_change, total_change);
        let days_elapsed = calculate_days_elapsed(goal.start_date, today);
        let remaining_days = calculate_remaining_days(goal.target_date, today);
        let remaining_change = calculate_remaining_change(goal.goal_weight_kg, current_weight);
        let real_daily_change = calculate_real_daily_change(current_change, days_elapsed);
        let needed_daily_change = calculate_needed_daily_change(remaining_change, remaining_days);
        let achievement_date =
            estimate_achievement_date(remaining_change, real_daily_change, today);
        let days_from_target =
            achievement_date.map(|date| (date - goal.target_date).num_days());

        let verdict = classify_pace(
            total_change,
            current_change,
            achievement_date,
            goal.target_date,
            self.config.on_pace_tolerance_days,
        );

        debug!(
            progress_percent,
            days_elapsed,
            remaining_days,
            real_daily_change,
            achievement_date = ?achievement_date,
            verdict = ?verdict,
            "Progress diagnosed"
        );

        Ok(Diagnosis {
            result: DiagnosisResult {
                total_change,
                current_change,
                progress_percent,
                days_elapsed,
                remaining_days,
                remaining_change,
                ideal_daily_change,
                real_daily_change,
                needed_daily_change,
                achievement_date,
                days_from_target,
            },
            pace: verdict.evaluation(),
        })
    }
}
