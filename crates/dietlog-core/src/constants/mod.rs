// ABOUTME: Domain constants for progress diagnosis, plan generation, and BMI bands
// ABOUTME: Defaults here back the environment-driven configuration in the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Constants Module
//!
//! Hardcoded defaults grouped by concern. Anything a deployment may want to
//! tune is mirrored by a configuration field that falls back to these values.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the CLI and logging setup
    pub const DIETLOG: &str = "dietlog";
}

/// Progress diagnosis defaults
pub mod diagnosis {
    /// Achievement date within this many days of the target counts as on pace
    pub const ON_PACE_TOLERANCE_DAYS: i64 = 1;

    /// Progress is reported as a percentage with one decimal place
    pub const PROGRESS_DECIMAL_SCALE: f64 = 10.0;
}

/// Plan generation defaults
pub mod plan {
    /// Interval used by the CLI when none is given (one weekly weigh-in)
    pub const DEFAULT_INTERVAL_DAYS: i64 = 7;

    /// Upper bound on checkpoints in one plan (ten years of daily steps)
    pub const MAX_PLAN_STEPS: usize = 3660;
}

/// Body mass index category bands (Japan Society for the Study of Obesity)
pub mod bmi {
    /// Below this BMI is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this BMI is normal weight
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this BMI is obesity class 1
    pub const OBESE_1_UPPER: f64 = 30.0;
    /// Below this BMI is obesity class 2
    pub const OBESE_2_UPPER: f64 = 35.0;
    /// Below this BMI is obesity class 3, at or above is class 4
    pub const OBESE_3_UPPER: f64 = 40.0;

    /// Centimetres per metre, for form input conversion
    pub const CM_PER_M: f64 = 100.0;
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// On-pace tolerance in days
    pub const PACE_TOLERANCE_DAYS: &str = "DIETLOG_PACE_TOLERANCE_DAYS";
    /// Maximum checkpoints per plan
    pub const PLAN_MAX_STEPS: &str = "DIETLOG_PLAN_MAX_STEPS";
    /// Default plan interval for the CLI
    pub const DEFAULT_PLAN_INTERVAL_DAYS: &str = "DIETLOG_DEFAULT_PLAN_INTERVAL_DAYS";
    /// BMI underweight upper bound
    pub const BMI_UNDERWEIGHT: &str = "DIETLOG_BMI_UNDERWEIGHT";
    /// BMI normal upper bound
    pub const BMI_NORMAL: &str = "DIETLOG_BMI_NORMAL";
    /// BMI obesity class 1 upper bound
    pub const BMI_OBESE_1: &str = "DIETLOG_BMI_OBESE_1";
    /// BMI obesity class 2 upper bound
    pub const BMI_OBESE_2: &str = "DIETLOG_BMI_OBESE_2";
    /// BMI obesity class 3 upper bound
    pub const BMI_OBESE_3: &str = "DIETLOG_BMI_OBESE_3";
}
