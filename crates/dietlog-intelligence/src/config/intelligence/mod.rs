// ABOUTME: Intelligence configuration for diagnosis pace, plan limits, and BMI bands
// ABOUTME: Environment-driven with constant defaults and explicit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Intelligence Configuration
//!
//! Tunable thresholds for the calculation engines. Values are read from the
//! environment only; unset variables fall back to the defaults in
//! `dietlog_core::constants`, set-but-unparsable variables are an error.

mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use dietlog_core::constants::{bmi, diagnosis, env_vars, plan};
use serde::{Deserialize, Serialize};

/// Configuration for every calculation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Progress diagnosis settings
    pub diagnosis: DiagnosisConfig,
    /// Plan generation settings
    pub plan: PlanConfig,
    /// BMI classification bands
    pub bmi: BmiConfig,
}

/// Progress diagnosis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    /// Achievement within this many days of the target date counts as on pace
    pub on_pace_tolerance_days: i64,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            on_pace_tolerance_days: diagnosis::ON_PACE_TOLERANCE_DAYS,
        }
    }
}

/// Plan generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Largest number of checkpoints a single plan may contain
    pub max_steps: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_steps: plan::MAX_PLAN_STEPS,
        }
    }
}

/// Upper bounds (exclusive) of each BMI category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Underweight below this value
    pub underweight_upper: f64,
    /// Normal below this value
    pub normal_upper: f64,
    /// Obesity class 1 below this value
    pub obese_1_upper: f64,
    /// Obesity class 2 below this value
    pub obese_2_upper: f64,
    /// Obesity class 3 below this value; class 4 at or above
    pub obese_3_upper: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight_upper: bmi::UNDERWEIGHT_UPPER,
            normal_upper: bmi::NORMAL_UPPER,
            obese_1_upper: bmi::OBESE_1_UPPER,
            obese_2_upper: bmi::OBESE_2_UPPER,
            obese_3_upper: bmi::OBESE_3_UPPER,
        }
    }
}

impl IntelligenceConfig {
    /// Load configuration from environment variables and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            diagnosis: DiagnosisConfig {
                on_pace_tolerance_days: env_or(
                    env_vars::PACE_TOLERANCE_DAYS,
                    diagnosis::ON_PACE_TOLERANCE_DAYS,
                )?,
            },
            plan: PlanConfig {
                max_steps: env_or(env_vars::PLAN_MAX_STEPS, plan::MAX_PLAN_STEPS)?,
            },
            bmi: BmiConfig {
                underweight_upper: env_or(env_vars::BMI_UNDERWEIGHT, bmi::UNDERWEIGHT_UPPER)?,
                normal_upper: env_or(env_vars::BMI_NORMAL, bmi::NORMAL_UPPER)?,
                obese_1_upper: env_or(env_vars::BMI_OBESE_1, bmi::OBESE_1_UPPER)?,
                obese_2_upper: env_or(env_vars::BMI_OBESE_2, bmi::OBESE_2_UPPER)?,
                obese_3_upper: env_or(env_vars::BMI_OBESE_3, bmi::OBESE_3_UPPER)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    ///
    /// # Errors
    ///
    /// Returns an error for a negative tolerance, a zero step limit, or BMI
    /// bands that are not finite and strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diagnosis.on_pace_tolerance_days < 0 {
            return Err(ConfigError::InvalidRange(
                "on_pace_tolerance_days must not be negative",
            ));
        }
        if self.plan.max_steps == 0 {
            return Err(ConfigError::InvalidRange("max_steps must be at least 1"));
        }

        let bands = [
            self.bmi.underweight_upper,
            self.bmi.normal_upper,
            self.bmi.obese_1_upper,
            self.bmi.obese_2_upper,
            self.bmi.obese_3_upper,
        ];
        if bands.iter().any(|band| !band.is_finite() || *band <= 0.0) {
            return Err(ConfigError::InvalidThresholds(
                "BMI bands must be finite and positive",
            ));
        }
        if bands.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidThresholds(
                "BMI bands must be strictly ascending",
            ));
        }

        Ok(())
    }
}

/// Read `key` from the environment, falling back to `default` when unset
fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::Parse { key, value })
        }
        Err(_) => Ok(default),
    }
}
