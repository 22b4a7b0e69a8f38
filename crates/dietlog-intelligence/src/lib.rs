// ABOUTME: Calculation engines for weight progress diagnosis, plan generation, and BMI
// ABOUTME: Pure functions of their inputs; "today" is always passed in explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![deny(unsafe_code)]

//! # Dietlog Intelligence
//!
//! Leaf calculation components consumed by request handlers:
//!
//! - **`progress_diagnosis`**: progress percentage, ideal/real/needed daily
//!   change, projected achievement date, and a pace verdict
//! - **`plan_generator`**: fixed-interval weight checkpoints ending on the goal
//! - **`bmi`**: body mass index and category
//!
//! None of these hold shared mutable state, so every call may run
//! concurrently with any other.

/// Body mass index calculation and classification
pub mod bmi;
/// Engine configuration
pub mod config;
/// Fixed-interval weight plan generation
pub mod plan_generator;
/// Progress metrics and pace classification
pub mod progress_diagnosis;

pub use bmi::{assess_bmi, calculate_bmi, classify_bmi, height_cm_to_m, BmiAssessment, BmiCategory};
pub use config::{BmiConfig, ConfigError, DiagnosisConfig, IntelligenceConfig, PlanConfig};
pub use plan_generator::{generate_plan, PlanGenerator, PlanStep, WeightPlan};
pub use progress_diagnosis::{
    Diagnosis, DiagnosisResult, PaceEvaluation, PaceTone, PaceVerdict, ProgressDiagnosisEngine,
};
