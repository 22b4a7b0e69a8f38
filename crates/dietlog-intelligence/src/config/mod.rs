// ABOUTME: Configuration module for dietlog-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

/// Engine configuration (pace tolerance, plan limits, BMI bands)
pub mod intelligence;

pub use intelligence::{BmiConfig, ConfigError, DiagnosisConfig, IntelligenceConfig, PlanConfig};
