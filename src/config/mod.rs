// ABOUTME: Configuration management module for centralized application settings
// ABOUTME: Aggregates logging, engine thresholds, and CLI defaults from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Configuration module for dietlog
//!
//! Configuration is environment-only; there are no config files.
//!
//! - **Environment**: [`AppConfig`] assembled from environment variables
//! - **Intelligence**: engine thresholds (re-exported from `dietlog-intelligence`)

/// Environment and application configuration
pub mod environment;

pub use environment::AppConfig;

// Re-export intelligence configuration types
pub use dietlog_intelligence::config::{
    BmiConfig, ConfigError, DiagnosisConfig, IntelligenceConfig, PlanConfig,
};
