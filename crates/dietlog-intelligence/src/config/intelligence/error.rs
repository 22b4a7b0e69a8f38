// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Defines error variants for invalid ranges and unparsable environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Configuration error types for intelligence module validation.

use dietlog_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable was set but could not be parsed
    #[error("Parse error for {key}: '{value}'")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Thresholds that must ascend do not
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
