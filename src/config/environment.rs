// ABOUTME: Environment configuration for deployment-specific settings
// ABOUTME: Parses logging, engine thresholds, and the default plan interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Environment-based configuration

use std::env;

use dietlog_intelligence::config::{ConfigError, IntelligenceConfig};
use tracing::info;

use crate::constants::{env_vars, plan};
use crate::logging::LoggingConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Engine thresholds
    pub intelligence: IntelligenceConfig,
    /// Plan interval used when a caller does not pass one
    pub default_plan_interval_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            intelligence: IntelligenceConfig::default(),
            default_plan_interval_days: plan::DEFAULT_INTERVAL_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparsable, or if the
    /// resulting values fail validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_plan_interval_days = match env::var(env_vars::DEFAULT_PLAN_INTERVAL_DAYS) {
            Ok(value) => {
                let parsed = value.trim().parse::<i64>();
                parsed.map_err(|_| ConfigError::Parse {
                    key: env_vars::DEFAULT_PLAN_INTERVAL_DAYS,
                    value,
                })?
            }
            Err(_) => plan::DEFAULT_INTERVAL_DAYS,
        };

        if default_plan_interval_days <= 0 {
            return Err(ConfigError::InvalidRange(
                "default plan interval must be at least 1 day",
            ));
        }

        let config = Self {
            logging: LoggingConfig::from_env(),
            intelligence: IntelligenceConfig::from_env()?,
            default_plan_interval_days,
        };

        config.summarize();
        Ok(config)
    }

    /// Log a summary of the loaded configuration
    pub fn summarize(&self) {
        info!(
            environment = %self.logging.environment,
            pace_tolerance_days = self.intelligence.diagnosis.on_pace_tolerance_days,
            plan_max_steps = self.intelligence.plan.max_steps,
            default_plan_interval_days = self.default_plan_interval_days,
            "Configuration loaded"
        );
    }
}
