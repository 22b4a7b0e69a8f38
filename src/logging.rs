// ABOUTME: Structured logging setup for the dietlog library and CLI
// ABOUTME: Reads level and output format from the environment and writes events to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Structured logging configuration.
//!
//! Events go to stderr so the CLI can keep stdout for results. Production
//! deployments (`ENVIRONMENT=production`) always record source location and
//! thread.

use std::env;
use std::io;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::service_names;

const DEFAULT_LEVEL: &str = "warn";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `dietlog=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Record source file and line
    pub include_location: bool,
    /// Record thread ID and name
    pub include_thread: bool,
    /// Reported service name
    pub service_name: String,
    /// Reported service version
    pub service_version: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single terse line per event
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised is compact
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::DIETLOG.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: DEFAULT_ENVIRONMENT.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, `SERVICE_NAME`, and `SERVICE_VERSION`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |name| LogFormat::from_name(&name)),
            include_location: production || env::var_os("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: production || env::var_os("LOG_INCLUDE_THREAD").is_some(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Override the level, e.g. for a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
        let registry = tracing_subscriber::registry().with(filter);
        let detailed = self.include_location;
        let threads = self.include_thread;

        match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(detailed)
                        .with_line_number(detailed)
                        .with_thread_ids(threads)
                        .with_thread_names(threads)
                        .with_writer(io::stderr),
                )
                .try_init()?,
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(detailed)
                        .with_line_number(detailed)
                        .with_thread_ids(threads)
                        .with_thread_names(threads)
                        .with_writer(io::stderr),
                )
                .try_init()?,
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init()?,
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.format = ?self.format,
            log.level = %self.level,
            "Logging initialized"
        );

        Ok(())
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Record one tool dispatch; failures are logged at warn level
    pub fn log_tool_call(tool_name: &str, request_id: &str, success: bool, duration_us: u128) {
        if success {
            info!(
                tool.name = %tool_name,
                request.id = %request_id,
                duration_us = %duration_us,
                "Tool call completed"
            );
        } else {
            warn!(
                tool.name = %tool_name,
                request.id = %request_id,
                duration_us = %duration_us,
                "Tool call failed"
            );
        }
    }
}
