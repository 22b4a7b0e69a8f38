// ABOUTME: Main library entry point for the dietlog weight tracking platform
// ABOUTME: Wires configuration, logging, and the request-handler tool layer over the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![deny(unsafe_code)]

//! # Dietlog
//!
//! Calculation layer of a personal diet tracking application. Users record
//! daily weights against a goal profile; this crate answers the questions
//! the app asks about that goal:
//!
//! - **Progress diagnosis**: how far along the user is, at what pace, and
//!   when the goal will be reached if the pace holds
//! - **Plan creation**: intermediate target weights at a fixed interval
//! - **BMI**: body mass index and its category
//!
//! Authentication, persistence, email, and page rendering belong to the
//! surrounding application. Request handlers reach the engines through the
//! [`tools`] layer, which coerces raw form values, fills gaps from the
//! stored goal profile, and maps failures to [`errors::ErrorCode`]s.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::Local;
//! use dietlog::config::AppConfig;
//! use dietlog::tools::{ToolExecutionContext, ToolRegistry};
//! use serde_json::json;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let ctx = ToolExecutionContext::new(
//!         Local::now().date_naive(),
//!         Arc::new(config.intelligence),
//!     );
//!
//!     let registry = ToolRegistry::with_builtin_tools();
//!     let result = registry.execute(
//!         "calculate_bmi",
//!         json!({ "height_cm": 170, "weight_kg": 65 }),
//!         &ctx,
//!     )?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Unified error handling (re-exported from `dietlog-core`)
pub mod errors;

/// Calculation engines (re-exported from `dietlog-intelligence`)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Request-handler tools wrapping the calculation engines
pub mod tools;

/// Value models (re-exported from `dietlog-core`)
pub use dietlog_core::models;

/// Domain constants (re-exported from `dietlog-core`)
pub use dietlog_core::constants;
