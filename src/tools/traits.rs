// ABOUTME: Defines the DietTool trait and ToolCapabilities for the request-handler tool layer
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Tool Trait and Capabilities
//!
//! All tools implement [`DietTool`], which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags for filtering and discovery
//! - Synchronous execution with context
//!
//! Every engine behind a tool is a pure computation, so execution never
//! blocks on I/O and the trait does not need to be async.

use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool falls back to the stored goal profile for missing inputs
        const READS_PROFILE = 0b0000_0001;
        /// Tool performs analytics over recorded progress
        const ANALYTICS = 0b0000_0010;
        /// Tool works on the weight goal
        const GOALS = 0b0000_0100;
        /// Tool produces a forward-looking plan
        const PLANNING = 0b0000_1000;
        /// Tool computes body composition metrics
        const BODY_METRICS = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if self.contains(Self::READS_PROFILE) {
            parts.push("reads_profile");
        }
        if self.contains(Self::ANALYTICS) {
            parts.push("analytics");
        }
        if self.contains(Self::GOALS) {
            parts.push("goals");
        }
        if self.contains(Self::PLANNING) {
            parts.push("planning");
        }
        if self.contains(Self::BODY_METRICS) {
            parts.push("body_metrics");
        }

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait that all request-handler tools implement.
///
/// # Example
///
/// ```rust,no_run
/// use dietlog::errors::AppResult;
/// use dietlog::tools::{DietTool, JsonSchema, ToolCapabilities, ToolExecutionContext, ToolResult};
/// use serde_json::Value;
///
/// struct EchoTodayTool;
///
/// impl DietTool for EchoTodayTool {
///     fn name(&self) -> &'static str {
///         "echo_today"
///     }
///
///     fn description(&self) -> &'static str {
///         "Return the date treated as today"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::object(&[], &[])
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::empty()
///     }
///
///     fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
///         Ok(ToolResult::ok(serde_json::json!({ "today": ctx.today })))
///     }
/// }
/// ```
pub trait DietTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `diagnose_progress`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering and discovery
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for missing or malformed inputs and for values the
    /// engines reject
    fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
