// ABOUTME: Central registry for request-handler tools with capability-based filtering and execution
// ABOUTME: Provides tool discovery, schema listing, and timed dispatch with request-scoped errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Tool Registry
//!
//! Name-keyed set of [`DietTool`]s. Tools are kept in name order, so
//! listings and capability filters are stable across runs. Every dispatch
//! is timed and logged against the caller's request ID.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

use super::context::ToolExecutionContext;
use super::implementations::create_builtin_tools;
use super::result::ToolResult;
use super::schema::ToolSchema;
use super::traits::{DietTool, ToolCapabilities};

/// Tools available to the CLI and request handlers, built once at startup
///
/// # Example
///
/// ```
/// use dietlog::tools::ToolRegistry;
///
/// let registry = ToolRegistry::with_builtin_tools();
/// assert!(registry.contains("diagnose_progress"));
/// ```
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn DietTool>>,
}

impl ToolRegistry {
    /// Registry with no tools
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in tool
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Add a tool; the first registration of a name wins
    ///
    /// Returns `false` when the name is already taken.
    pub fn register(&mut self, tool: Arc<dyn DietTool>) -> bool {
        let name = tool.name();
        if self.tools.contains_key(name) {
            warn!(tool = %name, "Duplicate tool registration ignored");
            return false;
        }

        debug!(
            tool = %name,
            capabilities = %tool.capabilities().describe(),
            "Tool registered"
        );
        self.tools.insert(name.to_owned(), tool);
        true
    }

    /// Register the diagnosis, plan, and BMI tools
    pub fn register_builtin_tools(&mut self) {
        for tool in create_builtin_tools() {
            self.register(Arc::from(tool));
        }
        info!(count = self.tools.len(), "Built-in tools registered");
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn DietTool>> {
        self.tools.get(name)
    }

    /// Whether `name` is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Discovery schemas for every tool, in name order
    #[must_use]
    pub fn all_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Names of tools carrying every capability in `required`, sorted
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&str> {
        self.tools
            .iter()
            .filter_map(|(name, tool)| {
                tool.capabilities()
                    .contains(required)
                    .then_some(name.as_str())
            })
            .collect()
    }

    /// Run the named tool against `args`
    ///
    /// Errors are tagged with the context's request ID.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no tool has that name, or the tool's own
    /// error if execution fails
    pub fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let request_id = context.request_id.to_string();

        let Some(tool) = self.get(name) else {
            warn!(tool = %name, request_id = %request_id, "Unknown tool requested");
            return Err(AppError::not_found(format!("Tool {name}")).with_request_id(request_id));
        };

        let started = Instant::now();
        let outcome = tool.execute(args, context);
        AppLogger::log_tool_call(
            name,
            &request_id,
            outcome.is_ok(),
            started.elapsed().as_micros(),
        );

        outcome.map_err(|error| error.with_request_id(request_id))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
