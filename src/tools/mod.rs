// ABOUTME: Request-handler tool layer wrapping the calculation engines
// ABOUTME: Tools coerce raw form values, apply profile defaults, and return JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Tools
//!
//! Each request the surrounding application makes to the calculation core
//! goes through a [`DietTool`]. Tools are registered in a [`ToolRegistry`]
//! and executed with a [`ToolExecutionContext`] that carries the injected
//! "today", the engine configuration, and the user's stored goal profile.

/// Per-request execution context
pub mod context;
/// Built-in tool implementations
pub mod implementations;
/// Coercion of raw request values into typed inputs
pub mod params;
/// Tool registry and dispatch
pub mod registry;
/// Tool result type
pub mod result;
/// Input schema description types
pub mod schema;
/// Tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use schema::{JsonSchema, PropertySchema, ToolSchema};
pub use traits::{DietTool, ToolCapabilities};
