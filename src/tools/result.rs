// ABOUTME: Defines ToolResult for tool execution responses
// ABOUTME: Wraps the JSON content returned to the request handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde_json::Value;

/// Result returned by tool execution
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The result value to return to the caller
    pub content: Value,
}

impl ToolResult {
    /// Create a result with the given content
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self { content }
    }
}
