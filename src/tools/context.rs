// ABOUTME: Defines ToolExecutionContext which provides tools with configuration and request state
// ABOUTME: Carries the injected "today" so every calculation stays deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Tool Execution Context
//!
//! Provides a unified context object for tool execution, containing:
//! - Request tracing information
//! - The calendar date treated as "today"
//! - Shared engine configuration
//! - The user's stored goal profile, used for defaults

use std::sync::Arc;

use uuid::Uuid;

use crate::config::IntelligenceConfig;
use crate::models::{CalendarDate, GoalProfile};

/// Context passed to every tool execution
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    /// Request ID for tracing
    pub request_id: Uuid,
    /// Day treated as "today" by relative-day calculations
    pub today: CalendarDate,
    /// Engine configuration
    pub config: Arc<IntelligenceConfig>,
    /// Stored goal profile of the requesting user
    pub profile: GoalProfile,
}

impl ToolExecutionContext {
    /// Create a context with a fresh request ID and an empty profile
    #[must_use]
    pub fn new(today: CalendarDate, config: Arc<IntelligenceConfig>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            today,
            config,
            profile: GoalProfile::default(),
        }
    }

    /// Attach the user's stored goal profile
    #[must_use]
    pub const fn with_profile(mut self, profile: GoalProfile) -> Self {
        self.profile = profile;
        self
    }
}
