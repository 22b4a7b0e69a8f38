// ABOUTME: Intelligence module re-exports from dietlog-intelligence crate
// ABOUTME: Preserves crate::intelligence import paths while delegating to the engine crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Intelligence Module
//!
//! Progress diagnosis, plan generation, and BMI engines.

// Re-export all public items from dietlog-intelligence
pub use dietlog_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::progress_diagnosis::classify_pace)
pub use dietlog_intelligence::{bmi, config, plan_generator, progress_diagnosis};
