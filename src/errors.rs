// ABOUTME: Error module re-exports from dietlog-core crate
// ABOUTME: Keeps crate::errors import paths stable for handlers and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Unified Error Handling System
//!
//! Re-exports the error types defined in `dietlog-core` so callers can use
//! `dietlog::errors::AppError` without depending on the core crate directly.

pub use dietlog_core::errors::*;
