// ABOUTME: Core types and constants for the dietlog weight tracking platform
// ABOUTME: Foundation crate with error handling, value models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![deny(unsafe_code)]

//! # Dietlog Core
//!
//! Foundation crate providing shared types and constants for the dietlog
//! weight tracking platform. The calculation engines and the request layer
//! both depend on it, so it is kept small and free of I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the typed `CalculationError` union
//! - **constants**: Domain constants (pace tolerance, BMI bands, plan limits)
//! - **models**: Value structures (`CalendarDate`, `WeightGoal`, `GoalProfile`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Transient value models shared by the engines and request handlers
pub mod models;
