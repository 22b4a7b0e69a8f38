// ABOUTME: Value models shared by the calculation engines and request handlers
// ABOUTME: Calendar dates, weight goals, progress observations, and stored goal profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! Transient value structures. None of these are persisted by the engines;
//! they live for a single diagnosis or plan request.

mod goal;
mod profile;

pub use goal::{
    parse_calendar_date, CalendarDate, ProgressSnapshot, WeightGoal, CALENDAR_DATE_FORMAT,
};
pub use profile::GoalProfile;
