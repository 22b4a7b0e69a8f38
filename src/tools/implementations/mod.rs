// ABOUTME: Built-in tool implementations over the diagnosis, plan, and BMI engines
// ABOUTME: Exposes a factory returning every tool for registry setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

/// BMI calculation tool
pub mod bmi;
/// Progress diagnosis tool
pub mod diagnosis;
/// Weight plan tool
pub mod plan;

use super::traits::DietTool;

/// Create every built-in tool
#[must_use]
pub fn create_builtin_tools() -> Vec<Box<dyn DietTool>> {
    vec![
        Box::new(diagnosis::DiagnoseProgressTool),
        Box::new(plan::CreatePlanTool),
        Box::new(bmi::CalculateBmiTool),
    ]
}
