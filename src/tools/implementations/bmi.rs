// ABOUTME: calculate_bmi tool converting form height in centimetres to a BMI and category
// ABOUTME: Category bands come from the engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde_json::{json, Value};

use crate::errors::AppResult;
use crate::intelligence::assess_bmi;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::required_f64;
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{DietTool, ToolCapabilities};

/// Calculate body mass index
pub struct CalculateBmiTool;

impl DietTool for CalculateBmiTool {
    fn name(&self) -> &'static str {
        "calculate_bmi"
    }

    fn description(&self) -> &'static str {
        "Calculate BMI (one decimal place) and its obesity category from height and weight"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("height_cm", "number", "Height in centimetres"),
                ("weight_kg", "number", "Weight in kilograms"),
            ],
            &["height_cm", "weight_kg"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::BODY_METRICS
    }

    fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let height_cm = required_f64(&args, "height_cm")?;
        let weight_kg = required_f64(&args, "weight_kg")?;

        let assessment = assess_bmi(height_cm, weight_kg, &ctx.config.bmi)?;

        Ok(ToolResult::ok(json!({
            "bmi": assessment.bmi,
            "category": assessment.category,
            "label": assessment.category.label(),
        })))
    }
}
