// ABOUTME: diagnose_progress tool comparing today's weight against the goal trajectory
// ABOUTME: Fills missing goal fields from the stored profile before running the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppResult;
use crate::intelligence::ProgressDiagnosisEngine;
use crate::models::ProgressSnapshot;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{profile_from_args, required_f64};
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{DietTool, ToolCapabilities};

/// Diagnose progress toward the weight goal as of the context's "today"
pub struct DiagnoseProgressTool;

impl DietTool for DiagnoseProgressTool {
    fn name(&self) -> &'static str {
        "diagnose_progress"
    }

    fn description(&self) -> &'static str {
        "Report progress percentage, daily change rates, projected achievement date, and pace verdict for the weight goal"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("current_weight_kg", "number", "Today's weight in kilograms"),
                ("start_date", "string", "Goal start date (YYYY-MM-DD); defaults to the saved profile"),
                ("start_weight_kg", "number", "Weight on the start date; defaults to the saved profile"),
                ("target_date", "string", "Goal target date (YYYY-MM-DD); defaults to the saved profile"),
                ("goal_weight_kg", "number", "Goal weight; defaults to the saved profile"),
            ],
            &["current_weight_kg"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_PROFILE | ToolCapabilities::ANALYTICS | ToolCapabilities::GOALS
    }

    fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        debug!(request_id = %ctx.request_id, today = %ctx.today, "Diagnosing progress");

        let goal = ctx.profile.merged_with(&profile_from_args(&args)?).resolve()?;
        let current_weight_kg = required_f64(&args, "current_weight_kg")?;

        let engine = ProgressDiagnosisEngine::new(ctx.config.diagnosis.clone());
        let diagnosis = engine.diagnose(&goal, &ProgressSnapshot::new(current_weight_kg, ctx.today))?;

        Ok(ToolResult::ok(json!({
            "as_of": ctx.today,
            "goal": serde_json::to_value(goal)?,
            "current_weight_kg": current_weight_kg,
            "result": serde_json::to_value(&diagnosis.result)?,
            "pace": serde_json::to_value(&diagnosis.pace)?,
        })))
    }
}
