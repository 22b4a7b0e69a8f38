// ABOUTME: create_plan tool producing fixed-interval weight checkpoints
// ABOUTME: Rejects empty goal windows before the generator runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{AppResult, CalculationError};
use crate::intelligence::PlanGenerator;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{profile_from_args, required_i64};
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{DietTool, ToolCapabilities};

/// Build a weight plan for the goal
pub struct CreatePlanTool;

impl DietTool for CreatePlanTool {
    fn name(&self) -> &'static str {
        "create_plan"
    }

    fn description(&self) -> &'static str {
        "Create intermediate target weights every interval_days days, ending on the goal weight at the target date"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("interval_days", "integer", "Days between checkpoints (at least 1)"),
                ("start_date", "string", "Goal start date (YYYY-MM-DD); defaults to the saved profile"),
                ("start_weight_kg", "number", "Weight on the start date; defaults to the saved profile"),
                ("target_date", "string", "Goal target date (YYYY-MM-DD); defaults to the saved profile"),
                ("goal_weight_kg", "number", "Goal weight; defaults to the saved profile"),
            ],
            &["interval_days"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_PROFILE | ToolCapabilities::GOALS | ToolCapabilities::PLANNING
    }

    fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        debug!(request_id = %ctx.request_id, "Creating weight plan");

        let goal = ctx.profile.merged_with(&profile_from_args(&args)?).resolve()?;
        let interval_days = required_i64(&args, "interval_days")?;

        if goal.target_date <= goal.start_date {
            return Err(CalculationError::InvalidDateRange {
                start_date: goal.start_date,
                target_date: goal.target_date,
            }
            .into());
        }

        let plan = PlanGenerator::new(ctx.config.plan.clone()).create_plan(&goal, interval_days)?;

        Ok(ToolResult::ok(json!({
            "goal": serde_json::to_value(goal)?,
            "plan": serde_json::to_value(&plan)?,
        })))
    }
}
