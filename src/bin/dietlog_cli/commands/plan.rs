// ABOUTME: plan subcommand listing checkpoint days, dates, and target weights
// ABOUTME: Dates are derived from the goal start date and each step's day offset

use chrono::Days;
use dietlog::errors::AppResult;
use dietlog::models::parse_calendar_date;
use dietlog::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::Value;

use super::{number_at, print_json, run_tool, signed_kg, str_at, GoalArgs, OutputMode};

/// Generate a plan and print it
pub fn run(
    registry: &ToolRegistry,
    ctx: &ToolExecutionContext,
    goal: &GoalArgs,
    interval_days: i64,
    output: OutputMode,
) -> AppResult<()> {
    let mut args = goal.to_args();
    args.insert("interval_days".to_owned(), Value::from(interval_days));

    let content = run_tool(registry, ctx, "create_plan", args)?;
    match output {
        OutputMode::Json => print_json(&content),
        OutputMode::Text => {
            print_text(&content);
            Ok(())
        }
    }
}

fn print_text(content: &Value) {
    let start_date = parse_calendar_date(str_at(content, "/goal/start_date")).ok();

    println!(
        "Total change:       {} over {} days",
        signed_kg(number_at(content, "/plan/total_change")),
        number_at(content, "/plan/total_days")
    );
    println!(
        "Ideal daily change: {}/day",
        signed_kg(number_at(content, "/plan/ideal_daily_change"))
    );
    println!();

    let steps = content
        .pointer("/plan/steps")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    for step in steps {
        let day = step.get("day").and_then(Value::as_u64).unwrap_or_default();
        let weight = step
            .get("weight_kg")
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN);
        let date = start_date
            .and_then(|start| start.checked_add_days(Days::new(day)))
            .map_or_else(String::new, |date| date.to_string());

        println!("Day {day:>4}  {date:<10}  {weight:.2} kg");
    }
}
