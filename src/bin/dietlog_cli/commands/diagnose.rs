// ABOUTME: diagnose subcommand rendering progress, daily rates, and the pace verdict
// ABOUTME: Text output mirrors the sections of the progress diagnosis page

use dietlog::errors::AppResult;
use dietlog::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::Value;

use super::{number_at, print_json, run_tool, signed_kg, str_at, GoalArgs, OutputMode};

/// Diagnose progress and print the result
pub fn run(
    registry: &ToolRegistry,
    ctx: &ToolExecutionContext,
    goal: &GoalArgs,
    current_weight: &str,
    output: OutputMode,
) -> AppResult<()> {
    let mut args = goal.to_args();
    args.insert(
        "current_weight_kg".to_owned(),
        Value::String(current_weight.to_owned()),
    );

    let content = run_tool(registry, ctx, "diagnose_progress", args)?;
    match output {
        OutputMode::Json => print_json(&content),
        OutputMode::Text => {
            print_text(&content);
            Ok(())
        }
    }
}

fn print_text(content: &Value) {
    println!("As of {}", str_at(content, "/as_of"));
    println!();
    println!(
        "Progress:            {:.1}%",
        number_at(content, "/result/progress_percent")
    );
    println!(
        "Change so far:       {} of {}",
        signed_kg(number_at(content, "/result/current_change")),
        signed_kg(number_at(content, "/result/total_change"))
    );
    println!(
        "Remaining:           {} over {} days",
        signed_kg(number_at(content, "/result/remaining_change")),
        number_at(content, "/result/remaining_days")
    );
    println!(
        "Days elapsed:        {}",
        number_at(content, "/result/days_elapsed")
    );
    println!();
    println!(
        "Ideal daily change:  {}/day",
        signed_kg(number_at(content, "/result/ideal_daily_change"))
    );
    println!(
        "Real daily change:   {}/day",
        signed_kg(number_at(content, "/result/real_daily_change"))
    );
    println!(
        "Needed daily change: {}/day",
        signed_kg(number_at(content, "/result/needed_daily_change"))
    );
    println!();

    match content
        .pointer("/result/achievement_date")
        .and_then(Value::as_str)
    {
        Some(date) => println!(
            "Projected achievement: {date} ({:+} days vs target)",
            number_at(content, "/result/days_from_target")
        ),
        None => println!("Projected achievement: not reachable at the current pace"),
    }

    println!();
    println!("{}", str_at(content, "/pace/headline"));
    println!("{}", str_at(content, "/pace/detail"));
}
