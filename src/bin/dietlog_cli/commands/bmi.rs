// ABOUTME: bmi subcommand printing body mass index and its category

use dietlog::errors::AppResult;
use dietlog::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::{Map, Value};

use super::{number_at, print_json, run_tool, str_at, OutputMode};

/// Calculate BMI and print it
pub fn run(
    registry: &ToolRegistry,
    ctx: &ToolExecutionContext,
    height_cm: &str,
    weight_kg: &str,
    output: OutputMode,
) -> AppResult<()> {
    let mut args = Map::new();
    args.insert("height_cm".to_owned(), Value::String(height_cm.to_owned()));
    args.insert("weight_kg".to_owned(), Value::String(weight_kg.to_owned()));

    let content = run_tool(registry, ctx, "calculate_bmi", args)?;
    match output {
        OutputMode::Json => print_json(&content)?,
        OutputMode::Text => println!(
            "BMI {:.1} ({})",
            number_at(&content, "/bmi"),
            str_at(&content, "/label")
        ),
    }
    Ok(())
}
