// ABOUTME: Command handlers for dietlog-cli
// ABOUTME: Builds tool arguments from flags and renders tool results as text or JSON

pub mod bmi;
pub mod diagnose;
pub mod plan;

use clap::Args;
use dietlog::errors::AppResult;
use dietlog::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::{Map, Value};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lines
    Text,
    /// The tool's JSON result, pretty-printed
    Json,
}

/// Goal bounds shared by `diagnose` and `plan`
#[derive(Debug, Args)]
pub struct GoalArgs {
    /// Goal start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Weight on the start date (kg)
    #[arg(long)]
    pub start_weight: Option<String>,

    /// Goal target date (YYYY-MM-DD)
    #[arg(long)]
    pub target_date: Option<String>,

    /// Goal weight (kg)
    #[arg(long)]
    pub goal_weight: Option<String>,
}

impl GoalArgs {
    /// Tool arguments for the goal fields that were given
    pub fn to_args(&self) -> Map<String, Value> {
        let mut args = Map::new();
        let fields = [
            ("start_date", &self.start_date),
            ("start_weight_kg", &self.start_weight),
            ("target_date", &self.target_date),
            ("goal_weight_kg", &self.goal_weight),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                args.insert(key.to_owned(), Value::String(value.clone()));
            }
        }
        args
    }
}

/// Run a tool and return its JSON content
pub fn run_tool(
    registry: &ToolRegistry,
    ctx: &ToolExecutionContext,
    name: &str,
    args: Map<String, Value>,
) -> AppResult<Value> {
    registry
        .execute(name, Value::Object(args), ctx)
        .map(|result| result.content)
}

/// Print pretty JSON to stdout
pub fn print_json(content: &Value) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(content)?);
    Ok(())
}

/// Read a number at a JSON pointer, or NaN if absent
pub fn number_at(content: &Value, pointer: &str) -> f64 {
    content
        .pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or(f64::NAN)
}

/// Read a string at a JSON pointer, or an empty string if absent
pub fn str_at<'a>(content: &'a Value, pointer: &str) -> &'a str {
    content.pointer(pointer).and_then(Value::as_str).unwrap_or("")
}

/// Format a signed weight with its sign, e.g. `-1.25`
pub fn signed_kg(value: f64) -> String {
    format!("{value:+.2} kg")
}
