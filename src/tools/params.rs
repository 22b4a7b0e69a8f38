// ABOUTME: Coerces raw request values into typed tool inputs
// ABOUTME: Accepts JSON numbers or numeric strings the way form submissions arrive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::{parse_calendar_date, CalendarDate, GoalProfile};

/// Whether a key is absent, null, or an empty string
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Read an optional finite number
///
/// # Errors
///
/// Returns `InvalidFormat` if the value is present but not a finite number
pub fn optional_f64(args: &Value, field: &str) -> AppResult<Option<f64>> {
    let value = args.get(field);
    if is_blank(value) {
        return Ok(None);
    }

    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(AppError::invalid_format(
            field,
            format!("{field} must be a finite number"),
        )),
    }
}

/// Read a required finite number
///
/// # Errors
///
/// Returns `MissingRequiredField` if absent and `InvalidFormat` if malformed
pub fn required_f64(args: &Value, field: &str) -> AppResult<f64> {
    optional_f64(args, field)?.ok_or_else(|| AppError::missing_field(field))
}

/// Read an optional whole number
///
/// # Errors
///
/// Returns `InvalidFormat` if the value is present but not an integer
pub fn optional_i64(args: &Value, field: &str) -> AppResult<Option<i64>> {
    let value = args.get(field);
    if is_blank(value) {
        return Ok(None);
    }

    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.map(Some).ok_or_else(|| {
        AppError::invalid_format(field, format!("{field} must be a whole number"))
    })
}

/// Read a required whole number
///
/// # Errors
///
/// Returns `MissingRequiredField` if absent and `InvalidFormat` if malformed
pub fn required_i64(args: &Value, field: &str) -> AppResult<i64> {
    optional_i64(args, field)?.ok_or_else(|| AppError::missing_field(field))
}

/// Read an optional `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `InvalidFormat` if the value is present but not a valid date
pub fn optional_date(args: &Value, field: &str) -> AppResult<Option<CalendarDate>> {
    let value = args.get(field);
    if is_blank(value) {
        return Ok(None);
    }

    let Some(Value::String(raw)) = value else {
        return Err(AppError::invalid_format(
            field,
            format!("{field} must be a YYYY-MM-DD string"),
        ));
    };

    parse_calendar_date(raw).map(Some).map_err(|e| {
        AppError::invalid_format(field, format!("{field} must be a YYYY-MM-DD date"))
            .with_source(e)
    })
}

/// Read the goal fields present in a request
///
/// # Errors
///
/// Returns `InvalidFormat` for any goal field that is present but malformed
pub fn profile_from_args(args: &Value) -> AppResult<GoalProfile> {
    Ok(GoalProfile {
        start_date: optional_date(args, "start_date")?,
        start_weight_kg: optional_f64(args, "start_weight_kg")?,
        target_date: optional_date(args, "target_date")?,
        goal_weight_kg: optional_f64(args, "goal_weight_kg")?,
    })
}
