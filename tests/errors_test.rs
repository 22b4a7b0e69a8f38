// ABOUTME: Tests for error codes, HTTP status mapping, and calculation error conversion
// ABOUTME: Verifies the client-facing error response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use dietlog::config::ConfigError;
use dietlog::errors::{AppError, CalculationError, ErrorCode, ErrorResponse};

#[test]
fn test_http_status_mapping() {
    assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
    assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
    assert_eq!(ErrorCode::InvalidInterval.http_status(), 400);
    assert_eq!(ErrorCode::InvalidDateRange.http_status(), 422);
    assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
    assert_eq!(ErrorCode::InternalError.http_status(), 500);
}

#[test]
fn test_calculation_error_codes() {
    assert_eq!(
        CalculationError::invalid_input("bmi", "must be positive").code(),
        ErrorCode::InvalidInput
    );
    assert_eq!(
        CalculationError::InvalidInterval { interval_days: 0 }.code(),
        ErrorCode::InvalidInterval
    );
    assert_eq!(
        CalculationError::PlanTooLarge {
            steps: 5000,
            max_steps: 3660
        }
        .code(),
        ErrorCode::InvalidInterval
    );
}

#[test]
fn test_invalid_input_conversion_keeps_field() {
    let error: AppError =
        CalculationError::invalid_input("current_weight_kg", "must be positive").into();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.field.as_deref(), Some("current_weight_kg"));
    assert_eq!(error.message, "Invalid current_weight_kg: must be positive");
}

#[test]
fn test_date_range_conversion_carries_dates() {
    let error: AppError = CalculationError::InvalidDateRange {
        start_date: date("2024-03-01"),
        target_date: date("2024-01-01"),
    }
    .into();

    assert_eq!(error.code, ErrorCode::InvalidDateRange);
    assert_eq!(error.context.details["start_date"], "2024-03-01");
    assert_eq!(error.context.details["target_date"], "2024-01-01");
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::missing_field("interval_days");

    assert_eq!(
        error.to_string(),
        "A required field is missing from the request: interval_days is required"
    );
}

#[test]
fn test_error_response_shape() {
    let error = AppError::invalid_format("start_date", "start_date must be a YYYY-MM-DD date")
        .with_request_id("req-123");
    let response = serde_json::to_value(ErrorResponse::from(error)).unwrap();

    assert_eq!(response["error"]["code"], "INVALID_FORMAT");
    assert_eq!(response["error"]["field"], "start_date");
    assert_eq!(response["error"]["request_id"], "req-123");
}

#[test]
fn test_serde_json_error_converts_to_serialization_error() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = AppError::from(parse_error);

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_convenience_constructors() {
    assert_eq!(AppError::invalid_input("bad").code, ErrorCode::InvalidInput);
    assert_eq!(AppError::internal("boom").http_status(), 500);

    let not_found = AppError::not_found("Tool plan_meals");
    assert_eq!(not_found.code, ErrorCode::ResourceNotFound);
    assert_eq!(not_found.message, "Tool plan_meals not found");
}

#[test]
fn test_config_error_converts_to_config_invalid() {
    let error = AppError::from(ConfigError::InvalidRange("max_steps must be at least 1"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
    assert_eq!(error.message, "Invalid range: max_steps must be at least 1");
}

#[test]
fn test_with_details_merges_objects() {
    let error = AppError::invalid_input("bad plan")
        .with_details(serde_json::json!({ "interval_days": 0 }))
        .with_details(serde_json::json!({ "max_steps": 3660 }));

    assert_eq!(error.context.details["interval_days"], 0);
    assert_eq!(error.context.details["max_steps"], 3660);
}
