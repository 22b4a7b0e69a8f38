// ABOUTME: Tests for goal profile merging, resolution, and request parameter coercion
// ABOUTME: Request values win over saved values; the first missing field is reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::date;
use dietlog::errors::ErrorCode;
use dietlog::models::{parse_calendar_date, GoalProfile, WeightGoal};
use dietlog::tools::params::{optional_date, optional_f64, profile_from_args, required_i64};
use serde_json::json;

#[test]
fn test_merge_prefers_overrides() {
    let saved = GoalProfile {
        start_date: Some(date("2024-01-01")),
        start_weight_kg: Some(80.0),
        target_date: Some(date("2024-03-01")),
        goal_weight_kg: Some(70.0),
    };
    let request = GoalProfile {
        goal_weight_kg: Some(72.0),
        ..GoalProfile::default()
    };

    let merged = saved.merged_with(&request);

    assert_eq!(merged.goal_weight_kg, Some(72.0));
    assert_eq!(merged.start_weight_kg, Some(80.0));
    assert!(merged.is_complete());
}

#[test]
fn test_resolve_complete_profile() {
    let profile = GoalProfile {
        start_date: Some(date("2024-01-01")),
        start_weight_kg: Some(80.0),
        target_date: Some(date("2024-03-01")),
        goal_weight_kg: Some(70.0),
    };

    let goal = profile.resolve().unwrap();

    assert_eq!(
        goal,
        WeightGoal::new(date("2024-01-01"), 80.0, date("2024-03-01"), 70.0)
    );
    assert!(goal.is_weight_loss());
}

#[test]
fn test_resolve_reports_first_missing_field() {
    let cases = [
        (GoalProfile::default(), "start_date"),
        (
            GoalProfile {
                start_date: Some(date("2024-01-01")),
                start_weight_kg: Some(80.0),
                ..GoalProfile::default()
            },
            "target_date",
        ),
        (
            GoalProfile {
                start_date: Some(date("2024-01-01")),
                start_weight_kg: Some(80.0),
                target_date: Some(date("2024-03-01")),
                goal_weight_kg: None,
            },
            "goal_weight_kg",
        ),
    ];

    for (profile, field) in cases {
        let err = profile.resolve().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.context.field.as_deref(), Some(field));
        assert!(!profile.is_complete());
    }
}

#[test]
fn test_calendar_date_parsing() {
    assert_eq!(parse_calendar_date(" 2024-02-29 ").unwrap(), date("2024-02-29"));
    assert!(parse_calendar_date("2023-02-29").is_err());
    assert!(parse_calendar_date("2024/01/01").is_err());
}

#[test]
fn test_numbers_from_form_strings() {
    let args = json!({"a": "72.5", "b": 80, "c": "", "d": null, "e": "abc", "f": true});

    assert_eq!(optional_f64(&args, "a").unwrap(), Some(72.5));
    assert_eq!(optional_f64(&args, "b").unwrap(), Some(80.0));
    assert_eq!(optional_f64(&args, "c").unwrap(), None);
    assert_eq!(optional_f64(&args, "d").unwrap(), None);
    assert_eq!(optional_f64(&args, "missing").unwrap(), None);
    assert_eq!(
        optional_f64(&args, "e").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        optional_f64(&args, "f").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let args = json!({"weight": "NaN", "height": "inf"});

    assert_eq!(
        optional_f64(&args, "weight").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        optional_f64(&args, "height").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_whole_numbers() {
    let args = json!({"a": "7", "b": 14, "c": 2.5});

    assert_eq!(required_i64(&args, "a").unwrap(), 7);
    assert_eq!(required_i64(&args, "b").unwrap(), 14);
    assert_eq!(
        required_i64(&args, "c").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        required_i64(&args, "missing").unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_dates_must_be_strings() {
    let args = json!({"a": "2024-01-01", "b": 20_240_101, "c": "2024-13-01"});

    assert_eq!(optional_date(&args, "a").unwrap(), Some(date("2024-01-01")));
    assert_eq!(
        optional_date(&args, "b").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        optional_date(&args, "c").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_profile_from_args_reads_only_present_fields() {
    let profile = profile_from_args(&json!({
        "start_weight_kg": "80",
        "target_date": "2024-03-01",
        "unrelated": "ignored",
    }))
    .unwrap();

    assert_eq!(
        profile,
        GoalProfile {
            start_date: None,
            start_weight_kg: Some(80.0),
            target_date: Some(date("2024-03-01")),
            goal_weight_kg: None,
        }
    );
}
