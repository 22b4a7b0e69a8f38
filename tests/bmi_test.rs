// ABOUTME: Tests for BMI calculation and obesity-band classification
// ABOUTME: Covers rounding, band boundaries, custom thresholds, and rejected inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use dietlog::config::BmiConfig;
use dietlog::errors::CalculationError;
use dietlog::intelligence::{assess_bmi, calculate_bmi, classify_bmi, height_cm_to_m, BmiCategory};

#[test]
fn test_height_conversion() {
    assert_eq!(height_cm_to_m(170.0), 1.7);
    assert_eq!(height_cm_to_m(155.0), 1.55);
}

#[test]
fn test_bmi_rounded_to_one_decimal() {
    assert_eq!(calculate_bmi(1.7, 65.0).unwrap(), 22.5);
    assert_eq!(calculate_bmi(1.6, 45.0).unwrap(), 17.6);
    assert_eq!(calculate_bmi(1.5, 90.0).unwrap(), 40.0);
}

#[test]
fn test_bmi_rejects_non_positive_or_non_finite_inputs() {
    for (height, weight, field) in [
        (0.0, 65.0, "height"),
        (-1.7, 65.0, "height"),
        (f64::NAN, 65.0, "height"),
        (1.7, 0.0, "weight_kg"),
        (1.7, f64::INFINITY, "weight_kg"),
    ] {
        match calculate_bmi(height, weight) {
            Err(CalculationError::InvalidInput { field: actual, .. }) => {
                assert_eq!(actual, field);
            }
            other => panic!("expected InvalidInput for ({height}, {weight}), got {other:?}"),
        }
    }
}

#[test]
fn test_bmi_band_boundaries() {
    let config = BmiConfig::default();
    let cases = [
        (18.4, BmiCategory::Underweight),
        (18.5, BmiCategory::Normal),
        (24.9, BmiCategory::Normal),
        (25.0, BmiCategory::ObeseClass1),
        (29.9, BmiCategory::ObeseClass1),
        (30.0, BmiCategory::ObeseClass2),
        (35.0, BmiCategory::ObeseClass3),
        (39.9, BmiCategory::ObeseClass3),
        (40.0, BmiCategory::ObeseClass4),
        (55.2, BmiCategory::ObeseClass4),
    ];

    for (bmi, expected) in cases {
        assert_eq!(classify_bmi(bmi, &config).unwrap(), expected, "bmi {bmi}");
    }
}

#[test]
fn test_classify_rejects_invalid_bmi() {
    let config = BmiConfig::default();
    for bmi in [0.0, -3.0, f64::NAN] {
        assert!(matches!(
            classify_bmi(bmi, &config),
            Err(CalculationError::InvalidInput { field: "bmi", .. })
        ));
    }
}

#[test]
fn test_custom_thresholds() {
    let config = BmiConfig {
        normal_upper: 23.0,
        ..BmiConfig::default()
    };

    assert_eq!(classify_bmi(24.0, &config).unwrap(), BmiCategory::ObeseClass1);
}

#[test]
fn test_assess_from_centimetres() {
    let assessment = assess_bmi(170.0, 72.25, &BmiConfig::default()).unwrap();

    assert_eq!(assessment.bmi, 25.0);
    assert_eq!(assessment.category, BmiCategory::ObeseClass1);
    assert_eq!(assessment.category.label(), "Obesity (class 1)");
}

#[test]
fn test_category_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(BmiCategory::ObeseClass2).unwrap(),
        "obese_class2"
    );
}
