// ABOUTME: Body mass index calculation and category classification
// ABOUTME: BMI = weight / height^2 rounded to one decimal, banded per configurable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! BMI Module
//!
//! Category bands follow the Japan Society for the Study of Obesity
//! classification, which splits obesity into four classes:
//!
//! | BMI          | Category        |
//! |--------------|-----------------|
//! | < 18.5       | Underweight     |
//! | 18.5 - 25    | Normal weight   |
//! | 25 - 30      | Obesity class 1 |
//! | 30 - 35      | Obesity class 2 |
//! | 35 - 40      | Obesity class 3 |
//! | >= 40        | Obesity class 4 |

use dietlog_core::constants::bmi::CM_PER_M;
use dietlog_core::errors::CalculationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BmiConfig;

/// BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the normal range
    Underweight,
    /// Normal weight
    Normal,
    /// Obesity class 1
    ObeseClass1,
    /// Obesity class 2
    ObeseClass2,
    /// Obesity class 3
    ObeseClass3,
    /// Obesity class 4
    ObeseClass4,
}

impl BmiCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::ObeseClass1 => "Obesity (class 1)",
            Self::ObeseClass2 => "Obesity (class 2)",
            Self::ObeseClass3 => "Obesity (class 3)",
            Self::ObeseClass4 => "Obesity (class 4)",
        }
    }
}

/// BMI value with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// Category for that BMI
    pub category: BmiCategory,
}

/// Convert a height in centimetres (form input) to metres
#[must_use]
pub fn height_cm_to_m(height_cm: f64) -> f64 {
    height_cm / CM_PER_M
}

/// Calculate BMI rounded to one decimal place
///
/// Formula: `weight_kg / height_m^2`
///
/// # Errors
///
/// Returns `InvalidInput` if either value is non-finite or non-positive, or
/// if the quotient is not representable
pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> Result<f64, CalculationError> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(CalculationError::invalid_input(
            "height",
            "must be a positive number",
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalculationError::invalid_input(
            "weight_kg",
            "must be a positive number",
        ));
    }

    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(CalculationError::invalid_input(
            "height",
            "BMI could not be calculated from these values",
        ));
    }

    Ok((bmi * 10.0).round() / 10.0)
}

/// Classify a BMI value into its category
///
/// # Errors
///
/// Returns `InvalidInput` if `bmi` is non-finite or non-positive
pub fn classify_bmi(bmi: f64, config: &BmiConfig) -> Result<BmiCategory, CalculationError> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(CalculationError::invalid_input("bmi", "must be a positive number"));
    }

    let category = if bmi < config.underweight_upper {
        BmiCategory::Underweight
    } else if bmi < config.normal_upper {
        BmiCategory::Normal
    } else if bmi < config.obese_1_upper {
        BmiCategory::ObeseClass1
    } else if bmi < config.obese_2_upper {
        BmiCategory::ObeseClass2
    } else if bmi < config.obese_3_upper {
        BmiCategory::ObeseClass3
    } else {
        BmiCategory::ObeseClass4
    };

    Ok(category)
}

/// Calculate and classify BMI from a height in centimetres
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive or non-finite inputs
pub fn assess_bmi(
    height_cm: f64,
    weight_kg: f64,
    config: &BmiConfig,
) -> Result<BmiAssessment, CalculationError> {
    let bmi = calculate_bmi(height_cm_to_m(height_cm), weight_kg)?;
    let category = classify_bmi(bmi, config)?;

    debug!(bmi, category = ?category, "BMI assessed");

    Ok(BmiAssessment { bmi, category })
}
