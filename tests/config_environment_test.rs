// ABOUTME: Tests for environment-driven configuration loading and validation
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;

use dietlog::config::{AppConfig, BmiConfig, ConfigError, IntelligenceConfig};
use dietlog::constants::env_vars;
use dietlog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const ALL_VARS: [&str; 8] = [
    env_vars::PACE_TOLERANCE_DAYS,
    env_vars::PLAN_MAX_STEPS,
    env_vars::DEFAULT_PLAN_INTERVAL_DAYS,
    env_vars::BMI_UNDERWEIGHT,
    env_vars::BMI_NORMAL,
    env_vars::BMI_OBESE_1,
    env_vars::BMI_OBESE_2,
    env_vars::BMI_OBESE_3,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
    for var in ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME"] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.default_plan_interval_days, 7);
    assert_eq!(config.intelligence.diagnosis.on_pace_tolerance_days, 1);
    assert_eq!(config.intelligence.plan.max_steps, 3660);
    assert_eq!(config.intelligence.bmi.normal_upper, 25.0);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_env();
    env::set_var(env_vars::PACE_TOLERANCE_DAYS, "3");
    env::set_var(env_vars::PLAN_MAX_STEPS, " 100 ");
    env::set_var(env_vars::DEFAULT_PLAN_INTERVAL_DAYS, "14");
    env::set_var(env_vars::BMI_NORMAL, "23");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.intelligence.diagnosis.on_pace_tolerance_days, 3);
    assert_eq!(config.intelligence.plan.max_steps, 100);
    assert_eq!(config.default_plan_interval_days, 14);
    assert_eq!(config.intelligence.bmi.normal_upper, 23.0);
}

#[test]
#[serial]
fn test_unparsable_value_is_an_error() {
    clear_env();
    env::set_var(env_vars::PLAN_MAX_STEPS, "lots");

    let err = IntelligenceConfig::from_env().unwrap_err();
    clear_env();

    match err {
        ConfigError::Parse { key, value } => {
            assert_eq!(key, env_vars::PLAN_MAX_STEPS);
            assert_eq!(value, "lots");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_non_positive_default_interval_is_rejected() {
    clear_env();
    env::set_var(env_vars::DEFAULT_PLAN_INTERVAL_DAYS, "0");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_negative_tolerance_is_rejected() {
    clear_env();
    env::set_var(env_vars::PACE_TOLERANCE_DAYS, "-1");

    let err = IntelligenceConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_logging_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert!(logging.include_thread);
    assert_eq!(logging.service_name, "dietlog");

    let verbose = LoggingConfig::default().with_level("trace");
    assert_eq!(verbose.level, "trace");
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());

    config.plan.max_steps = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let config = IntelligenceConfig {
        bmi: BmiConfig {
            normal_upper: 31.0,
            ..BmiConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThresholds(_))
    ));

    let config = IntelligenceConfig {
        bmi: BmiConfig {
            underweight_upper: f64::NAN,
            ..BmiConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThresholds(_))
    ));
}
