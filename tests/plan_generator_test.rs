// ABOUTME: Tests for fixed-interval weight plan generation
// ABOUTME: Checks checkpoint spacing, the exact final step, empty windows, and size limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{date, init_test_logging};
use dietlog::config::PlanConfig;
use dietlog::errors::CalculationError;
use dietlog::intelligence::plan_generator::{
    calculate_plan_ideal_daily_change, calculate_plan_total_change, calculate_total_days,
};
use dietlog::intelligence::{generate_plan, PlanGenerator, PlanStep};
use dietlog::models::WeightGoal;

/// 80 kg -> 70 kg over ten days
fn ten_day_goal() -> WeightGoal {
    WeightGoal::new(date("2024-01-01"), 80.0, date("2024-01-11"), 70.0)
}

#[test]
fn test_summary_figures() {
    assert_eq!(calculate_plan_total_change(80.0, 70.0), -10.0);
    assert_eq!(calculate_total_days(date("2024-01-01"), date("2024-01-11")), 10);
    assert_eq!(calculate_plan_ideal_daily_change(-10.0, 10), -1.0);
}

#[test]
fn test_ideal_daily_change_is_zero_for_empty_window() {
    assert_eq!(calculate_plan_ideal_daily_change(-10.0, 0), 0.0);
}

#[test]
fn test_five_day_interval_over_ten_days() {
    let steps = generate_plan(&ten_day_goal(), 5).unwrap();

    assert_eq!(
        steps,
        vec![
            PlanStep {
                day: 5,
                weight_kg: 75.0
            },
            PlanStep {
                day: 10,
                weight_kg: 70.0
            },
        ]
    );
}

#[test]
fn test_intermediate_steps_follow_linear_rate() {
    let steps = generate_plan(&ten_day_goal(), 3).unwrap();

    let days: Vec<i64> = steps.iter().map(|step| step.day).collect();
    let weights: Vec<f64> = steps.iter().map(|step| step.weight_kg).collect();
    assert_eq!(days, vec![3, 6, 9, 10]);
    assert_eq!(weights, vec![77.0, 74.0, 71.0, 70.0]);
}

#[test]
fn test_interval_at_or_beyond_window_gives_single_step() {
    for interval in [10, 11, 365] {
        let steps = generate_plan(&ten_day_goal(), interval).unwrap();
        assert_eq!(
            steps,
            vec![PlanStep {
                day: 10,
                weight_kg: 70.0
            }],
            "interval {interval}"
        );
    }
}

#[test]
fn test_last_step_is_exactly_the_goal() {
    let goals = [
        WeightGoal::new(date("2024-01-01"), 80.3, date("2024-04-17"), 67.9),
        WeightGoal::new(date("2023-11-05"), 48.2, date("2024-02-29"), 53.7),
        WeightGoal::new(date("2024-02-10"), 101.1, date("2024-12-31"), 88.8),
    ];

    for goal in goals {
        let total_days = calculate_total_days(goal.start_date, goal.target_date);
        for interval in [1, 7, 13, 30] {
            let steps = generate_plan(&goal, interval).unwrap();
            let last = steps.last().copied().unwrap();
            assert_eq!(last.day, total_days);
            assert_eq!(last.weight_kg, goal.goal_weight_kg);
        }
    }
}

#[test]
fn test_days_strictly_increase() {
    let goal = WeightGoal::new(date("2024-01-01"), 80.3, date("2024-04-17"), 67.9);
    let steps = generate_plan(&goal, 7).unwrap();

    assert!(steps.windows(2).all(|pair| pair[0].day < pair[1].day));
    assert_eq!(steps.len(), 16);
}

#[test]
fn test_empty_window_gives_empty_plan() {
    let same_day = WeightGoal::new(date("2024-01-01"), 80.0, date("2024-01-01"), 70.0);
    assert!(generate_plan(&same_day, 5).unwrap().is_empty());

    let inverted = WeightGoal::new(date("2024-01-11"), 80.0, date("2024-01-01"), 70.0);
    assert!(generate_plan(&inverted, 5).unwrap().is_empty());
}

#[test]
fn test_non_positive_interval_is_rejected() {
    for interval in [0, -1, -7] {
        assert_eq!(
            generate_plan(&ten_day_goal(), interval).unwrap_err(),
            CalculationError::InvalidInterval {
                interval_days: interval
            }
        );
    }
}

#[test]
fn test_create_plan_summary() {
    init_test_logging();
    let plan = PlanGenerator::default()
        .create_plan(&ten_day_goal(), 5)
        .unwrap();

    assert_eq!(plan.total_change, -10.0);
    assert_eq!(plan.total_days, 10);
    assert_eq!(plan.ideal_daily_change, -1.0);
    assert_eq!(plan.interval_days, 5);
    assert_eq!(plan.steps.len(), 2);
}

#[test]
fn test_create_plan_for_empty_window() {
    init_test_logging();
    let same_day = WeightGoal::new(date("2024-01-01"), 80.0, date("2024-01-01"), 70.0);
    let plan = PlanGenerator::default().create_plan(&same_day, 5).unwrap();

    assert_eq!(plan.total_days, 0);
    assert_eq!(plan.ideal_daily_change, 0.0);
    assert!(plan.steps.is_empty());
}

#[test]
fn test_plan_larger_than_limit_is_rejected() {
    init_test_logging();
    let generator = PlanGenerator::new(PlanConfig { max_steps: 2 });

    assert_eq!(
        generator.create_plan(&ten_day_goal(), 3).unwrap_err(),
        CalculationError::PlanTooLarge {
            steps: 4,
            max_steps: 2
        }
    );
    assert!(generator.create_plan(&ten_day_goal(), 5).is_ok());
}

#[test]
fn test_default_limit_stops_century_long_daily_plan() {
    let century = WeightGoal::new(date("2000-01-01"), 80.0, date("2100-01-01"), 70.0);

    assert!(matches!(
        generate_plan(&century, 1),
        Err(CalculationError::PlanTooLarge { .. })
    ));
    assert!(generate_plan(&century, 30).is_ok());
}

#[test]
fn test_generation_is_idempotent() {
    let goal = WeightGoal::new(date("2024-01-01"), 80.3, date("2024-04-17"), 67.9);
    assert_eq!(
        generate_plan(&goal, 7).unwrap(),
        generate_plan(&goal, 7).unwrap()
    );
}
