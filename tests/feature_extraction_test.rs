// ABOUTME: Integration tests for feature extraction over synthetic histories
// ABOUTME: Checks documented defaults, finiteness and per-field derivations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod helpers;

use helpers::fixed_now;
use helpers::synthetic_data::{HistoryPattern, SyntheticHistoryBuilder};
use metaflow_insights::intelligence::{FeatureExtractor, FeatureVector};
use metaflow_insights::models::{GoalCategory, GoalStatus};

#[test]
fn test_empty_history_yields_defaults() {
    let features = FeatureExtractor::extract(&[], &[], fixed_now());
    assert_eq!(features, FeatureVector::default());
    assert_eq!(features.dominant_category_code, 0);
    assert_eq!(features.completion_rate, 0.0);
    assert_eq!(features.avg_completed_duration_days, 30.0);
    assert_eq!(features.checkin_consistency, 0.0);
    assert_eq!(features.avg_productivity, 5.0);
    assert_eq!(features.avg_mood, 5.0);
}

#[test]
fn test_features_are_finite_for_random_histories() {
    for seed in 0..100 {
        let mut builder = SyntheticHistoryBuilder::new(seed, fixed_now());
        builder
            .daily_checkins(i64::try_from(seed % 30).unwrap(), 1..=10, 1..=10)
            .random_goals(usize::try_from(seed % 9).unwrap());

        let features = FeatureExtractor::extract(builder.goals(), builder.checkins(), fixed_now());
        assert!(features.is_finite(), "seed {seed}: {features:?}");
        assert!((0.0..=1.0).contains(&features.completion_rate));
        assert!((0.0..=1.0).contains(&features.checkin_consistency));
        assert!(features.dominant_category_code < GoalCategory::COUNT);
        assert!(features.avg_completed_duration_days >= 1.0);
    }
}

#[test]
fn test_struggling_preset_features() {
    let mut builder = SyntheticHistoryBuilder::new(9, fixed_now());
    builder.pattern(HistoryPattern::Struggling);

    let features = FeatureExtractor::extract(builder.goals(), builder.checkins(), fixed_now());
    assert_eq!(features.dominant_category_code, GoalCategory::Health.code());
    assert_eq!(features.completion_rate, 0.0);
    assert_eq!(features.avg_completed_duration_days, 30.0);
    assert!(features.avg_productivity <= 4.0);
    assert!(features.avg_mood <= 4.0);
}

#[test]
fn test_completed_durations_and_dominant_tie() {
    let mut builder = SyntheticHistoryBuilder::new(10, fixed_now());
    builder
        .goal(GoalCategory::Finance, GoalStatus::Completed, 60, 10, 100)
        .goal(GoalCategory::Health, GoalStatus::Completed, 50, 20, 100)
        .goal(GoalCategory::Finance, GoalStatus::Active, 5, 30, 10)
        .goal(GoalCategory::Health, GoalStatus::Active, 5, 30, 10);

    let features = FeatureExtractor::extract(builder.goals(), builder.checkins(), fixed_now());
    // Two Health and two Finance goals: the lower ordinal wins
    assert_eq!(features.dominant_category_code, GoalCategory::Health.code());
    assert_eq!(features.completion_rate, 0.5);
    assert_eq!(features.avg_completed_duration_days, 15.0);
}

#[test]
fn test_same_day_checkins_count_once_for_consistency() {
    let mut builder = SyntheticHistoryBuilder::new(12, fixed_now());
    builder.checkin(10, 6, 6).checkin(10, 7, 7).checkin(5, 8, 8);

    let features = FeatureExtractor::extract(builder.goals(), builder.checkins(), fixed_now());
    assert!((features.checkin_consistency - 0.2).abs() < 1e-12);
    assert!((features.avg_mood - 7.0).abs() < 1e-12);
}
