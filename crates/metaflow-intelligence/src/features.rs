// ABOUTME: Feature extraction from goal and check-in history
// ABOUTME: Produces the fixed six-field FeatureVector consumed by the classifier and rule engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::cast_precision_loss)] // Safe: counts and ordinals are tiny

//! # Feature Extraction
//!
//! Converts raw history into a [`FeatureVector`]. Every field has a documented
//! default so the result is finite for any user, including one with no history:
//!
//! | Field | Empty-history default |
//! |---|---|
//! | `dominant_category_code` | 0 |
//! | `completion_rate` | 0.0 |
//! | `avg_completed_duration_days` | 30.0 |
//! | `checkin_consistency` | 0.0 |
//! | `avg_productivity` | 5.0 |
//! | `avg_mood` | 5.0 |

use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{DateTime, Utc};
use metaflow_core::constants::durations::{DEFAULT_GOAL_DURATION_DAYS, MIN_GOAL_DURATION_DAYS};
use metaflow_core::constants::scores::NEUTRAL_SCORE;
use metaflow_core::models::{Checkin, Goal, GoalCategory};
use serde::{Deserialize, Serialize};

/// Number of numeric features
pub const FEATURE_COUNT: usize = 6;

/// Fixed-length numeric summary of a user's behavioral history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Ordinal of the most frequent goal category
    pub dominant_category_code: usize,
    /// Fraction of goals with completed status
    pub completion_rate: f64,
    /// Mean creation-to-deadline span of completed goals, in days
    pub avg_completed_duration_days: f64,
    /// Fraction of elapsed days with a check-in
    pub checkin_consistency: f64,
    /// Mean productivity score
    pub avg_productivity: f64,
    /// Mean mood score
    pub avg_mood: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            dominant_category_code: GoalCategory::Career.code(),
            completion_rate: 0.0,
            avg_completed_duration_days: DEFAULT_GOAL_DURATION_DAYS,
            checkin_consistency: 0.0,
            avg_productivity: NEUTRAL_SCORE,
            avg_mood: NEUTRAL_SCORE,
        }
    }
}

impl FeatureVector {
    /// Features in model input order
    #[must_use]
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.dominant_category_code as f64,
            self.completion_rate,
            self.avg_completed_duration_days,
            self.checkin_consistency,
            self.avg_productivity,
            self.avg_mood,
        ]
    }

    /// Whether every field is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|value| value.is_finite())
    }
}

/// Stateless feature extractor
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Derive the feature vector for a user's history as of `now`
    #[must_use]
    pub fn extract(goals: &[Goal], checkins: &[Checkin], now: DateTime<Utc>) -> FeatureVector {
        let completed: Vec<&Goal> = goals.iter().filter(|g| g.is_completed()).collect();

        let completion_rate = if goals.is_empty() {
            0.0
        } else {
            completed.len() as f64 / goals.len() as f64
        };

        let durations: Vec<f64> = completed.iter().map(|g| g.window_days()).collect();
        let avg_completed_duration_days = StatisticalAnalyzer::mean(&durations)
            .map_or(DEFAULT_GOAL_DURATION_DAYS, |days| {
                days.max(MIN_GOAL_DURATION_DAYS)
            });

        let moods: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood)).collect();
        let productivity: Vec<f64> = checkins.iter().map(|c| f64::from(c.productivity)).collect();

        FeatureVector {
            dominant_category_code: dominant_category(goals.iter().map(|g| g.category))
                .unwrap_or(GoalCategory::Career)
                .code(),
            completion_rate,
            avg_completed_duration_days,
            checkin_consistency: StatisticalAnalyzer::checkin_consistency(checkins, now),
            avg_productivity: StatisticalAnalyzer::mean(&productivity).unwrap_or(NEUTRAL_SCORE),
            avg_mood: StatisticalAnalyzer::mean(&moods).unwrap_or(NEUTRAL_SCORE),
        }
    }
}

/// Most frequent category; ties go to the lowest ordinal
#[must_use]
pub fn dominant_category(categories: impl IntoIterator<Item = GoalCategory>) -> Option<GoalCategory> {
    let mut counts = [0_usize; GoalCategory::COUNT];
    for category in categories {
        counts[category.code()] += 1;
    }

    let mut best: Option<(GoalCategory, usize)> = None;
    for category in GoalCategory::ALL {
        let count = counts[category.code()];
        let beats_best = match best {
            Some((_, best_count)) => count > best_count,
            None => count > 0,
        };
        if beats_best {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use metaflow_core::models::GoalStatus;
    use uuid::Uuid;

    fn goal(category: GoalCategory, status: GoalStatus, days: i64) -> Goal {
        let created = Utc::now() - Duration::days(60);
        Goal::new(
            Uuid::new_v4(),
            "goal",
            category,
            created,
            created + Duration::days(days),
        )
        .with_status(status)
    }

    #[test]
    fn test_empty_history_defaults() {
        let features = FeatureExtractor::extract(&[], &[], Utc::now());
        assert_eq!(features, FeatureVector::default());
        assert_eq!(features.dominant_category_code, 0);
        assert!(features.completion_rate.abs() < f64::EPSILON);
        assert!((features.avg_completed_duration_days - 30.0).abs() < f64::EPSILON);
        assert!(features.checkin_consistency.abs() < f64::EPSILON);
        assert!((features.avg_productivity - 5.0).abs() < f64::EPSILON);
        assert!((features.avg_mood - 5.0).abs() < f64::EPSILON);
        assert!(features.is_finite());
    }

    #[test]
    fn test_dominant_category_tie_breaks_on_ordinal() {
        let winner = dominant_category([
            GoalCategory::Leisure,
            GoalCategory::Finance,
            GoalCategory::Leisure,
            GoalCategory::Finance,
        ]);
        assert_eq!(winner, Some(GoalCategory::Finance));
        assert_eq!(dominant_category([]), None);
    }

    #[test]
    fn test_completion_and_duration() {
        let goals = vec![
            goal(GoalCategory::Health, GoalStatus::Completed, 10),
            goal(GoalCategory::Health, GoalStatus::Completed, 20),
            goal(GoalCategory::Career, GoalStatus::Active, 5),
            goal(GoalCategory::Career, GoalStatus::Cancelled, 5),
        ];
        let features = FeatureExtractor::extract(&goals, &[], Utc::now());
        assert!((features.completion_rate - 0.5).abs() < f64::EPSILON);
        assert!((features.avg_completed_duration_days - 15.0).abs() < 1e-9);
        assert_eq!(features.dominant_category_code, GoalCategory::Career.code());
    }

    #[test]
    fn test_duration_floor_of_one_day() {
        let goals = vec![goal(GoalCategory::Finance, GoalStatus::Completed, 0)];
        let features = FeatureExtractor::extract(&goals, &[], Utc::now());
        assert!((features.avg_completed_duration_days - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_checkin_means() {
        let user = Uuid::new_v4();
        let now = Utc::now();
        let checkins = vec![
            Checkin::new(user, now - Duration::days(1), 4, 6),
            Checkin::new(user, now, 8, 9),
        ];
        let features = FeatureExtractor::extract(&[], &checkins, now);
        assert!((features.avg_mood - 6.0).abs() < f64::EPSILON);
        assert!((features.avg_productivity - 7.5).abs() < f64::EPSILON);
        assert!(features.checkin_consistency > 0.0);
        assert!(features.checkin_consistency <= 1.0);
    }
}
