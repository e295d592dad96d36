// ABOUTME: Descriptive behavioral pattern analysis over goals and check-ins
// ABOUTME: Best productivity weekday, mood/productivity correlation, top category, and progress trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::cast_precision_loss)] // Safe: check-in counts per weekday are small

use crate::config::intelligence::PatternAnalysisConfig;
use crate::features::dominant_category;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{DateTime, Datelike, Utc, Weekday};
use metaflow_core::constants::progress::MAX_PROGRESS;
use metaflow_core::models::{Checkin, Goal, GoalCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekdays in tie-break order
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Direction of active-goal progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressTrend {
    /// Mean active progress above the threshold
    #[serde(rename = "good progress")]
    GoodProgress,
    /// Mean active progress at or below the threshold
    #[serde(rename = "slow progress")]
    SlowProgress,
    /// No goal is active
    #[serde(rename = "no active goals")]
    NoActiveGoals,
}

impl fmt::Display for ProgressTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GoodProgress => "good progress",
            Self::SlowProgress => "slow progress",
            Self::NoActiveGoals => "no active goals",
        })
    }
}

/// Descriptive behavioral report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    /// Weekday with the highest mean productivity, `None` without check-ins
    pub most_productive_day: Option<Weekday>,
    /// Pearson correlation between mood and productivity in [-1, 1]
    pub mood_productivity_correlation: f64,
    /// Most frequent category among completed goals, `None` without completions
    pub most_successful_category: Option<GoalCategory>,
    /// Fraction of elapsed days with a check-in
    pub checkin_consistency: f64,
    /// Active-goal progress trend
    pub progress_trend: ProgressTrend,
}

impl PatternReport {
    /// Weekday name or "insufficient data"
    #[must_use]
    pub fn most_productive_day_label(&self) -> String {
        self.most_productive_day
            .map_or_else(|| "insufficient data".to_owned(), |day| weekday_name(day).to_owned())
    }

    /// Category label or "none"
    #[must_use]
    pub fn most_successful_category_label(&self) -> &'static str {
        self.most_successful_category
            .map_or("none", GoalCategory::label)
    }
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Behavioral pattern analyzer
///
/// Pure: the same history and clock instant always produce the same report.
#[derive(Debug, Clone, Default)]
pub struct PatternAnalyzer {
    config: PatternAnalysisConfig,
}

impl PatternAnalyzer {
    /// Create an analyzer with custom configuration
    #[must_use]
    pub const fn with_config(config: PatternAnalysisConfig) -> Self {
        Self { config }
    }

    /// Build the pattern report for a user's history as of `now`
    #[must_use]
    pub fn analyze(&self, goals: &[Goal], checkins: &[Checkin], now: DateTime<Utc>) -> PatternReport {
        let moods: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood)).collect();
        let productivity: Vec<f64> = checkins.iter().map(|c| f64::from(c.productivity)).collect();

        PatternReport {
            most_productive_day: Self::most_productive_day(checkins),
            mood_productivity_correlation: StatisticalAnalyzer::pearson_correlation(
                &moods,
                &productivity,
            ),
            most_successful_category: dominant_category(
                goals.iter().filter(|g| g.is_completed()).map(|g| g.category),
            ),
            checkin_consistency: StatisticalAnalyzer::checkin_consistency(checkins, now),
            progress_trend: self.progress_trend(goals),
        }
    }

    /// Weekday with the highest mean productivity; ties go to the earliest weekday
    #[must_use]
    pub fn most_productive_day(checkins: &[Checkin]) -> Option<Weekday> {
        let mut totals = [(0.0_f64, 0_usize); 7];
        for checkin in checkins {
            let slot = &mut totals[checkin.date.weekday().num_days_from_monday() as usize];
            slot.0 += f64::from(checkin.productivity);
            slot.1 += 1;
        }

        let mut best: Option<(Weekday, f64)> = None;
        for (day, (sum, count)) in WEEK.into_iter().zip(totals) {
            if count == 0 {
                continue;
            }
            let mean = sum / count as f64;
            if best.is_none() || best.is_some_and(|(_, best_mean)| mean > best_mean) {
                best = Some((day, mean));
            }
        }
        best.map(|(day, _)| day)
    }

    /// Trend label from the mean progress of active goals
    ///
    /// Progress above 100 (possible on deserialized goals) counts as 100.
    #[must_use]
    pub fn progress_trend(&self, goals: &[Goal]) -> ProgressTrend {
        let active: Vec<f64> = goals
            .iter()
            .filter(|g| g.is_active())
            .map(|g| f64::from(g.progress.min(MAX_PROGRESS)))
            .collect();

        match StatisticalAnalyzer::mean(&active) {
            None => ProgressTrend::NoActiveGoals,
            Some(mean) if mean > self.config.good_progress_threshold => ProgressTrend::GoodProgress,
            Some(_) => ProgressTrend::SlowProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use metaflow_core::models::GoalStatus;
    use uuid::Uuid;

    fn monday() -> DateTime<Utc> {
        // 2024-01-01 was a Monday
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let report = PatternAnalyzer::default().analyze(&[], &[], monday());
        assert_eq!(report.most_productive_day, None);
        assert_eq!(report.most_productive_day_label(), "insufficient data");
        assert_eq!(report.most_successful_category_label(), "none");
        assert!(report.mood_productivity_correlation.abs() < f64::EPSILON);
        assert!(report.checkin_consistency.abs() < f64::EPSILON);
        assert_eq!(report.progress_trend, ProgressTrend::NoActiveGoals);
    }

    #[test]
    fn test_best_weekday_ties_go_to_monday() {
        let user = Uuid::new_v4();
        let checkins = vec![
            Checkin::new(user, monday() + Duration::days(2), 5, 8),
            Checkin::new(user, monday(), 5, 8),
            Checkin::new(user, monday() + Duration::days(1), 5, 3),
        ];
        assert_eq!(
            PatternAnalyzer::most_productive_day(&checkins),
            Some(Weekday::Mon)
        );
    }

    #[test]
    fn test_best_weekday_uses_mean() {
        let user = Uuid::new_v4();
        let checkins = vec![
            Checkin::new(user, monday(), 5, 10),
            Checkin::new(user, monday() + Duration::days(7), 5, 2),
            Checkin::new(user, monday() + Duration::days(4), 5, 7),
        ];
        assert_eq!(
            PatternAnalyzer::most_productive_day(&checkins),
            Some(Weekday::Fri)
        );
    }

    #[test]
    fn test_progress_trend_threshold_is_strict() {
        let now = monday();
        let make = |progress| {
            Goal::new(Uuid::new_v4(), "g", GoalCategory::Career, now, now + Duration::days(5))
                .with_progress(progress)
        };
        let analyzer = PatternAnalyzer::default();
        assert_eq!(
            analyzer.progress_trend(&[make(50)]),
            ProgressTrend::SlowProgress
        );
        assert_eq!(
            analyzer.progress_trend(&[make(40), make(62)]),
            ProgressTrend::GoodProgress
        );
        let done = make(100).with_status(GoalStatus::Completed);
        assert_eq!(
            analyzer.progress_trend(&[done]),
            ProgressTrend::NoActiveGoals
        );
    }

    #[test]
    fn test_progress_trend_caps_overflowing_progress() {
        let now = monday();
        let stalled = Goal::new(Uuid::new_v4(), "g", GoalCategory::Health, now, now + Duration::days(5));
        let mut overflowing = stalled.clone();
        overflowing.id = Uuid::new_v4();
        overflowing.progress = 250;

        // (0 + 100) / 2 sits exactly on the threshold
        assert_eq!(
            PatternAnalyzer::default().progress_trend(&[stalled, overflowing]),
            ProgressTrend::SlowProgress
        );
    }

    #[test]
    fn test_trend_serializes_as_label() {
        let json = serde_json::to_string(&ProgressTrend::GoodProgress).unwrap();
        assert_eq!(json, "\"good progress\"");
    }
}
