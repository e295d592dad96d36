// ABOUTME: Check-in aggregates: averages, current streak, and short-window score trends
// ABOUTME: Streak and trends consider only the most recent check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use crate::config::intelligence::StatisticsConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::NaiveDate;
use metaflow_core::models::Checkin;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Direction of a score over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    /// Newest score exceeds the oldest by more than the delta
    Improving,
    /// Within the delta
    Stable,
    /// Newest score is below the oldest by more than the delta
    Declining,
}

impl ScoreTrend {
    /// Trend between the first and last value of a chronological series
    #[must_use]
    pub fn from_series(values: &[f64], delta: f64) -> Self {
        match (values.first(), values.last()) {
            (Some(first), Some(last)) if values.len() >= 2 => {
                if *last > first + delta {
                    Self::Improving
                } else if *last < first - delta {
                    Self::Declining
                } else {
                    Self::Stable
                }
            }
            _ => Self::Stable,
        }
    }
}

/// Aggregates over a user's check-ins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinStatistics {
    /// Number of check-ins
    pub total_checkins: usize,
    /// Mean mood, two decimals, 0 when empty
    pub avg_mood: f64,
    /// Mean productivity, two decimals, 0 when empty
    pub avg_productivity: f64,
    /// Consecutive days ending at the newest check-in
    pub current_streak_days: usize,
    /// Mood direction over the recent window
    pub mood_trend: ScoreTrend,
    /// Productivity direction over the recent window
    pub productivity_trend: ScoreTrend,
}

impl CheckinStatistics {
    /// Compute statistics; order of `checkins` does not matter
    #[must_use]
    pub fn compute(checkins: &[Checkin], config: &StatisticsConfig) -> Self {
        let moods: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood)).collect();
        let productivity: Vec<f64> = checkins.iter().map(|c| f64::from(c.productivity)).collect();

        let mut recent: Vec<&Checkin> = checkins.iter().collect();
        recent.sort_by_key(|c| Reverse(c.date));
        recent.truncate(config.trend_window);
        recent.reverse();

        let recent_moods: Vec<f64> = recent.iter().map(|c| f64::from(c.mood)).collect();
        let recent_productivity: Vec<f64> =
            recent.iter().map(|c| f64::from(c.productivity)).collect();

        Self {
            total_checkins: checkins.len(),
            avg_mood: StatisticalAnalyzer::mean(&moods).map_or(0.0, StatisticalAnalyzer::round2),
            avg_productivity: StatisticalAnalyzer::mean(&productivity)
                .map_or(0.0, StatisticalAnalyzer::round2),
            current_streak_days: current_streak(recent.iter().map(|c| c.day())),
            mood_trend: ScoreTrend::from_series(&recent_moods, config.trend_delta),
            productivity_trend: ScoreTrend::from_series(&recent_productivity, config.trend_delta),
        }
    }
}

/// Length of the run of consecutive calendar days ending at the latest day
///
/// Several check-ins on one day count once.
#[must_use]
pub fn current_streak(days: impl IntoIterator<Item = NaiveDate>) -> usize {
    let mut days: Vec<NaiveDate> = days.into_iter().collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(first) = days.first() else {
        return 0;
    };

    let mut streak = 1;
    let mut previous = *first;
    for day in days.iter().skip(1) {
        if previous.signed_duration_since(*day).num_days() != 1 {
            break;
        }
        streak += 1;
        previous = *day;
    }
    streak
}
