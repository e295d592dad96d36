// ABOUTME: Pattern, forecast, and statistics configuration
// ABOUTME: Progress trend cutoff, likelihood buckets, and engagement tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! Analysis Configuration
//!
//! Step-function thresholds used by the pattern analyzer, the progress
//! predictor, and the user statistics aggregates.

use serde::{Deserialize, Serialize};

/// Pattern analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternAnalysisConfig {
    /// Mean active-goal progress strictly above which the trend is "good progress"
    pub good_progress_threshold: f64,
}

impl Default for PatternAnalysisConfig {
    fn default() -> Self {
        Self {
            good_progress_threshold: 50.0,
        }
    }
}

/// Completion likelihood buckets over `actual - expected` progress points
///
/// Each bucket applies on a strict `>` comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Gap above which likelihood is "very high"
    pub very_high_gap: f64,
    /// Gap above which likelihood is "high"
    pub high_gap: f64,
    /// Gap above which likelihood is "moderate"
    pub moderate_gap: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            very_high_gap: 20.0,
            high_gap: 10.0,
            moderate_gap: 0.0,
        }
    }
}

/// User and check-in statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Number of most recent check-ins used for streaks and trends
    pub trend_window: usize,
    /// Score change required to call a trend improving or declining
    pub trend_delta: f64,
    /// Days counted as "recent" for engagement
    pub recent_window_days: i64,
    /// Recent check-ins needed for high engagement
    pub high_engagement_checkins: usize,
    /// Recent check-ins needed for medium engagement
    pub medium_engagement_checkins: usize,
    /// Check-ins that make history sufficient for analysis
    pub min_checkins_for_analysis: usize,
    /// Goals that make history sufficient for analysis
    pub min_goals_for_analysis: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            trend_window: 7,
            trend_delta: 1.0,
            recent_window_days: 30,
            high_engagement_checkins: 20,
            medium_engagement_checkins: 10,
            min_checkins_for_analysis: 5,
            min_goals_for_analysis: 3,
        }
    }
}
