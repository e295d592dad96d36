// ABOUTME: Time-proportional progress forecasting for a single goal
// ABOUTME: Expected progress from elapsed time and a step-function completion likelihood
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::cast_precision_loss)] // Safe: goal windows in milliseconds stay far below 2^52

use crate::config::intelligence::ForecastConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{DateTime, Utc};
use metaflow_core::constants::progress::MAX_PROGRESS;
use metaflow_core::models::Goal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Likelihood bucket for finishing a goal on time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionLikelihood {
    /// Well ahead of schedule
    #[serde(rename = "very high")]
    VeryHigh,
    /// Comfortably ahead
    #[serde(rename = "high")]
    High,
    /// Slightly ahead
    #[serde(rename = "moderate")]
    Moderate,
    /// On or behind schedule
    #[serde(rename = "low")]
    Low,
}

impl CompletionLikelihood {
    /// Bucket for `actual - expected` progress points
    ///
    /// Every boundary is exclusive: a gap exactly equal to a threshold falls
    /// into the lower bucket.
    #[must_use]
    pub fn from_progress_gap(gap: f64, config: &ForecastConfig) -> Self {
        if gap > config.very_high_gap {
            Self::VeryHigh
        } else if gap > config.high_gap {
            Self::High
        } else if gap > config.moderate_gap {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for CompletionLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        })
    }
}

/// Forecast for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressForecast {
    /// Goal the forecast refers to
    pub goal_id: Uuid,
    /// Reported progress (0-100)
    pub current_progress: u8,
    /// Time-proportional expected progress (0-100, two decimals)
    pub expected_progress: f64,
    /// Whether actual progress meets the expectation
    pub on_time: bool,
    /// Whole days until the deadline, never negative
    pub days_remaining: i64,
    /// Likelihood bucket
    pub completion_likelihood: CompletionLikelihood,
}

/// Goal progress predictor
#[derive(Debug, Clone, Default)]
pub struct ProgressPredictor {
    config: ForecastConfig,
}

impl ProgressPredictor {
    /// Create a predictor with custom bucket thresholds
    #[must_use]
    pub const fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Forecast `goal` as of `now`
    ///
    /// The on-time flag and the likelihood bucket compare against the exact
    /// elapsed percentage; only the reported `expected_progress` is rounded.
    #[must_use]
    pub fn forecast(&self, goal: &Goal, now: DateTime<Utc>) -> ProgressForecast {
        let expected = Self::elapsed_percent(goal, now);
        let current_progress = goal.progress.min(MAX_PROGRESS);
        let actual = f64::from(current_progress);

        ProgressForecast {
            goal_id: goal.id,
            current_progress,
            expected_progress: StatisticalAnalyzer::round2(expected),
            on_time: actual >= expected,
            days_remaining: (goal.deadline - now).num_days().max(0),
            completion_likelihood: CompletionLikelihood::from_progress_gap(
                actual - expected,
                &self.config,
            ),
        }
    }

    /// Elapsed share of the goal window as a percentage, rounded to two decimals
    ///
    /// A zero or negative window yields 0.
    #[must_use]
    pub fn expected_progress(goal: &Goal, now: DateTime<Utc>) -> f64 {
        StatisticalAnalyzer::round2(Self::elapsed_percent(goal, now))
    }

    fn elapsed_percent(goal: &Goal, now: DateTime<Utc>) -> f64 {
        let window_ms = (goal.deadline - goal.created_at).num_milliseconds();
        if window_ms <= 0 {
            return 0.0;
        }

        let elapsed_ms = (now - goal.created_at).num_milliseconds();
        (elapsed_ms as f64 / window_ms as f64).clamp(0.0, 1.0) * 100.0
    }
}
