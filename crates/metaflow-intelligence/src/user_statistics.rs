// ABOUTME: Per-user engagement statistics and monthly summaries
// ABOUTME: Completion and consistency percentages, engagement tiers, and calendar-month aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use crate::config::intelligence::StatisticsConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use metaflow_core::errors::{AppError, AppResult};
use metaflow_core::models::{Checkin, Goal};
use serde::{Deserialize, Serialize};

/// Engagement tier from recent check-in volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    /// No check-ins at all
    Beginner,
    /// Few recent check-ins
    Low,
    /// Regular recent check-ins
    Medium,
    /// Near-daily recent check-ins
    High,
}

impl EngagementLevel {
    /// Tier for a user's total and recent check-in counts
    #[must_use]
    pub const fn classify(total_checkins: usize, recent_checkins: usize, config: &StatisticsConfig) -> Self {
        if total_checkins == 0 {
            Self::Beginner
        } else if recent_checkins >= config.high_engagement_checkins {
            Self::High
        } else if recent_checkins >= config.medium_engagement_checkins {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Whether a history is large enough for meaningful analysis
#[must_use]
pub const fn has_sufficient_data(goal_count: usize, checkin_count: usize, config: &StatisticsConfig) -> bool {
    checkin_count >= config.min_checkins_for_analysis || goal_count >= config.min_goals_for_analysis
}

/// Per-user aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    /// All goals
    pub total_goals: usize,
    /// Goals with completed status
    pub completed_goals: usize,
    /// All check-ins
    pub total_checkins: usize,
    /// Check-ins inside the recent window
    pub recent_checkins: usize,
    /// Mean mood, two decimals, 0 when empty
    pub avg_mood: f64,
    /// Mean productivity, two decimals, 0 when empty
    pub avg_productivity: f64,
    /// Completed share of goals in percent, two decimals
    pub completion_rate_percent: f64,
    /// Check-in consistency in percent, two decimals
    pub consistency_percent: f64,
    /// Engagement tier
    pub engagement: EngagementLevel,
    /// Whether the history supports analysis
    pub sufficient_data: bool,
}

impl UserStatistics {
    /// Compute statistics as of `now`
    #[must_use]
    pub fn compute(
        goals: &[Goal],
        checkins: &[Checkin],
        now: DateTime<Utc>,
        config: &StatisticsConfig,
    ) -> Self {
        let completed_goals = goals.iter().filter(|g| g.is_completed()).count();
        let recent_start = now - Duration::days(config.recent_window_days);
        let recent_checkins = checkins
            .iter()
            .filter(|c| c.date >= recent_start && c.date <= now)
            .count();

        let moods: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood)).collect();
        let productivity: Vec<f64> = checkins.iter().map(|c| f64::from(c.productivity)).collect();
        let consistency = StatisticalAnalyzer::checkin_consistency(checkins, now);

        Self {
            total_goals: goals.len(),
            completed_goals,
            total_checkins: checkins.len(),
            recent_checkins,
            avg_mood: StatisticalAnalyzer::mean(&moods).map_or(0.0, StatisticalAnalyzer::round2),
            avg_productivity: StatisticalAnalyzer::mean(&productivity)
                .map_or(0.0, StatisticalAnalyzer::round2),
            completion_rate_percent: StatisticalAnalyzer::percentage(completed_goals, goals.len()),
            consistency_percent: StatisticalAnalyzer::round2(consistency * 100.0),
            engagement: EngagementLevel::classify(checkins.len(), recent_checkins, config),
            sufficient_data: has_sufficient_data(goals.len(), checkins.len(), config),
        }
    }
}

/// Aggregates for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Check-ins dated inside the month
    pub total_checkins: usize,
    /// Mean mood, two decimals, 0 when empty
    pub avg_mood: f64,
    /// Mean productivity, two decimals, 0 when empty
    pub avg_productivity: f64,
    /// Goals created inside the month
    pub goals_created: usize,
    /// Goals created inside the month that are completed
    pub goals_completed: usize,
    /// `goals_completed / goals_created` in percent, two decimals
    pub completion_rate_percent: f64,
}

impl MonthlySummary {
    /// Half-open UTC interval `[first instant, first instant of next month)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the year/month pair is not a calendar month
    pub fn month_bounds(year: i32, month: u32) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        let invalid = || AppError::invalid_input(format!("invalid month {year}-{month:02}"));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

        let to_utc = |date: NaiveDate| {
            date.and_hms_opt(0, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive))
                .ok_or_else(invalid)
        };
        Ok((to_utc(start)?, to_utc(end)?))
    }

    /// Summarize `year`/`month`; records outside the month are ignored
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid year/month
    pub fn compute(year: i32, month: u32, goals: &[Goal], checkins: &[Checkin]) -> AppResult<Self> {
        let (start, end) = Self::month_bounds(year, month)?;
        let in_month = |instant: DateTime<Utc>| instant >= start && instant < end;

        let month_checkins: Vec<&Checkin> = checkins.iter().filter(|c| in_month(c.date)).collect();
        let moods: Vec<f64> = month_checkins.iter().map(|c| f64::from(c.mood)).collect();
        let productivity: Vec<f64> = month_checkins
            .iter()
            .map(|c| f64::from(c.productivity))
            .collect();

        let created: Vec<&Goal> = goals.iter().filter(|g| in_month(g.created_at)).collect();
        let goals_completed = created.iter().filter(|g| g.is_completed()).count();

        Ok(Self {
            year,
            month,
            total_checkins: month_checkins.len(),
            avg_mood: StatisticalAnalyzer::mean(&moods).map_or(0.0, StatisticalAnalyzer::round2),
            avg_productivity: StatisticalAnalyzer::mean(&productivity)
                .map_or(0.0, StatisticalAnalyzer::round2),
            goals_created: created.len(),
            goals_completed,
            completion_rate_percent: StatisticalAnalyzer::percentage(goals_completed, created.len()),
        })
    }
}
