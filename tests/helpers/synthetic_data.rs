// ABOUTME: Synthetic goal and check-in history generator for intelligence testing
// ABOUTME: Deterministic ChaCha8-seeded builders with behavioral presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, Utc};
use metaflow_insights::models::{Checkin, Goal, GoalCategory, GoalStatus, UserRecord};
use metaflow_insights::storage::HistorySnapshot;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Behavioral presets
#[derive(Debug, Clone, Copy)]
pub enum HistoryPattern {
    /// Daily check-ins, high scores, most goals completed
    Thriving,
    /// Sparse check-ins, low scores, few completions
    Struggling,
    /// Registered user with nothing recorded
    Empty,
}

/// Builder for one user's synthetic history
///
/// Days are counted back from `anchor`, so a check-in `days_ago = 0` lands
/// exactly on the anchor instant.
#[derive(Debug, Clone)]
pub struct SyntheticHistoryBuilder {
    rng: ChaCha8Rng,
    anchor: DateTime<Utc>,
    user: UserRecord,
    goals: Vec<Goal>,
    checkins: Vec<Checkin>,
}

impl SyntheticHistoryBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64, anchor: DateTime<Utc>) -> Self {
        let mut user = UserRecord::new("Synthetic User", format!("user{seed}@example.com"));
        user.created_at = anchor - Duration::days(365);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            anchor,
            user,
            goals: Vec::new(),
            checkins: Vec::new(),
        }
    }

    /// Owner of the generated records
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// One check-in with explicit scores
    pub fn checkin(&mut self, days_ago: i64, mood: u8, productivity: u8) -> &mut Self {
        let date = self.anchor - Duration::days(days_ago);
        self.checkins
            .push(Checkin::new(self.user.id, date, mood, productivity));
        self
    }

    /// One check-in per day for `days` days ending at the anchor, random scores
    pub fn daily_checkins(
        &mut self,
        days: i64,
        mood: RangeInclusive<u8>,
        productivity: RangeInclusive<u8>,
    ) -> &mut Self {
        for days_ago in (0..days).rev() {
            let m = self.rng.gen_range(mood.clone());
            let p = self.rng.gen_range(productivity.clone());
            let minutes = self.rng.gen_range(0..=240);
            let date = self.anchor - Duration::days(days_ago);
            self.checkins
                .push(Checkin::new(self.user.id, date, m, p).with_focus_minutes(minutes));
        }
        self
    }

    /// One goal with explicit timing, status and progress
    pub fn goal(
        &mut self,
        category: GoalCategory,
        status: GoalStatus,
        created_days_ago: i64,
        window_days: i64,
        progress: u8,
    ) -> &mut Self {
        let created = self.anchor - Duration::days(created_days_ago);
        let goal = Goal::new(
            self.user.id,
            format!("{category} goal {}", self.goals.len() + 1),
            category,
            created,
            created + Duration::days(window_days),
        )
        .with_status(status)
        .with_progress(progress);
        self.goals.push(goal);
        self
    }

    /// `count` goals with random category, status, timing and progress
    pub fn random_goals(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            let category = GoalCategory::ALL[self.rng.gen_range(0..GoalCategory::COUNT)];
            let status = match self.rng.gen_range(0..3) {
                0 => GoalStatus::Active,
                1 => GoalStatus::Completed,
                _ => GoalStatus::Cancelled,
            };
            let created_days_ago = self.rng.gen_range(1..=90);
            let window_days = self.rng.gen_range(0..=60);
            let progress = self.rng.gen_range(0..=100);
            self.goal(category, status, created_days_ago, window_days, progress);
        }
        self
    }

    /// Apply a behavioral preset
    pub fn pattern(&mut self, pattern: HistoryPattern) -> &mut Self {
        match pattern {
            HistoryPattern::Thriving => {
                self.daily_checkins(30, 8..=10, 8..=10);
                self.goal(GoalCategory::Career, GoalStatus::Completed, 60, 20, 100);
                self.goal(GoalCategory::Career, GoalStatus::Completed, 45, 15, 100);
                self.goal(GoalCategory::Education, GoalStatus::Completed, 40, 30, 100);
                self.goal(GoalCategory::Career, GoalStatus::Active, 10, 30, 80);
            }
            HistoryPattern::Struggling => {
                for days_ago in [28, 21, 14, 7] {
                    let mood = self.rng.gen_range(2..=4);
                    let productivity = self.rng.gen_range(2..=4);
                    self.checkin(days_ago, mood, productivity);
                }
                self.goal(GoalCategory::Health, GoalStatus::Cancelled, 50, 20, 10);
                self.goal(GoalCategory::Health, GoalStatus::Active, 30, 40, 15);
                self.goal(GoalCategory::Finance, GoalStatus::Active, 20, 40, 5);
            }
            HistoryPattern::Empty => {}
        }
        self
    }

    /// Goals generated so far
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Check-ins generated so far
    #[must_use]
    pub fn checkins(&self) -> &[Checkin] {
        &self.checkins
    }

    /// Snapshot containing the user and their history
    #[must_use]
    pub fn build(&self) -> HistorySnapshot {
        HistorySnapshot {
            users: vec![self.user.clone()],
            goals: self.goals.clone(),
            checkins: self.checkins.clone(),
        }
    }
}

/// Merge several users' snapshots into one population
#[must_use]
pub fn merge(snapshots: impl IntoIterator<Item = HistorySnapshot>) -> HistorySnapshot {
    snapshots
        .into_iter()
        .fold(HistorySnapshot::default(), |mut acc, snapshot| {
            acc.users.extend(snapshot.users);
            acc.goals.extend(snapshot.goals);
            acc.checkins.extend(snapshot.checkins);
            acc
        })
}
