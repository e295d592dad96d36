// ABOUTME: Goal model with category, status, progress and deadline
// ABOUTME: Provides a builder-style constructor and time-window helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use super::{GoalCategory, GoalStatus};
use crate::constants::{progress::MAX_PROGRESS, time::SECONDS_PER_DAY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user objective tracked over time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique goal identifier
    pub id: Uuid,
    /// Owner of the goal
    pub user_id: Uuid,
    /// Short title
    pub title: String,
    /// Goal category
    pub category: GoalCategory,
    /// Lifecycle status
    #[serde(default)]
    pub status: GoalStatus,
    /// Progress percentage (0-100)
    #[serde(default)]
    pub progress: u8,
    /// Creation instant
    pub created_at: DateTime<Utc>,
    /// Target completion instant
    pub deadline: DateTime<Utc>,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Goal {
    /// Create an active goal with zero progress
    #[must_use]
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        category: GoalCategory,
        created_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            category,
            status: GoalStatus::Active,
            progress: 0,
            created_at,
            deadline,
            description: None,
        }
    }

    /// Set the status
    #[must_use]
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the progress, clamped to 0-100
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(MAX_PROGRESS);
        self
    }

    /// Whether the goal is finished successfully
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }

    /// Whether the goal is still in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Past the deadline without being completed
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.deadline && !self.is_completed()
    }

    /// Length of the goal window in fractional days (may be zero or negative)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: goal windows are far below 2^52 seconds
    pub fn window_days(&self) -> f64 {
        (self.deadline - self.created_at).num_seconds() as f64 / SECONDS_PER_DAY
    }
}
