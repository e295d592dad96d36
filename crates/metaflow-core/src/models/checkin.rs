// ABOUTME: Daily check-in model carrying mood and productivity scores
// ABOUTME: Scores are clamped to the 1-10 scale and focus time to one day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use crate::constants::scores::{MAX_FOCUS_MINUTES, MAX_SCORE, MIN_SCORE};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily user-submitted record of mood and productivity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    /// Unique check-in identifier
    pub id: Uuid,
    /// Owner of the check-in
    pub user_id: Uuid,
    /// Day the check-in refers to
    pub date: DateTime<Utc>,
    /// Mood score (1-10)
    pub mood: u8,
    /// Productivity score (1-10)
    pub productivity: u8,
    /// Minutes spent on focused work
    #[serde(default)]
    pub focus_minutes: u32,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Checkin {
    /// Create a check-in, clamping scores into the 1-10 scale
    #[must_use]
    pub fn new(user_id: Uuid, date: DateTime<Utc>, mood: u8, productivity: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            mood: mood.clamp(MIN_SCORE, MAX_SCORE),
            productivity: productivity.clamp(MIN_SCORE, MAX_SCORE),
            focus_minutes: 0,
            notes: None,
        }
    }

    /// Set focus minutes, capped at one day
    #[must_use]
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_minutes = minutes.min(MAX_FOCUS_MINUTES);
        self
    }

    /// Calendar day of the check-in
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
