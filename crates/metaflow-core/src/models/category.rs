// ABOUTME: Goal category and goal status enumerations
// ABOUTME: Fixed enumeration order doubles as the classifier's ordinal encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a goal belongs to
///
/// The declaration order is significant: it defines the ordinal code used by
/// the feature vector and the classifier, and it breaks ties when picking the
/// most frequent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Professional life
    Career,
    /// Health and wellbeing
    Health,
    /// Personal development
    Personal,
    /// Learning and education
    Education,
    /// Money and investments
    Finance,
    /// Social life and relationships
    Relationships,
    /// Hobbies and free time
    Leisure,
}

impl GoalCategory {
    /// All categories in ordinal order
    pub const ALL: [Self; 7] = [
        Self::Career,
        Self::Health,
        Self::Personal,
        Self::Education,
        Self::Finance,
        Self::Relationships,
        Self::Leisure,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal code (0..=6)
    #[must_use]
    pub const fn code(self) -> usize {
        match self {
            Self::Career => 0,
            Self::Health => 1,
            Self::Personal => 2,
            Self::Education => 3,
            Self::Finance => 4,
            Self::Relationships => 5,
            Self::Leisure => 6,
        }
    }

    /// Category for an ordinal code, `None` when out of range
    #[must_use]
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Health => "Health",
            Self::Personal => "Personal",
            Self::Education => "Education",
            Self::Finance => "Finance",
            Self::Relationships => "Relationships",
            Self::Leisure => "Leisure",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown goal category: {s}"))
    }
}

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// In progress
    #[default]
    Active,
    /// Finished successfully
    Completed,
    /// Abandoned by the user
    Cancelled,
}

impl GoalStatus {
    /// Whether no further transition can happen from this status
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
