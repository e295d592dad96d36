// ABOUTME: Recommendation output types and ranking
// ABOUTME: RecommendationItem, priority and source tags, and category justifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use metaflow_core::models::GoalCategory;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Recommendation priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Listed first
    High,
    /// Listed after every High item
    Medium,
}

impl RecommendationPriority {
    const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
        }
    }
}

/// Which path produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    /// Trained classifier prediction
    Model,
    /// A threshold rule that fired
    Rule,
    /// Fallback when no rule fired
    Default,
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::Rule => "rule",
            Self::Default => "default",
        })
    }
}

/// A suggested next-goal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    /// Suggested category
    pub category: GoalCategory,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Human-readable reason
    pub justification: String,
    /// Priority tier
    pub priority: RecommendationPriority,
    /// Producing path
    pub source: RecommendationSource,
}

impl RecommendationItem {
    /// Create an item, clamping confidence into [0, 1]
    #[must_use]
    pub fn new(
        category: GoalCategory,
        confidence: f64,
        justification: impl Into<String>,
        priority: RecommendationPriority,
        source: RecommendationSource,
    ) -> Self {
        Self {
            category,
            confidence: confidence.clamp(0.0, 1.0),
            justification: justification.into(),
            priority,
            source,
        }
    }
}

/// Sort High before Medium, then by descending confidence
///
/// The sort is stable, so equal items keep their insertion order.
pub fn rank_recommendations(items: &mut [RecommendationItem]) {
    items.sort_by(|a, b| {
        a.priority.rank().cmp(&b.priority.rank()).then_with(|| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        })
    });
}

/// Justification attached to a classifier prediction for `category`
#[must_use]
pub const fn category_justification(category: GoalCategory) -> &'static str {
    match category {
        GoalCategory::Career => "based on your profile and career goals",
        GoalCategory::Health => "to support your wellbeing and check-in consistency",
        GoalCategory::Personal => "for personal development and self-knowledge",
        GoalCategory::Education => "to keep learning continuously",
        GoalCategory::Finance => "to build financial security",
        GoalCategory::Relationships => "to cultivate meaningful relationships",
        GoalCategory::Leisure => "to keep a healthy work-life balance",
    }
}
