// ABOUTME: Rule engine configuration for threshold-based goal recommendations
// ABOUTME: Configures firing thresholds, confidences, and justification messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! Rule Engine Configuration
//!
//! Thresholds are policy: the defaults below are the documented values and
//! every rule fires on a strict `<` comparison against them.

use serde::{Deserialize, Serialize};

/// Rule engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleEngineConfig {
    /// Threshold values for firing rules
    pub thresholds: RuleThresholds,
    /// Confidence attached to each rule's recommendation
    pub confidences: RuleConfidences,
    /// Justification messages per rule
    pub messages: RuleMessages,
}

/// Thresholds below which each rule fires
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Mean productivity (1-10) below which Health is suggested
    pub productivity_threshold: f64,
    /// Completion rate (0-1) below which Personal is suggested
    pub completion_threshold: f64,
    /// Check-in consistency (0-1) below which Leisure is suggested
    pub consistency_threshold: f64,
    /// Mean mood (1-10) below which Relationships is suggested
    pub mood_threshold: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            productivity_threshold: 6.0,
            completion_threshold: 0.5,
            consistency_threshold: 0.7,
            mood_threshold: 6.0,
        }
    }
}

/// Confidence assigned to each rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfidences {
    /// Low productivity rule
    pub low_productivity: f64,
    /// Low completion rule
    pub low_completion: f64,
    /// Low consistency rule
    pub low_consistency: f64,
    /// Low mood rule
    pub low_mood: f64,
    /// Default recommendation when no rule fires
    pub default: f64,
}

impl Default for RuleConfidences {
    fn default() -> Self {
        Self {
            low_productivity: 0.85,
            low_completion: 0.75,
            low_consistency: 0.70,
            low_mood: 0.80,
            default: 0.60,
        }
    }
}

/// Justification messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMessages {
    /// Low productivity rule
    pub low_productivity: String,
    /// Low completion rule
    pub low_completion: String,
    /// Low consistency rule
    pub low_consistency: String,
    /// Low mood rule
    pub low_mood: String,
    /// Default recommendation
    pub default: String,
}

impl Default for RuleMessages {
    fn default() -> Self {
        Self {
            low_productivity: "wellbeing may be limiting productivity".into(),
            low_completion: "smaller goals build consistency".into(),
            low_consistency: "balance improves check-in consistency".into(),
            low_mood: "relationships may improve overall mood".into(),
            default: "continue personal development".into(),
        }
    }
}
