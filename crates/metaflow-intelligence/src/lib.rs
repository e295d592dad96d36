// ABOUTME: Recommendation and behavioral analytics algorithms for MetaFlow
// ABOUTME: Feature extraction, classifier, rule engine, pattern analysis, and forecasting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

#![deny(unsafe_code)]

//! # MetaFlow Intelligence
//!
//! Pure computation layer: every function takes history records and an
//! explicit clock instant and returns typed results. Nothing here performs I/O.
//!
//! Data flows one way:
//!
//! - history -> [`features`] -> ([`classifier`] | [`rule_engine`]) -> ranked recommendations
//! - history -> [`pattern_detection`] -> pattern report
//! - goal -> [`progress_prediction`] -> forecast

/// Check-in streaks, averages and score trends
pub mod checkin_statistics;

/// Goal-category softmax classifier trained once per engine
pub mod classifier;

/// Intelligence configuration (thresholds, training parameters)
pub mod config;

/// History to feature vector conversion
pub mod features;

/// Descriptive behavioral patterns
pub mod pattern_detection;

/// Goal completion forecasting
pub mod progress_prediction;

/// Recommendation output types and ranking
pub mod recommendation;

/// Threshold-based fallback recommendations
pub mod rule_engine;

/// Shared statistical helpers
pub mod statistical_analysis;

/// Engagement statistics and monthly summaries
pub mod user_statistics;

pub use checkin_statistics::{CheckinStatistics, ScoreTrend};
pub use classifier::{ClassifierEngine, ClassifierUnavailable, ModelState, Prediction};
pub use config::IntelligenceConfig;
pub use features::{FeatureExtractor, FeatureVector};
pub use pattern_detection::{PatternAnalyzer, PatternReport, ProgressTrend};
pub use progress_prediction::{CompletionLikelihood, ProgressForecast, ProgressPredictor};
pub use recommendation::{
    rank_recommendations, RecommendationItem, RecommendationPriority, RecommendationSource,
};
pub use rule_engine::RuleEngine;
pub use statistical_analysis::StatisticalAnalyzer;
pub use user_statistics::{EngagementLevel, MonthlySummary, UserStatistics};
