// ABOUTME: Threshold-based fallback recommendation engine
// ABOUTME: Fixed ordered rules over the feature vector with a guaranteed default suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use crate::config::intelligence::RuleEngineConfig;
use crate::features::FeatureVector;
use crate::recommendation::{RecommendationItem, RecommendationPriority, RecommendationSource};
use metaflow_core::models::GoalCategory;

/// Explainable recommendations from fixed threshold rules
///
/// Always available and never empty: when no rule fires a single default
/// Personal suggestion is returned.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleEngineConfig,
}

impl RuleEngine {
    /// Create a rule engine with custom configuration
    #[must_use]
    pub const fn with_config(config: RuleEngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate every rule in order against `features`
    #[must_use]
    pub fn evaluate(&self, features: &FeatureVector) -> Vec<RecommendationItem> {
        let thresholds = &self.config.thresholds;
        let confidences = &self.config.confidences;
        let messages = &self.config.messages;
        let mut items = Vec::new();

        if features.avg_productivity < thresholds.productivity_threshold {
            items.push(RecommendationItem::new(
                GoalCategory::Health,
                confidences.low_productivity,
                &messages.low_productivity,
                RecommendationPriority::High,
                RecommendationSource::Rule,
            ));
        }

        if features.completion_rate < thresholds.completion_threshold {
            items.push(RecommendationItem::new(
                GoalCategory::Personal,
                confidences.low_completion,
                &messages.low_completion,
                RecommendationPriority::High,
                RecommendationSource::Rule,
            ));
        }

        if features.checkin_consistency < thresholds.consistency_threshold {
            items.push(RecommendationItem::new(
                GoalCategory::Leisure,
                confidences.low_consistency,
                &messages.low_consistency,
                RecommendationPriority::Medium,
                RecommendationSource::Rule,
            ));
        }

        if features.avg_mood < thresholds.mood_threshold {
            items.push(RecommendationItem::new(
                GoalCategory::Relationships,
                confidences.low_mood,
                &messages.low_mood,
                RecommendationPriority::High,
                RecommendationSource::Rule,
            ));
        }

        if items.is_empty() {
            items.push(RecommendationItem::new(
                GoalCategory::Personal,
                confidences.default,
                &messages.default,
                RecommendationPriority::Medium,
                RecommendationSource::Default,
            ));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thriving() -> FeatureVector {
        FeatureVector {
            dominant_category_code: 0,
            completion_rate: 0.9,
            avg_completed_duration_days: 20.0,
            checkin_consistency: 0.95,
            avg_productivity: 8.0,
            avg_mood: 8.0,
        }
    }

    #[test]
    fn test_default_when_no_rule_fires() {
        let items = RuleEngine::default().evaluate(&thriving());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, GoalCategory::Personal);
        assert_eq!(items[0].source, RecommendationSource::Default);
        assert_eq!(items[0].priority, RecommendationPriority::Medium);
        assert!((items[0].confidence - 0.60).abs() < f64::EPSILON);
        assert_eq!(items[0].justification, "continue personal development");
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let features = FeatureVector {
            completion_rate: 0.4,
            checkin_consistency: 0.5,
            avg_productivity: 5.5,
            avg_mood: 5.0,
            ..thriving()
        };
        let items = RuleEngine::default().evaluate(&features);
        let categories: Vec<GoalCategory> = items.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                GoalCategory::Health,
                GoalCategory::Personal,
                GoalCategory::Leisure,
                GoalCategory::Relationships
            ]
        );
        assert!(items.iter().all(|i| i.source == RecommendationSource::Rule));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let features = FeatureVector {
            completion_rate: 0.5,
            checkin_consistency: 0.7,
            avg_productivity: 6.0,
            avg_mood: 6.0,
            ..thriving()
        };
        let items = RuleEngine::default().evaluate(&features);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, RecommendationSource::Default);
    }

    #[test]
    fn test_empty_history_features_fire_rules() {
        let items = RuleEngine::default().evaluate(&FeatureVector::default());
        assert!(!items.is_empty());
        assert!(items.iter().any(|i| i.category == GoalCategory::Health));
    }
}
