// ABOUTME: Hand-authored bootstrap corpus for the goal-category classifier
// ABOUTME: One labelled behavioral profile per category, immutable configuration data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// A labelled feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Input features
    pub features: FeatureVector,
    /// Target category ordinal
    pub label_category_code: usize,
}

impl TrainingSample {
    /// Build a sample from the six raw fields and a label
    #[must_use]
    pub const fn new(
        dominant_category_code: usize,
        completion_rate: f64,
        avg_completed_duration_days: f64,
        checkin_consistency: f64,
        avg_productivity: f64,
        avg_mood: f64,
        label_category_code: usize,
    ) -> Self {
        Self {
            features: FeatureVector {
                dominant_category_code,
                completion_rate,
                avg_completed_duration_days,
                checkin_consistency,
                avg_productivity,
                avg_mood,
            },
            label_category_code,
        }
    }
}

// (category, completion, duration days, consistency, productivity, mood) -> label
const BOOTSTRAP_ROWS: [TrainingSample; 7] = [
    TrainingSample::new(0, 0.8, 30.0, 0.9, 8.0, 7.0, 0),
    TrainingSample::new(1, 0.6, 45.0, 0.7, 6.0, 6.0, 1),
    TrainingSample::new(2, 0.9, 15.0, 0.8, 9.0, 8.0, 2),
    TrainingSample::new(3, 0.7, 60.0, 0.6, 7.0, 7.0, 3),
    TrainingSample::new(4, 0.5, 90.0, 0.5, 6.0, 5.0, 4),
    TrainingSample::new(5, 0.4, 20.0, 0.4, 5.0, 4.0, 5),
    TrainingSample::new(6, 0.3, 10.0, 0.3, 4.0, 5.0, 6),
];

/// The fixed bootstrap corpus
///
/// Tiny by construction: the model trained on it carries little predictive
/// value beyond mapping the dominant category back to itself.
#[must_use]
pub fn bootstrap_corpus() -> Vec<TrainingSample> {
    BOOTSTRAP_ROWS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaflow_core::models::GoalCategory;
    use std::collections::HashSet;

    #[test]
    fn test_corpus_spans_every_category() {
        let labels: HashSet<usize> = bootstrap_corpus()
            .iter()
            .map(|s| s.label_category_code)
            .collect();
        assert_eq!(labels.len(), GoalCategory::COUNT);
        assert!(bootstrap_corpus().iter().all(|s| s.features.is_finite()));
    }
}
