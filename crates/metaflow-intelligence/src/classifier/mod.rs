// ABOUTME: Classifier engine holding the process-wide goal-category model
// ABOUTME: Trains once behind a OnceLock and degrades to a permanent Unavailable state on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! # Classifier Engine
//!
//! The model is fitted at most once per engine instance, and
//! [`ClassifierEngine::shared`] hands out the single process-wide engine.
//! Concurrent first callers block on the `OnceLock` until training finishes;
//! afterwards every read is lock-free. A failed fit is logged once and
//! recorded as [`ModelState::Unavailable`], which is never retried.

pub mod corpus;
pub mod model;

pub use corpus::{bootstrap_corpus, TrainingSample};
pub use model::{GoalCategoryClassifier, Normalizer, Prediction, Predictor, TrainedModel, TrainingError};

use crate::config::intelligence::{ClassifierConfig, IntelligenceConfig};
use crate::features::FeatureVector;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{error, info};

/// Outcome of the one-time training attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ModelState {
    /// Model ready for inference
    Trained(TrainedModel),
    /// Training failed; the reason is kept for diagnostics
    Unavailable(String),
}

/// Returned by [`ClassifierEngine::predict`] when no model exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("goal-category classifier unavailable: {reason}")]
pub struct ClassifierUnavailable {
    /// Why training failed
    pub reason: String,
}

static SHARED_ENGINE: OnceLock<Arc<ClassifierEngine>> = OnceLock::new();

/// Lazily trained goal-category classifier
#[derive(Debug)]
pub struct ClassifierEngine {
    corpus: Vec<TrainingSample>,
    config: ClassifierConfig,
    state: OnceLock<ModelState>,
}

impl ClassifierEngine {
    /// Engine over the bootstrap corpus
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_corpus(bootstrap_corpus(), config)
    }

    /// Engine over a caller-supplied corpus
    #[must_use]
    pub const fn with_corpus(corpus: Vec<TrainingSample>, config: ClassifierConfig) -> Self {
        Self {
            corpus,
            config,
            state: OnceLock::new(),
        }
    }

    /// Process-wide engine built from the global classifier configuration
    ///
    /// Every caller receives the same instance, so the bootstrap corpus is
    /// fitted at most once per process.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(SHARED_ENGINE.get_or_init(|| {
            Arc::new(Self::new(IntelligenceConfig::global().classifier.clone()))
        }))
    }

    /// Training parameters
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Current state, training on first access
    pub fn state(&self) -> &ModelState {
        self.state.get_or_init(|| {
            match GoalCategoryClassifier::train(&self.corpus, &self.config) {
                Ok(model) => {
                    info!(
                        samples = self.corpus.len(),
                        loss = model.final_loss(),
                        "Goal-category classifier trained"
                    );
                    ModelState::Trained(model)
                }
                Err(e) => {
                    error!("Goal-category classifier training failed, using rules only: {e}");
                    ModelState::Unavailable(e.to_string())
                }
            }
        })
    }

    /// Whether a trained model is available
    pub fn is_available(&self) -> bool {
        matches!(self.state(), ModelState::Trained(_))
    }

    /// Predict the best category for `features`
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierUnavailable`] when training failed
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierUnavailable> {
        match self.state() {
            ModelState::Trained(model) => Ok(model.predictor().predict(features)),
            ModelState::Unavailable(reason) => Err(ClassifierUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_engine_is_available() {
        let engine = ClassifierEngine::default();
        assert!(engine.is_available());
        let prediction = engine.predict(&FeatureVector::default()).unwrap();
        assert!((0.0..=1.0).contains(&prediction.confidence));
    }

    #[test]
    fn test_unavailable_is_permanent() {
        let engine = ClassifierEngine::with_corpus(Vec::new(), ClassifierConfig::default());
        let first = engine.predict(&FeatureVector::default());
        let second = engine.predict(&FeatureVector::default());
        assert!(first.is_err());
        assert_eq!(first, second);
        assert!(matches!(engine.state(), ModelState::Unavailable(_)));
    }

    #[test]
    fn test_concurrent_predictions_agree() {
        let engine = Arc::new(ClassifierEngine::default());
        let features = FeatureVector {
            dominant_category_code: 3,
            completion_rate: 0.7,
            avg_completed_duration_days: 60.0,
            checkin_consistency: 0.6,
            avg_productivity: 7.0,
            avg_mood: 7.0,
        };

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || engine.predict(&features).unwrap())
            })
            .collect();
        let predictions: Vec<Prediction> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(predictions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_shared_engine_is_one_instance() {
        let handles: Vec<_> = (0..4).map(|_| thread::spawn(ClassifierEngine::shared)).collect();
        let engines: Vec<Arc<ClassifierEngine>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(engines.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert!(Arc::ptr_eq(&engines[0], &ClassifierEngine::shared()));
    }
}
