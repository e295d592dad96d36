// ABOUTME: Multinomial logistic regression over the six behavioral features
// ABOUTME: Min-max normalization, seeded gradient descent training, and per-call predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::cast_precision_loss)] // Safe: corpus sizes are tiny

use super::corpus::TrainingSample;
use crate::config::intelligence::ClassifierConfig;
use crate::features::{FeatureVector, FEATURE_COUNT};
use metaflow_core::models::GoalCategory;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::array;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

const CLASS_COUNT: usize = GoalCategory::COUNT;

type Weights = [[f64; FEATURE_COUNT]; CLASS_COUNT];

/// Reasons training can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// No samples supplied
    #[error("training corpus is empty")]
    EmptyCorpus,
    /// A sample's label is not a category ordinal
    #[error("sample {index} has label {label}, which is not a category ordinal")]
    LabelOutOfRange {
        /// Sample position
        index: usize,
        /// Offending label
        label: usize,
    },
    /// A sample has a NaN or infinite feature
    #[error("sample {index} contains a non-finite feature")]
    NonFiniteFeature {
        /// Sample position
        index: usize,
    },
    /// Fewer than two distinct labels
    #[error("training corpus needs at least two distinct labels, found {0}")]
    InsufficientClasses(usize),
    /// Gradient descent produced NaN or infinite weights
    #[error("training diverged after {epochs} epochs")]
    Diverged {
        /// Epochs run
        epochs: usize,
    },
}

/// Per-feature min-max scaling fitted on the training corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    mins: [f64; FEATURE_COUNT],
    ranges: [f64; FEATURE_COUNT],
}

impl Normalizer {
    fn fit(rows: &[[f64; FEATURE_COUNT]]) -> Self {
        let mut mins = [f64::INFINITY; FEATURE_COUNT];
        let mut maxs = [f64::NEG_INFINITY; FEATURE_COUNT];
        for row in rows {
            for (j, value) in row.iter().enumerate() {
                mins[j] = mins[j].min(*value);
                maxs[j] = maxs[j].max(*value);
            }
        }

        let ranges = array::from_fn(|j| maxs[j] - mins[j]);
        Self { mins, ranges }
    }

    /// Scale `raw` into `out`; zero-range features and non-finite inputs map to 0
    pub fn apply(&self, raw: &[f64; FEATURE_COUNT], out: &mut [f64; FEATURE_COUNT]) {
        for j in 0..FEATURE_COUNT {
            let scaled = if self.ranges[j] > 0.0 {
                (raw[j] - self.mins[j]) / self.ranges[j]
            } else {
                0.0
            };
            out[j] = if scaled.is_finite() { scaled } else { 0.0 };
        }
    }
}

/// Highest-probability category with its probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted category
    pub category: GoalCategory,
    /// Softmax probability of that category
    pub confidence: f64,
}

/// Immutable fitted model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    normalizer: Normalizer,
    weights: Weights,
    bias: [f64; CLASS_COUNT],
    final_loss: f64,
}

impl TrainedModel {
    /// New inference handle with its own scratch buffers
    #[must_use]
    pub const fn predictor(&self) -> Predictor<'_> {
        Predictor {
            model: self,
            input: [0.0; FEATURE_COUNT],
            logits: [0.0; CLASS_COUNT],
        }
    }

    /// Regularized cross-entropy after the last epoch
    #[must_use]
    pub const fn final_loss(&self) -> f64 {
        self.final_loss
    }

    fn logits(&self, input: &[f64; FEATURE_COUNT], out: &mut [f64; CLASS_COUNT]) {
        for (k, logit) in out.iter_mut().enumerate() {
            *logit = self.weights[k]
                .iter()
                .zip(input)
                .fold(self.bias[k], |acc, (w, x)| w.mul_add(*x, acc));
        }
    }
}

/// Per-call inference handle borrowing a [`TrainedModel`]
///
/// Holds mutable scratch space, so each request builds its own instead of
/// sharing one across threads.
#[derive(Debug)]
pub struct Predictor<'a> {
    model: &'a TrainedModel,
    input: [f64; FEATURE_COUNT],
    logits: [f64; CLASS_COUNT],
}

impl Predictor<'_> {
    /// Most probable category; ties go to the lowest ordinal
    pub fn predict(&mut self, features: &FeatureVector) -> Prediction {
        self.model
            .normalizer
            .apply(&features.to_array(), &mut self.input);
        self.model.logits(&self.input, &mut self.logits);
        softmax_in_place(&mut self.logits);

        let mut best = 0;
        for k in 1..CLASS_COUNT {
            if self.logits[k] > self.logits[best] {
                best = k;
            }
        }

        Prediction {
            category: GoalCategory::ALL[best],
            confidence: self.logits[best].clamp(0.0, 1.0),
        }
    }
}

/// Trainer for the goal-category softmax regression
pub struct GoalCategoryClassifier;

impl GoalCategoryClassifier {
    /// Fit a model on `corpus`
    ///
    /// # Errors
    ///
    /// Returns a [`TrainingError`] for an empty or degenerate corpus, or when
    /// gradient descent produces non-finite weights.
    pub fn train(
        corpus: &[TrainingSample],
        config: &ClassifierConfig,
    ) -> Result<TrainedModel, TrainingError> {
        let (rows, labels) = Self::prepare(corpus)?;

        let normalizer = Normalizer::fit(&rows);
        let inputs: Vec<[f64; FEATURE_COUNT]> = rows
            .iter()
            .map(|row| {
                let mut scaled = [0.0; FEATURE_COUNT];
                normalizer.apply(row, &mut scaled);
                scaled
            })
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut weights: Weights = [[0.0; FEATURE_COUNT]; CLASS_COUNT];
        for row in &mut weights {
            for w in row.iter_mut() {
                *w = rng.gen_range(-config.init_scale..=config.init_scale);
            }
        }

        let mut model = TrainedModel {
            normalizer,
            weights,
            bias: [0.0; CLASS_COUNT],
            final_loss: f64::NAN,
        };

        for _ in 0..config.epochs {
            model.final_loss = Self::descend(&mut model, &inputs, &labels, config);
        }

        let finite = model.final_loss.is_finite()
            && model.bias.iter().all(|b| b.is_finite())
            && model.weights.iter().flatten().all(|w| w.is_finite());
        if !finite {
            return Err(TrainingError::Diverged {
                epochs: config.epochs,
            });
        }

        debug!(
            samples = corpus.len(),
            epochs = config.epochs,
            loss = model.final_loss,
            "Trained goal-category classifier"
        );
        Ok(model)
    }

    fn prepare(
        corpus: &[TrainingSample],
    ) -> Result<(Vec<[f64; FEATURE_COUNT]>, Vec<usize>), TrainingError> {
        if corpus.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }

        let mut rows = Vec::with_capacity(corpus.len());
        let mut labels = Vec::with_capacity(corpus.len());
        for (index, sample) in corpus.iter().enumerate() {
            let label = sample.label_category_code;
            if label >= CLASS_COUNT {
                return Err(TrainingError::LabelOutOfRange { index, label });
            }
            if !sample.features.is_finite() {
                return Err(TrainingError::NonFiniteFeature { index });
            }
            rows.push(sample.features.to_array());
            labels.push(label);
        }

        let distinct = labels.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            return Err(TrainingError::InsufficientClasses(distinct));
        }
        Ok((rows, labels))
    }

    /// One full-batch gradient step; returns the loss before the step
    fn descend(
        model: &mut TrainedModel,
        inputs: &[[f64; FEATURE_COUNT]],
        labels: &[usize],
        config: &ClassifierConfig,
    ) -> f64 {
        let n = inputs.len() as f64;
        let mut grad_w: Weights = [[0.0; FEATURE_COUNT]; CLASS_COUNT];
        let mut grad_b = [0.0; CLASS_COUNT];
        let mut probs = [0.0; CLASS_COUNT];
        let mut loss = 0.0;

        for (input, &label) in inputs.iter().zip(labels) {
            model.logits(input, &mut probs);
            softmax_in_place(&mut probs);
            loss -= probs[label].max(f64::MIN_POSITIVE).ln();

            for k in 0..CLASS_COUNT {
                let error = probs[k] - if k == label { 1.0 } else { 0.0 };
                grad_b[k] += error;
                for j in 0..FEATURE_COUNT {
                    grad_w[k][j] = error.mul_add(input[j], grad_w[k][j]);
                }
            }
        }

        let mut penalty = 0.0;
        for k in 0..CLASS_COUNT {
            for j in 0..FEATURE_COUNT {
                let w = model.weights[k][j];
                penalty = w.mul_add(w, penalty);
                let gradient = config.l2_penalty.mul_add(w, grad_w[k][j] / n);
                model.weights[k][j] = config.learning_rate.mul_add(-gradient, w);
            }
            model.bias[k] = config.learning_rate.mul_add(-grad_b[k] / n, model.bias[k]);
        }

        (0.5 * config.l2_penalty).mul_add(penalty, loss / n)
    }
}

fn softmax_in_place(values: &mut [f64; CLASS_COUNT]) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for value in values.iter_mut() {
        *value = (*value - max).exp();
        sum += *value;
    }
    if sum > 0.0 && sum.is_finite() {
        for value in values.iter_mut() {
            *value /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::corpus::bootstrap_corpus;

    #[test]
    fn test_train_on_bootstrap_corpus() {
        let model =
            GoalCategoryClassifier::train(&bootstrap_corpus(), &ClassifierConfig::default())
                .unwrap();
        assert!(model.final_loss().is_finite());

        let mut predictor = model.predictor();
        let prediction = predictor.predict(&FeatureVector::default());
        assert!((0.0..=1.0).contains(&prediction.confidence));
        assert!(prediction.confidence >= 1.0 / CLASS_COUNT as f64);
    }

    #[test]
    fn test_training_is_deterministic() {
        let config = ClassifierConfig::default();
        let first = GoalCategoryClassifier::train(&bootstrap_corpus(), &config).unwrap();
        let second = GoalCategoryClassifier::train(&bootstrap_corpus(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_training_reduces_loss() {
        let short = ClassifierConfig {
            epochs: 1,
            ..ClassifierConfig::default()
        };
        let long = ClassifierConfig::default();
        let early = GoalCategoryClassifier::train(&bootstrap_corpus(), &short).unwrap();
        let late = GoalCategoryClassifier::train(&bootstrap_corpus(), &long).unwrap();
        assert!(late.final_loss() < early.final_loss());
    }

    #[test]
    fn test_degenerate_corpora_rejected() {
        let config = ClassifierConfig::default();
        assert_eq!(
            GoalCategoryClassifier::train(&[], &config),
            Err(TrainingError::EmptyCorpus)
        );

        let single_class = vec![TrainingSample::new(0, 0.5, 30.0, 0.5, 5.0, 5.0, 2); 3];
        assert_eq!(
            GoalCategoryClassifier::train(&single_class, &config),
            Err(TrainingError::InsufficientClasses(1))
        );

        let bad_label = vec![
            TrainingSample::new(0, 0.5, 30.0, 0.5, 5.0, 5.0, 0),
            TrainingSample::new(1, 0.5, 30.0, 0.5, 5.0, 5.0, 9),
        ];
        assert_eq!(
            GoalCategoryClassifier::train(&bad_label, &config),
            Err(TrainingError::LabelOutOfRange { index: 1, label: 9 })
        );

        let nan = vec![
            TrainingSample::new(0, f64::NAN, 30.0, 0.5, 5.0, 5.0, 0),
            TrainingSample::new(1, 0.5, 30.0, 0.5, 5.0, 5.0, 1),
        ];
        assert_eq!(
            GoalCategoryClassifier::train(&nan, &config),
            Err(TrainingError::NonFiniteFeature { index: 0 })
        );
    }

    #[test]
    fn test_zero_range_feature_normalizes_to_zero() {
        let normalizer = Normalizer::fit(&[[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; 2]);
        let mut out = [9.0; FEATURE_COUNT];
        normalizer.apply(&[10.0, 10.0, 10.0, 10.0, 10.0, 10.0], &mut out);
        assert_eq!(out, [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_divergent_learning_rate_is_reported() {
        let config = ClassifierConfig {
            learning_rate: f64::MAX,
            ..ClassifierConfig::default()
        };
        assert!(matches!(
            GoalCategoryClassifier::train(&bootstrap_corpus(), &config),
            Err(TrainingError::Diverged { .. })
        ));
    }
}
