// ABOUTME: Classifier training configuration for the goal-category model
// ABOUTME: Seed, epochs, learning rate, regularization, and priority cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use serde::{Deserialize, Serialize};

/// Softmax regression training parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Seed for the weight initialization RNG
    pub seed: u64,
    /// Full-batch gradient descent iterations
    pub epochs: usize,
    /// Gradient descent step size
    pub learning_rate: f64,
    /// L2 regularization strength
    pub l2_penalty: f64,
    /// Half-width of the uniform initial weight distribution
    pub init_scale: f64,
    /// Model items above this confidence are High priority
    pub high_priority_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            epochs: 500,
            learning_rate: 0.5,
            l2_penalty: 0.001,
            init_scale: 0.01,
            high_priority_confidence: 0.7,
        }
    }
}
