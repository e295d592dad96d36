// ABOUTME: Intelligence configuration for recommendation and behavioral analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `rules` - Rule engine thresholds, confidences and messages
//! - `classifier` - Softmax regression training parameters
//! - `analysis` - Pattern, forecast and statistics step thresholds
//!
//! Defaults are the documented thresholds. `load()` applies `METAFLOW_*`
//! environment overrides and then validates the result.

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod rules;

pub use analysis::{ForecastConfig, PatternAnalysisConfig, StatisticsConfig};
pub use classifier::ClassifierConfig;
pub use error::ConfigError;
pub use rules::{RuleConfidences, RuleEngineConfig, RuleMessages, RuleThresholds};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Rule-based fallback engine
    pub rules: RuleEngineConfig,
    /// Goal-category classifier training
    pub classifier: ClassifierConfig,
    /// Pattern analyzer
    pub patterns: PatternAnalysisConfig,
    /// Progress predictor
    pub forecast: ForecastConfig,
    /// User and check-in statistics
    pub statistics: StatisticsConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold, confidence, or training parameter is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_rules()?;
        self.validate_classifier()?;
        self.validate_analysis()
    }

    fn validate_rules(&self) -> Result<(), ConfigError> {
        let thresholds = &self.rules.thresholds;
        if !(0.0..=1.0).contains(&thresholds.completion_threshold)
            || !(0.0..=1.0).contains(&thresholds.consistency_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Completion and consistency thresholds must be between 0.0 and 1.0",
            ));
        }
        if !(1.0..=10.0).contains(&thresholds.productivity_threshold)
            || !(1.0..=10.0).contains(&thresholds.mood_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Productivity and mood thresholds must be on the 1-10 scale",
            ));
        }

        let confidences = &self.rules.confidences;
        let all_in_unit = [
            confidences.low_productivity,
            confidences.low_completion,
            confidences.low_consistency,
            confidences.low_mood,
            confidences.default,
        ]
        .iter()
        .all(|c| (0.0..=1.0).contains(c));
        if !all_in_unit {
            return Err(ConfigError::ValueOutOfRange(
                "Rule confidences must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }

    fn validate_classifier(&self) -> Result<(), ConfigError> {
        let classifier = &self.classifier;
        if classifier.epochs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Classifier epochs must be positive",
            ));
        }
        if !classifier.learning_rate.is_finite() || classifier.learning_rate <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Classifier learning rate must be positive",
            ));
        }
        if !classifier.l2_penalty.is_finite() || classifier.l2_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Classifier L2 penalty must be non-negative",
            ));
        }
        if !classifier.init_scale.is_finite() || classifier.init_scale <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Classifier init scale must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&classifier.high_priority_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "High priority confidence must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }

    fn validate_analysis(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.patterns.good_progress_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "Good progress threshold must be between 0 and 100",
            ));
        }

        let forecast = &self.forecast;
        if forecast.moderate_gap >= forecast.high_gap || forecast.high_gap >= forecast.very_high_gap
        {
            return Err(ConfigError::InvalidRange(
                "Forecast gaps must satisfy moderate < high < very_high",
            ));
        }

        let stats = &self.statistics;
        if stats.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend window must cover at least two check-ins",
            ));
        }
        if stats.recent_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Recent window must be at least one day",
            ));
        }
        if stats.medium_engagement_checkins >= stats.high_engagement_checkins {
            return Err(ConfigError::InvalidRange(
                "medium_engagement_checkins must be < high_engagement_checkins",
            ));
        }
        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Rule engine overrides
        Self::apply_env_var(
            "METAFLOW_RULE_PRODUCTIVITY_THRESHOLD",
            &mut self.rules.thresholds.productivity_threshold,
        )?;
        Self::apply_env_var(
            "METAFLOW_RULE_COMPLETION_THRESHOLD",
            &mut self.rules.thresholds.completion_threshold,
        )?;
        Self::apply_env_var(
            "METAFLOW_RULE_CONSISTENCY_THRESHOLD",
            &mut self.rules.thresholds.consistency_threshold,
        )?;
        Self::apply_env_var(
            "METAFLOW_RULE_MOOD_THRESHOLD",
            &mut self.rules.thresholds.mood_threshold,
        )?;

        // Classifier overrides
        Self::apply_env_var("METAFLOW_CLASSIFIER_SEED", &mut self.classifier.seed)?;
        Self::apply_env_var("METAFLOW_CLASSIFIER_EPOCHS", &mut self.classifier.epochs)?;
        Self::apply_env_var(
            "METAFLOW_CLASSIFIER_LEARNING_RATE",
            &mut self.classifier.learning_rate,
        )?;
        Self::apply_env_var("METAFLOW_CLASSIFIER_L2", &mut self.classifier.l2_penalty)?;

        // Analysis overrides
        Self::apply_env_var(
            "METAFLOW_GOOD_PROGRESS_THRESHOLD",
            &mut self.patterns.good_progress_threshold,
        )?;
        Self::apply_env_var(
            "METAFLOW_STATS_TREND_WINDOW",
            &mut self.statistics.trend_window,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_forecast_gaps_rejected() {
        let mut config = IntelligenceConfig::default();
        config.forecast.high_gap = 25.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_epochs_rejected() {
        let mut config = IntelligenceConfig::default();
        config.classifier.epochs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_confidence_out_of_unit_interval_rejected() {
        let mut config = IntelligenceConfig::default();
        config.rules.confidences.low_mood = 1.5;
        assert!(config.validate().is_err());
    }
}
