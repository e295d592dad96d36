// ABOUTME: Insights service orchestrating history fetches and analytics per request
// ABOUTME: Recommendations, pattern reports, forecasts, and user statistics with named failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! # Insights Service
//!
//! Each operation fetches the history it needs through [`HistoryStore`] and
//! hands it to a pure algorithm from `metaflow_intelligence`. Only unknown
//! users or goals, invalid periods, and storage failures surface as errors;
//! a classifier that failed to train silently leaves recommendations to the
//! rule engine.
//!
//! Every operation has an `*_at` variant taking an explicit clock instant so
//! results are reproducible.

use crate::logging::AppLogger;
use crate::storage::HistoryStore;
use chrono::{DateTime, Utc};
use metaflow_core::errors::{AppError, AppResult};
use metaflow_core::models::{Checkin, Goal};
use metaflow_intelligence::checkin_statistics::CheckinStatistics;
use metaflow_intelligence::classifier::ClassifierEngine;
use metaflow_intelligence::config::intelligence::{IntelligenceConfig, StatisticsConfig};
use metaflow_intelligence::features::FeatureExtractor;
use metaflow_intelligence::pattern_detection::{PatternAnalyzer, PatternReport};
use metaflow_intelligence::progress_prediction::{ProgressForecast, ProgressPredictor};
use metaflow_intelligence::recommendation::{
    category_justification, rank_recommendations, RecommendationItem, RecommendationPriority,
    RecommendationSource,
};
use metaflow_intelligence::rule_engine::RuleEngine;
use metaflow_intelligence::user_statistics::{self, MonthlySummary, UserStatistics};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Request-scoped analytics over a shared history store
///
/// `Send + Sync`; share it behind an `Arc`. Services built with
/// [`InsightsService::new`] share the process-wide classifier, which is
/// trained on the first recommendation (or [`InsightsService::warm_up`]) and
/// reused afterwards.
pub struct InsightsService {
    store: Arc<dyn HistoryStore>,
    classifier: Arc<ClassifierEngine>,
    rules: RuleEngine,
    patterns: PatternAnalyzer,
    predictor: ProgressPredictor,
    statistics: StatisticsConfig,
    high_priority_confidence: f64,
}

impl InsightsService {
    /// Service using the global configuration and the process-wide classifier
    #[must_use]
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self::with_classifier(
            store,
            IntelligenceConfig::global().clone(),
            ClassifierEngine::shared(),
        )
    }

    /// Service with explicit configuration and its own classifier
    #[must_use]
    pub fn with_config(store: Arc<dyn HistoryStore>, config: IntelligenceConfig) -> Self {
        let classifier = Arc::new(ClassifierEngine::new(config.classifier.clone()));
        Self::with_classifier(store, config, classifier)
    }

    /// Service with explicit configuration and a caller-built classifier
    #[must_use]
    pub fn with_classifier(
        store: Arc<dyn HistoryStore>,
        config: IntelligenceConfig,
        classifier: Arc<ClassifierEngine>,
    ) -> Self {
        Self {
            store,
            high_priority_confidence: classifier.config().high_priority_confidence,
            classifier,
            rules: RuleEngine::with_config(config.rules),
            patterns: PatternAnalyzer::with_config(config.patterns),
            predictor: ProgressPredictor::with_config(config.forecast),
            statistics: config.statistics,
        }
    }

    /// Classifier backing the recommendations
    #[must_use]
    pub const fn classifier(&self) -> &Arc<ClassifierEngine> {
        &self.classifier
    }

    /// Train the classifier now instead of on the first request
    ///
    /// Returns whether a model is available.
    pub fn warm_up(&self) -> bool {
        self.classifier.is_available()
    }

    /// Ranked next-goal recommendations for a user
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn recommend(&self, user_id: Uuid) -> AppResult<Vec<RecommendationItem>> {
        self.recommend_at(user_id, Utc::now()).await
    }

    /// [`Self::recommend`] as of `now`
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn recommend_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<RecommendationItem>> {
        let started = Instant::now();
        let (goals, checkins) = self.load_history(user_id).await?;

        let features = FeatureExtractor::extract(&goals, &checkins, now);
        debug!(user_id = %user_id, ?features, "Extracted feature vector");

        let mut items = Vec::new();
        match self.classifier.predict(&features) {
            Ok(prediction) => {
                let priority = if prediction.confidence > self.high_priority_confidence {
                    RecommendationPriority::High
                } else {
                    RecommendationPriority::Medium
                };
                items.push(RecommendationItem::new(
                    prediction.category,
                    prediction.confidence,
                    category_justification(prediction.category),
                    priority,
                    RecommendationSource::Model,
                ));
            }
            Err(unavailable) => debug!("Recommending from rules only: {unavailable}"),
        }
        items.extend(self.rules.evaluate(&features));
        rank_recommendations(&mut items);

        info!(
            user_id = %user_id,
            count = items.len(),
            "Generated goal recommendations"
        );
        AppLogger::log_operation("recommend", user_id, items.len(), started.elapsed());
        Ok(items)
    }

    /// Descriptive behavioral patterns for a user
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn analyze_patterns(&self, user_id: Uuid) -> AppResult<PatternReport> {
        self.analyze_patterns_at(user_id, Utc::now()).await
    }

    /// [`Self::analyze_patterns`] as of `now`
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn analyze_patterns_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<PatternReport> {
        let started = Instant::now();
        let (goals, checkins) = self.load_history(user_id).await?;
        let report = self.patterns.analyze(&goals, &checkins, now);
        AppLogger::log_operation("analyze_patterns", user_id, checkins.len(), started.elapsed());
        Ok(report)
    }

    /// Completion forecast for one goal
    ///
    /// # Errors
    ///
    /// Returns `GoalNotFound` for an unknown goal or a storage error
    pub async fn forecast_progress(&self, goal_id: Uuid) -> AppResult<ProgressForecast> {
        self.forecast_progress_at(goal_id, Utc::now()).await
    }

    /// [`Self::forecast_progress`] as of `now`
    ///
    /// # Errors
    ///
    /// Returns `GoalNotFound` for an unknown goal or a storage error
    pub async fn forecast_progress_at(
        &self,
        goal_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<ProgressForecast> {
        let goal = self
            .store
            .get_goal_by_id(goal_id)
            .await?
            .ok_or_else(|| AppError::goal_not_found(goal_id))?;
        Ok(self.predictor.forecast(&goal, now))
    }

    /// Engagement statistics for a user
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn user_statistics(&self, user_id: Uuid) -> AppResult<UserStatistics> {
        self.user_statistics_at(user_id, Utc::now()).await
    }

    /// [`Self::user_statistics`] as of `now`
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn user_statistics_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<UserStatistics> {
        let (goals, checkins) = self.load_history(user_id).await?;
        Ok(UserStatistics::compute(&goals, &checkins, now, &self.statistics))
    }

    /// Check-in averages, streak and recent trends for a user
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn checkin_statistics(&self, user_id: Uuid) -> AppResult<CheckinStatistics> {
        self.ensure_user(user_id).await?;
        let checkins = self.store.get_checkins_for_user(user_id).await?;
        Ok(CheckinStatistics::compute(&checkins, &self.statistics))
    }

    /// Aggregates for one calendar month
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid month, `UserNotFound` for an
    /// unknown user, or a storage error
    pub async fn monthly_summary(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<MonthlySummary> {
        let (start, end) = MonthlySummary::month_bounds(year, month)?;
        self.ensure_user(user_id).await?;

        let (goals, checkins) = tokio::try_join!(
            self.store.get_goals_for_user(user_id),
            self.store.get_checkins_for_period(user_id, start, end),
        )?;
        MonthlySummary::compute(year, month, &goals, &checkins)
    }

    /// Whether the user has enough history for meaningful analysis
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user or a storage error
    pub async fn has_sufficient_data(&self, user_id: Uuid) -> AppResult<bool> {
        let (goals, checkins) = self.load_history(user_id).await?;
        Ok(user_statistics::has_sufficient_data(
            goals.len(),
            checkins.len(),
            &self.statistics,
        ))
    }

    async fn ensure_user(&self, user_id: Uuid) -> AppResult<()> {
        if self.store.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(AppError::user_not_found(user_id))
        }
    }

    async fn load_history(&self, user_id: Uuid) -> AppResult<(Vec<Goal>, Vec<Checkin>)> {
        self.ensure_user(user_id).await?;
        tokio::try_join!(
            self.store.get_goals_for_user(user_id),
            self.store.get_checkins_for_user(user_id),
        )
    }
}
