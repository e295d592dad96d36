// ABOUTME: Read-only storage interface the insights service depends on
// ABOUTME: HistoryStore async trait plus the in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! # History Storage
//!
//! Persistence of users, goals and check-ins lives outside this crate. The
//! service reaches it only through [`HistoryStore`], which returns
//! well-formed domain records.

/// Dashmap-backed store loadable from a JSON snapshot
pub mod memory;

pub use memory::{HistorySnapshot, InMemoryHistoryStore};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metaflow_core::errors::AppResult;
use metaflow_core::models::{Checkin, Goal};
use uuid::Uuid;

/// Read-only access to a user's goal and check-in history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All goals owned by `user_id`
    async fn get_goals_for_user(&self, user_id: Uuid) -> AppResult<Vec<Goal>>;

    /// All check-ins owned by `user_id`
    async fn get_checkins_for_user(&self, user_id: Uuid) -> AppResult<Vec<Checkin>>;

    /// Check-ins owned by `user_id` dated in `[start, end)`
    async fn get_checkins_for_period(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Checkin>>;

    /// A single goal, `None` when it does not exist
    async fn get_goal_by_id(&self, goal_id: Uuid) -> AppResult<Option<Goal>>;

    /// Whether the user exists upstream
    async fn user_exists(&self, user_id: Uuid) -> AppResult<bool>;
}
