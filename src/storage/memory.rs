// ABOUTME: In-memory HistoryStore backed by concurrent maps
// ABOUTME: Loads users, goals and check-ins from a serde JSON snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use super::HistoryStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use metaflow_core::errors::{AppError, AppResult};
use metaflow_core::models::{Checkin, Goal, UserRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Serializable dump of a user population's history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Known users
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// Goals of any user
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Check-ins of any user
    #[serde(default)]
    pub checkins: Vec<Checkin>,
}

/// Thread-safe in-memory history store
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    users: DashMap<Uuid, UserRecord>,
    goals: DashMap<Uuid, Goal>,
    checkins: DashMap<Uuid, Vec<Checkin>>,
}

impl InMemoryHistoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: HistorySnapshot) -> Self {
        let store = Self::new();
        for user in snapshot.users {
            store.insert_user(user);
        }
        for goal in snapshot.goals {
            store.insert_goal(goal);
        }
        for checkin in snapshot.checkins {
            store.insert_checkin(checkin);
        }
        store
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read and
    /// `SerializationError` when it is not a valid snapshot
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("failed to read history snapshot {}", path.display()))
                .with_source(e)
        })?;
        let snapshot: HistorySnapshot = serde_json::from_str(&raw)?;
        debug!(
            users = snapshot.users.len(),
            goals = snapshot.goals.len(),
            checkins = snapshot.checkins.len(),
            "Loaded history snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Add or replace a user
    pub fn insert_user(&self, user: UserRecord) {
        self.users.insert(user.id, user);
    }

    /// Add or replace a goal
    pub fn insert_goal(&self, goal: Goal) {
        self.goals.insert(goal.id, goal);
    }

    /// Append a check-in to its owner's history
    pub fn insert_checkin(&self, checkin: Checkin) {
        self.checkins.entry(checkin.user_id).or_default().push(checkin);
    }

    /// Copy of the current contents
    #[must_use]
    pub fn snapshot(&self) -> HistorySnapshot {
        let mut snapshot = HistorySnapshot {
            users: self.users.iter().map(|e| e.value().clone()).collect(),
            goals: self.goals.iter().map(|e| e.value().clone()).collect(),
            checkins: self
                .checkins
                .iter()
                .flat_map(|e| e.value().clone())
                .collect(),
        };
        snapshot.users.sort_by_key(|u| u.created_at);
        snapshot.goals.sort_by_key(|g| g.created_at);
        snapshot.checkins.sort_by_key(|c| c.date);
        snapshot
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn get_goals_for_user(&self, user_id: Uuid) -> AppResult<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect();
        goals.sort_by_key(|g| (g.created_at, g.id));
        Ok(goals)
    }

    async fn get_checkins_for_user(&self, user_id: Uuid) -> AppResult<Vec<Checkin>> {
        let mut checkins = self
            .checkins
            .get(&user_id)
            .map(|e| e.value().clone())
            .unwrap_or_default();
        checkins.sort_by_key(|c| (c.date, c.id));
        Ok(checkins)
    }

    async fn get_checkins_for_period(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Checkin>> {
        if start > end {
            return Err(AppError::invalid_input("period start is after its end"));
        }
        let mut checkins = self.get_checkins_for_user(user_id).await?;
        checkins.retain(|c| c.date >= start && c.date < end);
        Ok(checkins)
    }

    async fn get_goal_by_id(&self, goal_id: Uuid) -> AppResult<Option<Goal>> {
        Ok(self.goals.get(&goal_id).map(|e| e.value().clone()))
    }

    async fn user_exists(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.users.contains_key(&user_id))
    }
}
