// ABOUTME: Minimal user identity record
// ABOUTME: Only existence matters to the engine; profile data stays upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User known to the storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Registration instant
    pub created_at: DateTime<Utc>,
    /// Whether the account is active
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl UserRecord {
    /// Create an active user registered now
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
            active: true,
        }
    }
}
