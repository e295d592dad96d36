// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports synthetic history generation and common service fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::cast_possible_wrap
)]

pub mod synthetic_data;

use chrono::{DateTime, TimeZone, Utc};
use metaflow_insights::intelligence::IntelligenceConfig;
use metaflow_insights::services::InsightsService;
use metaflow_insights::storage::{HistorySnapshot, InMemoryHistoryStore};
use std::sync::Arc;

/// Fixed evaluation instant so results do not depend on the wall clock
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

/// Service over a store holding `snapshot`, using default configuration
pub fn service_with(snapshot: HistorySnapshot) -> InsightsService {
    let store = InMemoryHistoryStore::from_snapshot(snapshot);
    InsightsService::with_config(Arc::new(store), IntelligenceConfig::default())
}
