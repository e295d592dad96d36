// ABOUTME: Main library entry point for the MetaFlow insights engine
// ABOUTME: Wires history storage to recommendation, pattern, forecast and statistics analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

#![deny(unsafe_code)]

//! # MetaFlow Insights
//!
//! Turns a user's goal and daily check-in history into:
//!
//! - a ranked list of suggested next-goal categories,
//! - descriptive behavioral patterns,
//! - a forecast of whether an in-progress goal will finish on time.
//!
//! ## Architecture
//!
//! - **Storage**: the read-only [`storage::HistoryStore`] interface to the
//!   system of record, plus an in-memory implementation
//! - **Services**: [`services::InsightsService`] fetches history per request
//!   and runs the algorithms from `metaflow_intelligence`
//! - **Errors**: named failures (`UserNotFound`, `GoalNotFound`, ...) from `metaflow_core`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use metaflow_insights::services::InsightsService;
//! use metaflow_insights::storage::InMemoryHistoryStore;
//! use metaflow_insights::errors::AppResult;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemoryHistoryStore::from_json_file("history.json").await?;
//!     let service = InsightsService::new(Arc::new(store));
//!
//!     for item in service.recommend(Uuid::new_v4()).await? {
//!         println!("{} ({:.2})", item.category, item.confidence);
//!     }
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from `metaflow_core`
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Request-scoped analytics services
pub mod services;

/// Read-only history storage interface and in-memory implementation
pub mod storage;

pub use metaflow_core::models;
pub use metaflow_intelligence as intelligence;
