// ABOUTME: Integration tests for the in-memory history store and JSON snapshots
// ABOUTME: Covers file loading, ordering, period queries and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

mod helpers;

use chrono::Duration;
use helpers::fixed_now;
use helpers::synthetic_data::SyntheticHistoryBuilder;
use metaflow_insights::errors::ErrorCode;
use metaflow_insights::storage::{HistoryStore, InMemoryHistoryStore};
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn populated_builder() -> SyntheticHistoryBuilder {
    let mut builder = SyntheticHistoryBuilder::new(31, fixed_now());
    builder.daily_checkins(20, 1..=10, 1..=10).random_goals(5);
    builder
}

#[tokio::test]
async fn test_snapshot_file_round_trip() {
    let builder = populated_builder();
    let snapshot = builder.build();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    let store = InMemoryHistoryStore::from_json_file(&path).await.unwrap();
    assert!(store.user_exists(builder.user_id()).await.unwrap());
    assert_eq!(
        store.get_goals_for_user(builder.user_id()).await.unwrap().len(),
        5
    );
    assert_eq!(
        store
            .get_checkins_for_user(builder.user_id())
            .await
            .unwrap()
            .len(),
        20
    );

    let reloaded = store.snapshot();
    assert_eq!(reloaded.users, snapshot.users);
    assert_eq!(reloaded.checkins.len(), snapshot.checkins.len());
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = InMemoryHistoryStore::from_json_file(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"users\": [ { \"id\": 42 } ] }").unwrap();

    let err = InMemoryHistoryStore::from_json_file(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_checkins_come_back_in_date_order() {
    let mut builder = SyntheticHistoryBuilder::new(32, fixed_now());
    builder.checkin(1, 5, 5).checkin(9, 6, 6).checkin(4, 7, 7);
    let store = InMemoryHistoryStore::from_snapshot(builder.build());

    let checkins = store.get_checkins_for_user(builder.user_id()).await.unwrap();
    assert!(checkins.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[tokio::test]
async fn test_period_query_is_half_open() {
    let mut builder = SyntheticHistoryBuilder::new(33, fixed_now());
    builder.checkin(10, 5, 5).checkin(5, 6, 6).checkin(0, 7, 7);
    let store = InMemoryHistoryStore::from_snapshot(builder.build());

    let start = fixed_now() - Duration::days(10);
    let end = fixed_now();
    let checkins = store
        .get_checkins_for_period(builder.user_id(), start, end)
        .await
        .unwrap();
    assert_eq!(checkins.len(), 2);
    assert!(checkins.iter().all(|c| c.date >= start && c.date < end));
}

#[tokio::test]
async fn test_inverted_period_is_invalid_input() {
    let builder = populated_builder();
    let store = InMemoryHistoryStore::from_snapshot(builder.build());

    let err = store
        .get_checkins_for_period(builder.user_id(), fixed_now(), fixed_now() - Duration::days(1))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_lookups_for_unknown_ids() {
    let store = InMemoryHistoryStore::from_snapshot(populated_builder().build());
    let unknown = Uuid::new_v4();

    assert!(!store.user_exists(unknown).await.unwrap());
    assert!(store.get_goal_by_id(unknown).await.unwrap().is_none());
    assert!(store.get_goals_for_user(unknown).await.unwrap().is_empty());
    assert!(store.get_checkins_for_user(unknown).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_goal_lookup_by_id() {
    let builder = populated_builder();
    let expected = builder.goals()[2].clone();
    let store = InMemoryHistoryStore::from_snapshot(builder.build());

    let goal = store.get_goal_by_id(expected.id).await.unwrap();
    assert_eq!(goal, Some(expected));
}
