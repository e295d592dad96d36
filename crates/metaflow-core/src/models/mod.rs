// ABOUTME: Core data models for goals, daily check-ins and users
// ABOUTME: Re-exports Goal, Checkin, UserRecord and the category/status enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! # Data Models
//!
//! Well-formed domain records as returned by the storage collaborator. The
//! engine only reads them; it never persists anything itself.
//!
//! ## Core Models
//!
//! - `Goal`: a user objective with a category, status, progress and deadline
//! - `Checkin`: a daily mood/productivity record
//! - `UserRecord`: minimal user identity used by the history snapshot
//! - `GoalCategory` / `GoalStatus`: fixed enumerations

mod category;
mod checkin;
mod goal;
mod user;

pub use category::{GoalCategory, GoalStatus};
pub use checkin::Checkin;
pub use goal::Goal;
pub use user::UserRecord;
