// ABOUTME: Core types and constants for the MetaFlow behavioral analytics engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

#![deny(unsafe_code)]

//! # MetaFlow Core
//!
//! Foundation crate providing shared types for the MetaFlow insights engine.
//! It changes infrequently so the algorithm crate and the service crate can
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **models**: Goals, check-ins, users and their enumerations
//! - **constants**: Score ranges and defaults shared across crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (Goal, Checkin, `GoalCategory`, ...)
pub mod models;

/// Shared constants organized by domain
pub mod constants;
