// ABOUTME: Error types surfaced by the insights service
// ABOUTME: Re-exports the unified error system from metaflow-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! # Unified Error Handling
//!
//! The error model lives in `metaflow_core::errors` so both workspace crates
//! share it. This module re-exports it under the crate root.

pub use metaflow_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
