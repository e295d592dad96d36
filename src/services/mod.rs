// ABOUTME: Service layer composing storage access with the intelligence algorithms
// ABOUTME: Exposes the InsightsService consumed by request handlers and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

/// Recommendation, pattern, forecast and statistics orchestration
pub mod insights;

pub use insights::InsightsService;
