// ABOUTME: Configuration module for metaflow-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

/// Intelligence module configuration (rules, classifier, patterns, forecasts, statistics)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
