// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Defines error variants for invalid ranges and parse failures plus their AppError mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! Configuration error types for intelligence module validation.

use metaflow_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are not ordered as required (e.g., medium >= high)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::InvalidRange(_) | ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, format!("intelligence configuration rejected: {error}")).with_source(error)
    }
}
