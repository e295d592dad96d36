// ABOUTME: Statistical helpers shared by the feature extractor and pattern analyzer
// ABOUTME: Means, Pearson correlation, check-in consistency, and two-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
#![allow(clippy::cast_precision_loss)] // Safe: statistical calculations over small history counts

use chrono::{DateTime, NaiveDate, Utc};
use metaflow_core::constants::time::SECONDS_PER_DAY;
use metaflow_core::models::Checkin;
use std::collections::HashSet;

/// Numeric helpers with explicit defaults for degenerate inputs
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, `None` for an empty series
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Pearson correlation coefficient of two paired series
    ///
    /// Returns 0.0 when fewer than two pairs exist or either series has zero
    /// variance; otherwise the result is clamped to [-1, 1] to absorb
    /// floating-point overshoot.
    #[must_use]
    pub fn pearson_correlation(x_values: &[f64], y_values: &[f64]) -> f64 {
        let n = x_values.len().min(y_values.len());
        if n < 2 {
            return 0.0;
        }
        let (xs, ys) = (&x_values[..n], &y_values[..n]);

        let (Some(mean_x), Some(mean_y)) = (Self::mean(xs), Self::mean(ys)) else {
            return 0.0;
        };

        let mut covariance = 0.0;
        let mut variance_x = 0.0;
        let mut variance_y = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            covariance = dx.mul_add(dy, covariance);
            variance_x = dx.mul_add(dx, variance_x);
            variance_y = dy.mul_add(dy, variance_y);
        }

        let denominator = (variance_x * variance_y).sqrt();
        if denominator <= f64::EPSILON || !denominator.is_finite() {
            return 0.0;
        }

        (covariance / denominator).clamp(-1.0, 1.0)
    }

    /// Fraction of elapsed days with at least one check-in
    ///
    /// `distinct check-in days / max(1, days since the earliest check-in)`,
    /// measured in fractional days and clamped to [0, 1]. Zero without check-ins.
    #[must_use]
    pub fn checkin_consistency(checkins: &[Checkin], now: DateTime<Utc>) -> f64 {
        let Some(earliest) = checkins.iter().map(|c| c.date).min() else {
            return 0.0;
        };

        let distinct_days: HashSet<NaiveDate> = checkins.iter().map(Checkin::day).collect();
        let elapsed_days = (now - earliest).num_seconds() as f64 / SECONDS_PER_DAY;

        (distinct_days.len() as f64 / elapsed_days.max(1.0)).clamp(0.0, 1.0)
    }

    /// Round to two decimal places
    #[must_use]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Percentage of `part` in `total` rounded to two decimals, 0 when `total` is 0
    #[must_use]
    pub fn percentage(part: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        Self::round2(part as f64 / total as f64 * 100.0)
    }
}
