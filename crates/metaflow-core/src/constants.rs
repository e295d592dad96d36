// ABOUTME: Constants shared by the models, the algorithms and the service layer
// ABOUTME: Score ranges, progress bounds and neutral defaults for empty histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Check-in score scales
pub mod scores {
    /// Lowest mood/productivity score a check-in can carry
    pub const MIN_SCORE: u8 = 1;
    /// Highest mood/productivity score a check-in can carry
    pub const MAX_SCORE: u8 = 10;
    /// Neutral score used when a user has no check-ins
    pub const NEUTRAL_SCORE: f64 = 5.0;
    /// Maximum focus minutes in a single day
    pub const MAX_FOCUS_MINUTES: u32 = 1440;
}

/// Goal progress cap
pub mod progress {
    /// Progress of a finished goal
    pub const MAX_PROGRESS: u8 = 100;
}

/// Time conversions
pub mod time {
    /// Seconds in a day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Goal duration defaults
pub mod durations {
    /// Mean goal duration assumed when no goal was ever completed
    pub const DEFAULT_GOAL_DURATION_DAYS: f64 = 30.0;
    /// Floor applied to the mean completed-goal duration
    pub const MIN_GOAL_DURATION_DAYS: f64 = 1.0;
}
