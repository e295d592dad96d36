// ABOUTME: MetaFlow Insights CLI - runs the analytics engine over a JSON history snapshot
// ABOUTME: Prints recommendations, patterns, forecasts and statistics as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MetaFlow Insights
//!
//! Usage:
//! ```bash
//! # Ranked next-goal recommendations
//! metaflow-insights --history history.json recommend --user 6f1c...
//!
//! # Behavioral patterns as of a fixed instant
//! metaflow-insights --history history.json --at 2025-03-01T00:00:00Z patterns --user 6f1c...
//!
//! # Forecast for one goal
//! metaflow-insights --history history.json forecast --goal 0b7e...
//!
//! # Monthly summary
//! metaflow-insights --history history.json monthly --user 6f1c... --year 2025 --month 2
//! ```

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use metaflow_insights::errors::AppError;
use metaflow_insights::intelligence::{CheckinStatistics, IntelligenceConfig, UserStatistics};
use metaflow_insights::logging::LoggingConfig;
use metaflow_insights::services::InsightsService;
use metaflow_insights::storage::InMemoryHistoryStore;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "metaflow-insights",
    about = "MetaFlow goal recommendations and behavioral analytics",
    long_about = "Runs the MetaFlow insights engine over a JSON history snapshot of users, goals and daily check-ins."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// History snapshot (JSON with users, goals and checkins)
    #[arg(long, global = true, env = "METAFLOW_HISTORY", default_value = "history.json")]
    history: PathBuf,

    /// Evaluate as of this RFC 3339 instant instead of now
    #[arg(long, global = true)]
    at: Option<DateTime<Utc>>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ranked next-goal category recommendations
    Recommend {
        /// User ID
        #[arg(long)]
        user: Uuid,
    },
    /// Descriptive behavioral patterns
    Patterns {
        /// User ID
        #[arg(long)]
        user: Uuid,
    },
    /// On-time completion forecast for a goal
    Forecast {
        /// Goal ID
        #[arg(long)]
        goal: Uuid,
    },
    /// Engagement and check-in statistics
    Stats {
        /// User ID
        #[arg(long)]
        user: Uuid,
    },
    /// Calendar-month summary
    Monthly {
        /// User ID
        #[arg(long)]
        user: Uuid,
        /// Calendar year
        #[arg(long)]
        year: i32,
        /// Calendar month (1-12)
        #[arg(long)]
        month: u32,
    },
}

#[derive(Serialize)]
struct StatsOutput {
    user: UserStatistics,
    checkins: CheckinStatistics,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    // Invalid METAFLOW_* overrides abort here instead of falling back to defaults
    IntelligenceConfig::load().map_err(AppError::from)?;

    let store = InMemoryHistoryStore::from_json_file(&cli.history).await?;
    info!("Loaded history from {}", cli.history.display());

    let service = InsightsService::new(Arc::new(store));
    if !service.warm_up() {
        warn!("Goal-category classifier unavailable, recommendations use rules only");
    }
    let now = cli.at.unwrap_or_else(Utc::now);

    match cli.command {
        Command::Recommend { user } => print_json(&service.recommend_at(user, now).await?)?,
        Command::Patterns { user } => {
            print_json(&service.analyze_patterns_at(user, now).await?)?;
        }
        Command::Forecast { goal } => {
            print_json(&service.forecast_progress_at(goal, now).await?)?;
        }
        Command::Stats { user } => {
            let output = StatsOutput {
                user: service.user_statistics_at(user, now).await?,
                checkins: service.checkin_statistics(user).await?,
            };
            print_json(&output)?;
        }
        Command::Monthly { user, year, month } => {
            print_json(&service.monthly_summary(user, year, month).await?)?;
        }
    }

    Ok(())
}
