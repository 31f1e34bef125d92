// ABOUTME: Purine CLI - command-line front end for the nutrition aggregation and risk engine
// ABOUTME: Reports intake against limits, searches the catalog, and edits JSON history files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Today's report in Istanbul time
//! purine-cli report --profile profile.json --catalog catalog.json --history history.json \
//!     --water water.json --tz Europe/Istanbul
//!
//! # Weekly chart starting on Sunday, as JSON
//! purine-cli report --profile profile.json --catalog catalog.json --history history.json \
//!     --date 2025-03-12 --week-start sunday --format json
//!
//! # Show the user's limits next to the recommended defaults
//! purine-cli limits --profile profile.json
//!
//! # Search the catalog with Turkish collation
//! purine-cli search --catalog catalog.json --query "ıspanak" --language tr
//!
//! # Merge a batch of drafts into the history file
//! purine-cli add --catalog catalog.json --history history.json --drafts drafts.json --write
//!
//! # Remove an entry by (id, timestamp)
//! purine-cli remove --catalog catalog.json --history history.json --id 7 --timestamp 1000 --write
//!
//! # Record a glass of water
//! purine-cli water --water water.json --serving glass
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use purine_tracker::config::EngineConfig;
use purine_tracker::intelligence::WeekStart;
use purine_tracker::locale::Language;
use purine_tracker::logging::LoggingConfig;
use purine_tracker::models::WaterServing;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "purine-cli",
    about = "Purine, sugar, calorie and water intake tracker",
    long_about = "Command-line front end for the nutrition engine: intake reports with risk tiers, catalog search, and history edits on JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Water serving size argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServingArg {
    /// 330 ml glass
    Glass,
    /// 500 ml bottle
    Bottle,
}

impl From<ServingArg> for WaterServing {
    fn from(arg: ServingArg) -> Self {
        match arg {
            ServingArg::Glass => Self::Small,
            ServingArg::Bottle => Self::Large,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print daily and weekly totals with risk tiers
    Report {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Catalog JSON file (list of categories)
        #[arg(long)]
        catalog: PathBuf,

        /// Meal history JSON file (list of {id, count, timestamp} records)
        #[arg(long)]
        history: PathBuf,

        /// Water history JSON file
        #[arg(long)]
        water: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD, defaults to today in --tz)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// IANA time zone for day and week boundaries
        #[arg(long, default_value = "UTC")]
        tz: Tz,

        /// First day of the week (overrides PURINE_WEEK_START)
        #[arg(long)]
        week_start: Option<WeekStart>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show resolved limits and recommended defaults
    Limits {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search catalog items by name
    Search {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Case-insensitive name fragment
        #[arg(long)]
        query: String,

        /// Language for case folding and ordering (tr or en)
        #[arg(long, default_value = "tr")]
        language: Language,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Merge a batch of draft entries into the meal history
    Add {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Meal history JSON file
        #[arg(long)]
        history: PathBuf,

        /// Draft entries JSON file
        #[arg(long)]
        drafts: PathBuf,

        /// Language of custom meal names and labels (tr or en)
        #[arg(long, default_value = "tr")]
        language: Language,

        /// Write the updated history and catalog back to their files
        #[arg(long)]
        write: bool,
    },

    /// Remove every meal entry with the given (id, timestamp) pair
    Remove {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Meal history JSON file
        #[arg(long)]
        history: PathBuf,

        /// Catalog item id
        #[arg(long, allow_hyphen_values = true)]
        id: i64,

        /// Entry timestamp (ms since epoch)
        #[arg(long)]
        timestamp: i64,

        /// Write the updated history back to its file
        #[arg(long)]
        write: bool,
    },

    /// Record one water serving
    Water {
        /// Water history JSON file (created if missing)
        #[arg(long)]
        water: PathBuf,

        /// Serving size
        #[arg(long, value_enum)]
        serving: ServingArg,

        /// Intake timestamp (ms since epoch, defaults to now)
        #[arg(long)]
        timestamp: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = EngineConfig::load()?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Report {
            profile,
            catalog,
            history,
            water,
            date,
            tz,
            week_start,
            format,
        } => {
            let config = EngineConfig {
                week_start: week_start.unwrap_or(config.week_start),
                ..config
            };
            let paths = commands::report::ReportPaths {
                profile,
                catalog,
                history,
                water,
            };
            commands::report::run(&paths, date, &tz, &config, format)?;
        }
        Command::Limits { profile, format } => {
            commands::limits::run(&profile, &config, format)?;
        }
        Command::Search {
            catalog,
            query,
            language,
            format,
        } => {
            commands::search::run(&catalog, &query, language, format)?;
        }
        Command::Add {
            catalog,
            history,
            drafts,
            language,
            write,
        } => {
            commands::entries::add(&catalog, &history, &drafts, language, write)?;
        }
        Command::Remove {
            catalog,
            history,
            id,
            timestamp,
            write,
        } => {
            commands::entries::remove(&catalog, &history, id, timestamp, write)?;
        }
        Command::Water {
            water,
            serving,
            timestamp,
        } => {
            commands::entries::record_water(&water, serving.into(), timestamp)?;
        }
    }

    Ok(())
}
