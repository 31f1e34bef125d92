// ABOUTME: Intake report command for purine-cli
// ABOUTME: Loads profile, catalog, and history files and prints daily and weekly risk tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use purine_tracker::config::EngineConfig;
use purine_tracker::intelligence::build_report;
use std::path::PathBuf;
use tracing::info;

use crate::helpers::display::display_report;
use crate::helpers::loader::{load_catalog, load_history, load_profile};
use crate::OutputFormat;

/// Input files for a report
pub struct ReportPaths {
    pub profile: PathBuf,
    pub catalog: PathBuf,
    /// Stored meal records
    pub history: PathBuf,
    /// Water entries, if tracked
    pub water: Option<PathBuf>,
}

/// Build and print the intake report for `date`, or today in `tz`
pub fn run(
    paths: &ReportPaths,
    date: Option<NaiveDate>,
    tz: &Tz,
    config: &EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().with_timezone(tz).date_naive());
    info!(%date, %tz, week_start = %config.week_start, "Building intake report");

    let profile = load_profile(&paths.profile)?;
    let catalog = load_catalog(&paths.catalog)?;
    let history = load_history(&catalog, &paths.history, paths.water.as_deref())?;

    let report = build_report(&profile, &history, date, config, tz)
        .map_err(|err| anyhow!("Failed to build report: {err}"))?;

    display_report(&report, format)
}
