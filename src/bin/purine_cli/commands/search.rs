// ABOUTME: Catalog search command for purine-cli
// ABOUTME: Case-insensitive substring search ordered by the language's collation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use purine_tracker::catalog::search;
use purine_tracker::locale::Language;
use std::path::Path;
use tracing::debug;

use crate::helpers::display::display_search_results;
use crate::helpers::loader::load_catalog;
use crate::OutputFormat;

pub fn run(
    catalog_path: &Path,
    query: &str,
    language: Language,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let matches = search(&catalog, query, language).map_err(|err| anyhow!("{err}"))?;
    debug!(query, matches = matches.len(), "Search complete");
    display_search_results(&matches, format)
}
