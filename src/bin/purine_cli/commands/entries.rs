// ABOUTME: History editing commands for purine-cli
// ABOUTME: Merges draft batches, removes entries by key, and records water servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use purine_tracker::catalog::{merge_batch, BatchOutcome, SyntheticIds};
use purine_tracker::errors::EngineError;
use purine_tracker::history::History;
use purine_tracker::locale::Language;
use purine_tracker::models::{DraftEntry, MealId, WaterServing};
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::display_batch_outcome;
use crate::helpers::loader::{load_catalog, load_history, load_water, read_json, write_json};

/// Merge a draft batch into the meal history
///
/// With `write`, custom meals are appended to the catalog file and the
/// merged history replaces the history file.
pub fn add(
    catalog_path: &Path,
    history_path: &Path,
    drafts_path: &Path,
    language: Language,
    write: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let mut history = load_history(&catalog, history_path, None)?;
    let drafts: Vec<DraftEntry> = read_json(drafts_path)?;

    let ids = SyntheticIds::from_clock();
    let outcome = merge_batch(&drafts, &catalog, &ids, language).map_err(|err| {
        let err = EngineError::from(err);
        anyhow!("Batch rejected ({}): {err}", err.code().description())
    })?;
    display_batch_outcome(&outcome);

    let BatchOutcome::Merged(batch) = outcome else {
        return Ok(());
    };
    if !write {
        warn!("Dry run; pass --write to save the merged batch");
        return Ok(());
    }

    if !batch.custom_items.is_empty() {
        let extended = batch
            .extend_catalog(&catalog)
            .map_err(|err| anyhow!("Failed to extend catalog: {err}"))?;
        write_json(catalog_path, &extended)?;
        info!(
            added = batch.custom_items.len(),
            path = %catalog_path.display(),
            "Catalog updated"
        );
    }

    history.append_batch(batch);
    write_json(history_path, &history.to_records())?;
    info!(entries = history.meals().len(), path = %history_path.display(), "History saved");
    Ok(())
}

/// Remove every entry with the given (id, timestamp) pair
pub fn remove(
    catalog_path: &Path,
    history_path: &Path,
    id: i64,
    timestamp_ms: i64,
    write: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let mut history = load_history(&catalog, history_path, None)?;

    let id = MealId::new(id);
    if !history.remove_entry(id, timestamp_ms) {
        bail!("No entry with id {id} at timestamp {timestamp_ms}");
    }
    println!("Removed entry {id} at {timestamp_ms}");

    if write {
        write_json(history_path, &history.to_records())?;
        info!(entries = history.meals().len(), path = %history_path.display(), "History saved");
    } else {
        warn!("Dry run; pass --write to save the change");
    }
    Ok(())
}

/// Append one water serving to the water history file
pub fn record_water(
    water_path: &Path,
    serving: WaterServing,
    timestamp_ms: Option<i64>,
) -> Result<()> {
    let timestamp_ms = timestamp_ms.unwrap_or_else(|| Utc::now().timestamp_millis());
    let mut history = History::new(Vec::new(), load_water(water_path)?);
    history.record_water(serving, timestamp_ms);
    write_json(water_path, &history.water())?;

    println!(
        "Recorded {} ml of water ({} servings on file)",
        serving.volume_ml(),
        history.water().len()
    );
    Ok(())
}
