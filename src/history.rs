// ABOUTME: Committed meal and water history with batch append and keyed removal
// ABOUTME: Hydrates stored records against the catalog, skipping ids the catalog no longer has
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::MergedBatch;
use purine_core::models::{
    Catalog, ConsumptionEntry, MealId, ServingCount, StoredMealRecord, WaterEntry, WaterServing,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Caller-owned meal and water history
///
/// Stored records that could not be resolved against the catalog are kept
/// verbatim so that rewriting the history never loses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    meals: Vec<ConsumptionEntry>,
    water: Vec<WaterEntry>,
    #[serde(default)]
    unresolved: Vec<StoredMealRecord>,
}

impl History {
    /// Create a history from committed entries
    #[must_use]
    pub const fn new(meals: Vec<ConsumptionEntry>, water: Vec<WaterEntry>) -> Self {
        Self {
            meals,
            water,
            unresolved: Vec::new(),
        }
    }

    /// Carry stored records the catalog could not resolve
    #[must_use]
    pub fn with_unresolved(mut self, records: Vec<StoredMealRecord>) -> Self {
        self.unresolved = records;
        self
    }

    /// Committed meal entries
    #[must_use]
    pub fn meals(&self) -> &[ConsumptionEntry] {
        &self.meals
    }

    /// Committed water entries
    #[must_use]
    pub fn water(&self) -> &[WaterEntry] {
        &self.water
    }

    /// Stored records kept as-is because they did not hydrate
    #[must_use]
    pub fn unresolved(&self) -> &[StoredMealRecord] {
        &self.unresolved
    }

    /// Append every entry of a merged batch
    pub fn append_batch(&mut self, batch: MergedBatch) {
        debug!(entries = batch.entries.len(), "Appending batch to history");
        self.meals.extend(batch.entries);
    }

    /// Remove every meal entry with exactly this (id, timestamp) pair
    ///
    /// Unresolved records with the same key are removed too. Returns `false`,
    /// leaving the history unchanged, when nothing matches.
    pub fn remove_entry(&mut self, id: MealId, timestamp_ms: i64) -> bool {
        let before = self.meals.len() + self.unresolved.len();
        self.meals.retain(|entry| !entry.matches_key(id, timestamp_ms));
        self.unresolved
            .retain(|record| !(record.id == id && record.timestamp == timestamp_ms));
        let removed = before - self.meals.len() - self.unresolved.len();
        debug!(%id, timestamp_ms, removed, "Remove by key");
        removed > 0
    }

    /// Record one water serving
    pub fn record_water(&mut self, serving: WaterServing, timestamp_ms: i64) {
        self.water.push(WaterEntry::new(serving, timestamp_ms));
    }

    /// Persisted shape of the meal entries, followed by the unresolved records
    #[must_use]
    pub fn to_records(&self) -> Vec<StoredMealRecord> {
        self.meals
            .iter()
            .map(ConsumptionEntry::to_record)
            .chain(self.unresolved.iter().copied())
            .collect()
    }
}

/// Meal entries rebuilt from stored records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HydratedHistory {
    /// Entries whose item was found
    pub entries: Vec<ConsumptionEntry>,
    /// Records left out because their id is unknown or their count is invalid
    pub skipped: Vec<StoredMealRecord>,
}

impl HydratedHistory {
    /// Build a history that keeps the skipped records for persistence
    #[must_use]
    pub fn into_history(self, water: Vec<WaterEntry>) -> History {
        History::new(self.entries, water).with_unresolved(self.skipped)
    }
}

/// Rebuild meal entries from stored `{id, count, timestamp}` records
///
/// Records whose id is not in the catalog, or whose count is not positive,
/// are skipped and reported rather than failing the whole history.
#[must_use]
pub fn hydrate(records: &[StoredMealRecord], catalog: &Catalog) -> HydratedHistory {
    let mut hydrated = HydratedHistory::default();

    for record in records {
        let item = catalog.find(record.id);
        let count = ServingCount::new(record.count);
        match (item, count) {
            (Some(item), Ok(count)) => hydrated.entries.push(ConsumptionEntry::new(
                item.clone(),
                count,
                record.timestamp,
            )),
            (None, _) => {
                warn!(
                    id = %record.id,
                    timestamp = record.timestamp,
                    "Skipping record for unknown catalog item"
                );
                hydrated.skipped.push(*record);
            }
            (Some(_), Err(err)) => {
                warn!(
                    id = %record.id,
                    timestamp = record.timestamp,
                    error = %err,
                    "Skipping record with invalid count"
                );
                hydrated.skipped.push(*record);
            }
        }
    }

    hydrated
}
