// ABOUTME: Resolves draft entries against the meal catalog and synthesizes custom meals
// ABOUTME: Batches are validated as a whole; unknown catalog ids are skipped, not fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Merge
//!
//! Drafts arrive from the entry workflow as either a reference to a catalog
//! item or an inline custom meal. Resolution turns both into the same
//! `ConsumptionEntry` shape so aggregation never sees the difference.
//!
//! Batch semantics:
//! - any validation failure rejects the whole batch and allocates no ids
//! - drafts referencing an unknown catalog id are skipped and reported
//! - a batch with nothing left to merge is a `NoOp`

use super::ids::SyntheticIds;
use purine_core::errors::{MergeError, ValidationError};
use purine_core::locale::Language;
use purine_core::models::{
    Catalog, CatalogItem, ConsumptionEntry, CustomItemDraft, DraftEntry, DraftItem, MealId,
    ServingCount, StoredMealRecord,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Result of resolving one draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Draft referenced an existing catalog item
    Catalog {
        /// Committed entry
        entry: ConsumptionEntry,
    },
    /// Draft created a new custom item that the catalog provider must persist
    Custom {
        /// New catalog item with a synthetic id
        item: CatalogItem,
        /// Committed entry referencing the new item
        entry: ConsumptionEntry,
    },
}

impl Resolution {
    /// Committed entry
    #[must_use]
    pub const fn entry(&self) -> &ConsumptionEntry {
        match self {
            Self::Catalog { entry } | Self::Custom { entry, .. } => entry,
        }
    }
}

/// Resolve one draft entry
///
/// # Errors
///
/// Returns `MergeError::Validation` for a non-positive count, a missing
/// timestamp, or an incomplete custom meal, and `MergeError::UnknownItem` when
/// a catalog reference has no match
pub fn resolve_entry(
    draft: &DraftEntry,
    catalog: &Catalog,
    ids: &SyntheticIds,
    language: Language,
) -> Result<Resolution, MergeError> {
    let (count, timestamp_ms) = validate_commit_fields(draft)?;

    match &draft.item {
        DraftItem::CatalogRef { id } => {
            let item = catalog.find(*id).ok_or(MergeError::UnknownItem(*id))?;
            Ok(Resolution::Catalog {
                entry: ConsumptionEntry::new(item.clone(), count, timestamp_ms),
            })
        }
        DraftItem::Custom(custom) => {
            let item = build_custom_item(custom, ids, language)?;
            let entry = ConsumptionEntry::new(item.clone(), count, timestamp_ms);
            Ok(Resolution::Custom { item, entry })
        }
    }
}

/// Build a catalog item from a custom meal draft
///
/// The draft is validated before an id is taken, so a rejected draft leaves
/// the id sequence untouched.
///
/// # Errors
///
/// Returns the draft's validation error
pub fn build_custom_item(
    draft: &CustomItemDraft,
    ids: &SyntheticIds,
    language: Language,
) -> Result<CatalogItem, ValidationError> {
    draft.validate()?;

    let name = draft
        .name(language)
        .ok_or(ValidationError::MissingName { language })?;
    let purine_mg = required(draft.purine_mg, "purine_mg")?;
    let sugar_g = required(draft.sugar_g, "sugar_g")?;
    let kcal = required(draft.kcal, "kcal")?;
    let quantity_g = required(draft.quantity_g, "quantity_g")?;

    let item = CatalogItem {
        id: ids.next_id(),
        name: name.to_owned(),
        purine_mg,
        sugar_g,
        kcal,
        quantity_g,
        category: language.custom_category_label().to_owned(),
    };
    debug!(id = %item.id, name = %item.name, "Created custom meal");
    Ok(item)
}

/// Entries ready to append, plus the custom items they introduced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedBatch {
    /// Resolved entries in draft order
    pub entries: Vec<ConsumptionEntry>,
    /// Custom items created by this batch
    pub custom_items: Vec<CatalogItem>,
    /// Catalog ids that could not be resolved
    pub skipped: Vec<MealId>,
}

impl MergedBatch {
    /// Persisted shape of the merged entries
    #[must_use]
    pub fn records(&self) -> Vec<StoredMealRecord> {
        self.entries.iter().map(ConsumptionEntry::to_record).collect()
    }

    /// Catalog extended with the batch's custom items
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateItemId` if a custom id is already in the catalog
    pub fn extend_catalog(&self, catalog: &Catalog) -> Result<Catalog, ValidationError> {
        self.custom_items
            .iter()
            .try_fold(catalog.clone(), |extended, item| {
                extended.with_custom_item(item.clone())
            })
    }
}

/// Outcome of merging a batch of drafts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// At least one draft resolved
    Merged(MergedBatch),
    /// Nothing to append
    NoOp {
        /// Catalog ids that could not be resolved
        skipped: Vec<MealId>,
    },
}

/// Merge a batch of drafts
///
/// # Errors
///
/// Returns the first `ValidationError` found in any draft; no entry from the
/// batch is merged in that case
pub fn merge_batch(
    drafts: &[DraftEntry],
    catalog: &Catalog,
    ids: &SyntheticIds,
    language: Language,
) -> Result<BatchOutcome, ValidationError> {
    for draft in drafts {
        validate_draft(draft)?;
    }

    let mut batch = MergedBatch::default();
    for draft in drafts {
        match resolve_entry(draft, catalog, ids, language) {
            Ok(Resolution::Catalog { entry }) => batch.entries.push(entry),
            Ok(Resolution::Custom { item, entry }) => {
                batch.custom_items.push(item);
                batch.entries.push(entry);
            }
            Err(MergeError::UnknownItem(id)) => {
                warn!(%id, "Skipping draft for unknown catalog item");
                batch.skipped.push(id);
            }
            Err(MergeError::Validation(err)) => return Err(err),
        }
    }

    if batch.entries.is_empty() {
        info!(skipped = batch.skipped.len(), "Batch had nothing to merge");
        return Ok(BatchOutcome::NoOp {
            skipped: batch.skipped,
        });
    }

    info!(
        entries = batch.entries.len(),
        custom_items = batch.custom_items.len(),
        skipped = batch.skipped.len(),
        "Merged batch"
    );
    Ok(BatchOutcome::Merged(batch))
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn validate_draft(draft: &DraftEntry) -> Result<(), ValidationError> {
    validate_commit_fields(draft)?;
    if let DraftItem::Custom(custom) = &draft.item {
        custom.validate()?;
    }
    Ok(())
}

fn validate_commit_fields(draft: &DraftEntry) -> Result<(ServingCount, i64), ValidationError> {
    let count = ServingCount::new(draft.count)?;
    let timestamp_ms = draft.timestamp_ms.ok_or(ValidationError::MissingTimestamp)?;
    Ok((count, timestamp_ms))
}
