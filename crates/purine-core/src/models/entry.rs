// ABOUTME: Consumption entry models for committed history and the drafting workflow
// ABOUTME: Drafts reference a catalog item or carry an inline custom meal description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CatalogItem, MealId, Nutrient, NutrientTotals, Timestamped};
use crate::errors::ValidationError;
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serving multiplier, always finite and greater than zero
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ServingCount(f64);

impl ServingCount {
    /// Validate a raw serving count
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveCount` if `count` is not a finite positive number
    pub fn new(count: f64) -> Result<Self, ValidationError> {
        if count.is_finite() && count > 0.0 {
            Ok(Self(count))
        } else {
            Err(ValidationError::NonPositiveCount(count))
        }
    }

    /// Multiplier value
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ServingCount {
    type Error = ValidationError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<ServingCount> for f64 {
    fn from(count: ServingCount) -> Self {
        count.0
    }
}

/// Committed meal entry with its catalog item resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    /// Resolved catalog item
    pub item: CatalogItem,
    /// Serving multiplier
    pub count: ServingCount,
    /// Instant of consumption in ms since the Unix epoch
    pub timestamp_ms: i64,
}

impl ConsumptionEntry {
    /// Create a committed entry
    #[must_use]
    pub const fn new(item: CatalogItem, count: ServingCount, timestamp_ms: i64) -> Self {
        Self {
            item,
            count,
            timestamp_ms,
        }
    }

    /// Identifier of the consumed item
    #[must_use]
    pub const fn item_id(&self) -> MealId {
        self.item.id
    }

    /// Amount of `nutrient` this entry contributes (`item value * count`)
    #[must_use]
    pub fn contribution(&self, nutrient: Nutrient) -> f64 {
        self.item.nutrient(nutrient) * self.count.get()
    }

    /// Contribution of this entry to every nutrient
    #[must_use]
    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            purine_mg: self.contribution(Nutrient::Purine),
            sugar_g: self.contribution(Nutrient::Sugar),
            kcal: self.contribution(Nutrient::Kcal),
        }
    }

    /// True when the entry carries exactly this (id, timestamp) key
    #[must_use]
    pub fn matches_key(&self, id: MealId, timestamp_ms: i64) -> bool {
        self.item.id == id && self.timestamp_ms == timestamp_ms
    }

    /// Persisted shape of this entry
    #[must_use]
    pub fn to_record(&self) -> StoredMealRecord {
        StoredMealRecord {
            id: self.item.id,
            count: self.count.get(),
            timestamp: self.timestamp_ms,
        }
    }
}

impl Timestamped for ConsumptionEntry {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}

/// What a draft entry refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DraftItem {
    /// Existing catalog item
    CatalogRef {
        /// Identifier to resolve against the catalog
        id: MealId,
    },
    /// Inline user-created meal
    Custom(CustomItemDraft),
}

/// Inline custom meal description as submitted by the user
///
/// Every field is optional here so that missing input can be reported
/// precisely instead of being coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomItemDraft {
    /// Display name per language
    #[serde(default)]
    pub names: BTreeMap<Language, String>,
    /// Purine per serving (mg)
    #[serde(default)]
    pub purine_mg: Option<f64>,
    /// Sugar per serving (g)
    #[serde(default)]
    pub sugar_g: Option<f64>,
    /// Energy per serving (kcal)
    #[serde(default)]
    pub kcal: Option<f64>,
    /// Reference serving quantity (g)
    #[serde(default)]
    pub quantity_g: Option<f64>,
}

impl CustomItemDraft {
    /// Check names for every supported language and every nutrient amount
    ///
    /// # Errors
    ///
    /// Returns the first problem found: `MissingName`, `BlankName`,
    /// `MissingField`, or `InvalidAmount`
    pub fn validate(&self) -> Result<(), ValidationError> {
        for language in Language::ALL {
            match self.names.get(&language) {
                None => return Err(ValidationError::MissingName { language }),
                Some(name) if name.trim().is_empty() => {
                    return Err(ValidationError::BlankName { language })
                }
                Some(_) => {}
            }
        }
        for (field, amount) in self.amounts() {
            let value = amount.ok_or(ValidationError::MissingField { field })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidAmount { field, value });
            }
        }
        Ok(())
    }

    /// Trimmed name for `language`, if one was supplied
    #[must_use]
    pub fn name(&self, language: Language) -> Option<&str> {
        self.names.get(&language).map(|name| name.trim())
    }

    const fn amounts(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("purine_mg", self.purine_mg),
            ("sugar_g", self.sugar_g),
            ("kcal", self.kcal),
            ("quantity_g", self.quantity_g),
        ]
    }
}

/// Entry being composed before a batch commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    /// Referenced or inline item
    pub item: DraftItem,
    /// Raw serving multiplier, validated at commit
    pub count: f64,
    /// Consumption instant; may be absent only while drafting
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
}

impl DraftEntry {
    /// Draft referencing an existing catalog item
    #[must_use]
    pub const fn catalog(id: MealId, count: f64, timestamp_ms: Option<i64>) -> Self {
        Self {
            item: DraftItem::CatalogRef { id },
            count,
            timestamp_ms,
        }
    }

    /// Draft carrying an inline custom meal
    #[must_use]
    pub const fn custom(draft: CustomItemDraft, count: f64, timestamp_ms: Option<i64>) -> Self {
        Self {
            item: DraftItem::Custom(draft),
            count,
            timestamp_ms,
        }
    }
}

/// Persisted meal record as exchanged with the history provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredMealRecord {
    /// Catalog item identifier
    pub id: MealId,
    /// Serving multiplier
    pub count: f64,
    /// Instant of consumption in ms since the Unix epoch
    pub timestamp: i64,
}
