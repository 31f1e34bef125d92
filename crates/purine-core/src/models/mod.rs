// ABOUTME: Core data models for intake tracking
// ABOUTME: Re-exports profile, catalog, entry, water, limit, and risk types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models shared by the engine and its collaborators.

mod catalog;
mod entry;
mod limits;
mod profile;
mod risk;
mod water;

pub use catalog::{Catalog, CatalogItem, MealCategory, MealId};
pub use entry::{
    ConsumptionEntry, CustomItemDraft, DraftEntry, DraftItem, ServingCount, StoredMealRecord,
};
pub use limits::{LimitOverrides, LimitSet, Nutrient, NutrientTotals};
pub use profile::{BodyWeightKg, Profile, ProfileUpdate, Sex};
pub use risk::{Period, RiskTier};
pub use water::{WaterEntry, WaterServing};

/// Anything stamped with an instant in milliseconds since the Unix epoch
pub trait Timestamped {
    /// Instant of the event in milliseconds since the Unix epoch
    fn timestamp_ms(&self) -> i64;
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp_ms(&self) -> i64 {
        (**self).timestamp_ms()
    }
}
