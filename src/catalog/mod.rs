// ABOUTME: Meal catalog operations: draft resolution, custom meal creation, and search
// ABOUTME: Converts catalog references and inline meals into uniform consumption entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Synthetic ids for custom meals
pub mod ids;
/// Draft resolution and batch merging
pub mod merge;
/// Name search
pub mod search;

pub use ids::SyntheticIds;
pub use merge::{
    build_custom_item, merge_batch, resolve_entry, BatchOutcome, MergedBatch, Resolution,
};
pub use search::search;
