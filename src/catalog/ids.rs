// ABOUTME: Synthetic identifiers for user-created meals
// ABOUTME: Strictly decreasing negative ids seeded from a creation timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use purine_core::models::MealId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of synthetic ids for custom meals
///
/// Every id is negative and strictly smaller than the previous one, so ids
/// never collide with positive catalog ids or with each other.
#[derive(Debug)]
pub struct SyntheticIds {
    next: AtomicI64,
}

impl SyntheticIds {
    /// Start from the negated seed (a zero seed starts at -1)
    #[must_use]
    pub fn seeded(seed: i64) -> Self {
        Self {
            next: AtomicI64::new(-seed.saturating_abs().max(1)),
        }
    }

    /// Seed from the current wall clock in milliseconds
    #[must_use]
    pub fn from_clock() -> Self {
        Self::seeded(Utc::now().timestamp_millis())
    }

    /// Take the next id
    pub fn next_id(&self) -> MealId {
        MealId::new(self.next.fetch_sub(1, Ordering::Relaxed))
    }
}
