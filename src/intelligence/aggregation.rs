// ABOUTME: Nutrient and water aggregation over windows and weekday slots
// ABOUTME: Sums item nutrient values weighted by serving count, and fixed serving volumes for water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::bucketing::{week_first_day, week_window, weekday_slot, TimeWindow, WeekStart};
use chrono::{NaiveDate, TimeZone};
use purine_core::constants::calendar::DAYS_PER_WEEK;
use purine_core::models::{ConsumptionEntry, Nutrient, NutrientTotals, WaterEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sum of `item value x count` for every entry
#[must_use]
pub fn aggregate<'a, I>(entries: I) -> NutrientTotals
where
    I: IntoIterator<Item = &'a ConsumptionEntry>,
{
    entries.into_iter().map(ConsumptionEntry::totals).sum()
}

/// Sum of `aggregate` restricted to `window`
#[must_use]
pub fn aggregate_window(entries: &[ConsumptionEntry], window: TimeWindow) -> NutrientTotals {
    aggregate(
        entries
            .iter()
            .filter(|entry| window.contains(entry.timestamp_ms)),
    )
}

/// Per-weekday totals for one calendar week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayTotals {
    /// Convention used to assign slots
    pub week_start: WeekStart,
    /// Calendar date of slot 0
    pub first_day: NaiveDate,
    /// Window the totals were restricted to
    pub window: TimeWindow,
    /// Totals per weekday slot
    pub slots: [NutrientTotals; DAYS_PER_WEEK],
}

impl WeekdayTotals {
    /// Sum across all slots
    #[must_use]
    pub fn total(&self) -> NutrientTotals {
        self.slots.iter().copied().sum()
    }

    /// One nutrient across the week, one value per slot
    #[must_use]
    pub fn series(&self, nutrient: Nutrient) -> [f64; DAYS_PER_WEEK] {
        self.slots.map(|totals| totals.get(nutrient))
    }
}

/// Totals per weekday slot for the week containing `date`
///
/// Only entries inside the week window are counted, so the slots always sum
/// to `aggregate_window` over that window.
#[must_use]
pub fn aggregate_per_weekday<Tz: TimeZone>(
    entries: &[ConsumptionEntry],
    date: NaiveDate,
    week_start: WeekStart,
    tz: &Tz,
) -> WeekdayTotals {
    let window = week_window(date, week_start, tz);
    let mut slots = [NutrientTotals::default(); DAYS_PER_WEEK];

    for entry in entries
        .iter()
        .filter(|entry| window.contains(entry.timestamp_ms))
    {
        if let Some(slot) = weekday_slot(entry.timestamp_ms, week_start, tz) {
            slots[slot] += entry.totals();
        }
    }

    debug!(%date, %week_start, "Aggregated weekday totals");
    WeekdayTotals {
        week_start,
        first_day: week_first_day(date, week_start),
        window,
        slots,
    }
}

/// Total water volume (ml) of entries inside `window`
#[must_use]
pub fn aggregate_water(water: &[WaterEntry], window: TimeWindow) -> u64 {
    water
        .iter()
        .filter(|entry| window.contains(entry.timestamp_ms))
        .map(|entry| u64::from(entry.serving.volume_ml()))
        .sum()
}
