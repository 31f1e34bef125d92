// ABOUTME: Nutrition engine: limit resolution, temporal bucketing, aggregation, and risk tiers
// ABOUTME: Re-exports the engine operations used by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Control flow for one render: resolve limits once per profile, bucket the
//! history into day and week windows, aggregate each bucket, then classify the
//! totals. [`build_report`] packages the whole sequence.

/// Nutrient and water sums per window and per weekday
pub mod aggregation;
/// Day and week windows in local time
pub mod bucketing;
/// Personalized daily limits
pub mod limits;
/// Intake report assembly
pub mod report;
/// Risk tier classification
pub mod risk;

pub use aggregation::{
    aggregate, aggregate_per_weekday, aggregate_water, aggregate_window, WeekdayTotals,
};
pub use bucketing::{
    day_window, filter_by_window, local_date, week_first_day, week_window, weekday_slot,
    TimeWindow, WeekStart,
};
pub use limits::{resolve_default_limits, resolve_limits};
pub use report::{build_report, IntakeReport, PeriodSummary, TierSet};
pub use risk::{classify, classify_water, RiskClassifier};
