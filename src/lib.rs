// ABOUTME: Main library entry point for the purine tracker nutrition engine
// ABOUTME: Limits, calendar bucketing, aggregation, risk tiers, catalog merge, and history operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Purine Tracker
//!
//! Nutrition aggregation and risk engine for people tracking dietary purine,
//! sugar, calorie, and water intake against personalized limits.
//!
//! ## Architecture
//!
//! Every operation is a synchronous, pure computation over caller-owned data:
//! - **Limits**: profile → per-nutrient daily limits
//! - **Bucketing**: timestamps → local day and week windows
//! - **Aggregation**: weighted nutrient sums per window and per weekday
//! - **Risk**: totals → `Low` / `Medium` / `High` tiers
//! - **Catalog**: draft entries → resolved entries, custom meals, search
//! - **History**: hydrate stored records, append batches, remove by key
//!
//! ## Example Usage
//!
//! ```rust
//! use purine_tracker::config::EngineConfig;
//! use purine_tracker::intelligence::{classify, resolve_limits};
//! use purine_tracker::models::{Profile, RiskTier, Sex};
//! use uuid::Uuid;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EngineConfig::default();
//! let profile = Profile::new(Uuid::new_v4(), 70.0, Sex::Male)?;
//! let limits = resolve_limits(&profile, &config.limit_factors);
//!
//! assert_eq!(classify(410.0, limits.purine_mg, 1.0)?, RiskTier::Medium);
//! # Ok(())
//! # }
//! ```

/// Meal catalog merge, synthetic ids, and search
pub mod catalog;

/// Engine configuration with environment overrides
pub mod config;

/// Committed meal and water history operations
pub mod history;

/// Limits, bucketing, aggregation, risk classification, and reports
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core constants
pub use purine_core::constants;

/// Error types and stable error codes
pub use purine_core::errors;

/// Supported languages and collation
pub use purine_core::locale;

/// Domain models
pub use purine_core::models;
