// ABOUTME: Core types and constants for the purine tracker nutrition engine
// ABOUTME: Foundation crate with domain models, locale rules, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Purine Core
//!
//! Foundation crate providing the shared domain types for the intake engine.
//! Everything here is plain data plus validation; the aggregation and risk
//! logic lives in the `purine_tracker` crate.
//!
//! ## Modules
//!
//! - **errors**: Typed failures (`ValidationError`, `RiskError`, `MergeError`, `ConfigError`)
//! - **constants**: Formula factors, risk ratios, and serving volumes
//! - **locale**: Language-aware case folding and collation
//! - **models**: Profile, catalog, consumption and water entries, limits, risk tiers

/// Typed error handling with stable error codes
pub mod errors;

/// Formula factors, thresholds, and serving volumes
pub mod constants;

/// Language-aware case folding and collation
pub mod locale;

/// Core domain models (Profile, Catalog, entries, limits, risk tiers)
pub mod models;
