// ABOUTME: Typed error definitions for validation, risk preconditions, merging, and configuration
// ABOUTME: Every engine failure is returned as one of these values, never thrown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! The engine never panics on bad input. Failures fall into three groups:
//!
//! - **Validation** (`ValidationError`): malformed caller input such as a blank
//!   custom meal name or a non-positive serving count
//! - **Lookup misses**: reported as `Option`/`bool` by the operations themselves,
//!   except inside a merge where an unknown id is `MergeError::UnknownItem`
//! - **Preconditions** (`RiskError`): a limit or value the classifier cannot rank
//!
//! `EngineError` wraps all of them and exposes a stable `ErrorCode` so callers
//! can pick UI messaging without matching on every variant.

use crate::locale::Language;
use crate::models::MealId;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Stable error codes exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The provided input is invalid
    InvalidInput,
    /// A required field is missing
    MissingRequiredField,
    /// A numeric value is outside the acceptable range
    ValueOutOfRange,
    /// A referenced resource does not exist
    ResourceNotFound,
    /// A resource with the same identifier already exists
    ResourceAlreadyExists,
    /// Configuration is invalid
    ConfigInvalid,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Invalid caller input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required numeric field was not supplied
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field is negative, NaN, or infinite
    #[error("Field {field} must be a finite, non-negative number (got {value})")]
    InvalidAmount {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
    },

    /// No name was supplied for a language
    #[error("Missing name for language {language}")]
    MissingName {
        /// Language whose name is missing
        language: Language,
    },

    /// A name is empty after trimming
    #[error("Name for language {language} must not be blank")]
    BlankName {
        /// Language whose name is blank
        language: Language,
    },

    /// A catalog item display name is empty after trimming
    #[error("Catalog item {id} has a blank name")]
    BlankItemName {
        /// Item with the blank name
        id: MealId,
    },

    /// Search query is empty after trimming
    #[error("Search query must not be blank")]
    BlankQuery,

    /// Serving multiplier is zero, negative, or not finite
    #[error("Serving count must be greater than zero (got {0})")]
    NonPositiveCount(f64),

    /// Body weight is zero, negative, or not finite
    #[error("Body weight must be greater than zero (got {0} kg)")]
    NonPositiveWeight(f64),

    /// A committed entry needs a timestamp
    #[error("Entry timestamp is required once an entry is committed")]
    MissingTimestamp,

    /// The same identifier appears twice in one catalog
    #[error("Catalog item id {0} appears more than once")]
    DuplicateItemId(MealId),
}

impl ValidationError {
    /// Stable code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } | Self::MissingName { .. } | Self::MissingTimestamp => {
                ErrorCode::MissingRequiredField
            }
            Self::InvalidAmount { .. }
            | Self::NonPositiveCount(_)
            | Self::NonPositiveWeight(_) => ErrorCode::ValueOutOfRange,
            Self::BlankName { .. } | Self::BlankItemName { .. } | Self::BlankQuery => {
                ErrorCode::InvalidInput
            }
            Self::DuplicateItemId(_) => ErrorCode::ResourceAlreadyExists,
        }
    }
}

/// Classifier precondition violations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RiskError {
    /// Limit is zero, negative, or not finite
    #[error("Limit must be a finite number greater than zero (got {0})")]
    NonPositiveLimit(f64),

    /// Tier multiplier is zero, negative, or not finite
    #[error("Tier multiplier must be a finite number greater than zero (got {0})")]
    NonPositiveMultiplier(f64),

    /// Consumption value is negative, NaN, or infinite
    #[error("Consumption value must be finite and non-negative (got {0})")]
    InvalidValue(f64),
}

/// Failures while resolving a draft entry against the catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    /// Draft failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Draft references an id that no catalog category contains
    #[error("Catalog item {0} not found")]
    UnknownItem(MealId),
}

impl MergeError {
    /// Stable code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::UnknownItem(_) => ErrorCode::ResourceNotFound,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., ratio not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Umbrella error for callers that handle every engine failure in one place
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid caller input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Classifier precondition violation
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// Draft resolution failure
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Stable code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::Risk(_) => ErrorCode::ValueOutOfRange,
            Self::Merge(err) => err.code(),
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }
}
