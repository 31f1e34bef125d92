// ABOUTME: Risk tier classification for nutrient totals and inverted classification for hydration
// ABOUTME: Preconditions on limit, multiplier, and value are checked eagerly and reported as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Risk Classification
//!
//! Nutrients are "too much" risks: tiers rise as consumption approaches the
//! limit. Water is a "too little" risk: tiers rise as consumption falls short
//! of the target. The two rules are kept separate on purpose.
//!
//! The multiplier scales a per-day limit to the period being classified
//! (1.0 for a day, 7.0 for a week), so daily and weekly tiers share one rule.

use crate::config::RiskThresholds;
use purine_core::errors::RiskError;
use purine_core::models::RiskTier;

/// Classifier bound to a set of thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    /// Create a classifier using the given thresholds
    #[must_use]
    pub const fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Classify a nutrient total
    ///
    /// With `effective = limit x multiplier`:
    /// - `value < medium_ratio x effective` → `Low`
    /// - `value < effective` → `Medium`
    /// - otherwise → `High`
    ///
    /// # Errors
    ///
    /// Returns `RiskError` if the limit or multiplier is not a finite positive
    /// number, or the value is negative or not finite
    pub fn classify(&self, value: f64, limit: f64, multiplier: f64) -> Result<RiskTier, RiskError> {
        let effective = effective_limit(value, limit, multiplier)?;

        if value < self.thresholds.nutrient_medium_ratio * effective {
            Ok(RiskTier::Low)
        } else if value < effective {
            Ok(RiskTier::Medium)
        } else {
            Ok(RiskTier::High)
        }
    }

    /// Classify a water total with inverted thresholds
    ///
    /// With `effective = limit x multiplier`:
    /// - `value < high_ratio x effective` → `High`
    /// - `value < medium_ratio x effective` → `Medium`
    /// - otherwise → `Low`
    ///
    /// # Errors
    ///
    /// Returns `RiskError` under the same preconditions as [`Self::classify`]
    pub fn classify_water(
        &self,
        value: f64,
        limit: f64,
        multiplier: f64,
    ) -> Result<RiskTier, RiskError> {
        let effective = effective_limit(value, limit, multiplier)?;

        if value < self.thresholds.water_high_ratio * effective {
            Ok(RiskTier::High)
        } else if value < self.thresholds.water_medium_ratio * effective {
            Ok(RiskTier::Medium)
        } else {
            Ok(RiskTier::Low)
        }
    }
}

/// Classify a nutrient total with the default thresholds
///
/// # Errors
///
/// See [`RiskClassifier::classify`]
pub fn classify(value: f64, limit: f64, multiplier: f64) -> Result<RiskTier, RiskError> {
    RiskClassifier::default().classify(value, limit, multiplier)
}

/// Classify a water total with the default thresholds
///
/// # Errors
///
/// See [`RiskClassifier::classify_water`]
pub fn classify_water(value: f64, limit: f64, multiplier: f64) -> Result<RiskTier, RiskError> {
    RiskClassifier::default().classify_water(value, limit, multiplier)
}

fn effective_limit(value: f64, limit: f64, multiplier: f64) -> Result<f64, RiskError> {
    if !(limit.is_finite() && limit > 0.0) {
        return Err(RiskError::NonPositiveLimit(limit));
    }
    if !(multiplier.is_finite() && multiplier > 0.0) {
        return Err(RiskError::NonPositiveMultiplier(multiplier));
    }
    if !(value.is_finite() && value >= 0.0) {
        return Err(RiskError::InvalidValue(value));
    }
    Ok(limit * multiplier)
}
