// ABOUTME: User profile model with validated body weight and optional limit overrides
// ABOUTME: Profiles are read-only snapshots; edits produce a new profile value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LimitOverrides;
use crate::errors::ValidationError;
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body weight in kilograms, always finite and greater than zero
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BodyWeightKg(f64);

impl BodyWeightKg {
    /// Validate a raw weight
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveWeight` if `kg` is not a finite positive number
    pub fn new(kg: f64) -> Result<Self, ValidationError> {
        if kg.is_finite() && kg > 0.0 {
            Ok(Self(kg))
        } else {
            Err(ValidationError::NonPositiveWeight(kg))
        }
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for BodyWeightKg {
    type Error = ValidationError;

    fn try_from(kg: f64) -> Result<Self, Self::Error> {
        Self::new(kg)
    }
}

impl From<BodyWeightKg> for f64 {
    fn from(weight: BodyWeightKg) -> Self {
        weight.0
    }
}

/// Sex category, used only to select formula factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male factors (higher purine and calorie allowance)
    #[default]
    Male,
    /// Female factors
    Female,
}

/// Read-only user profile snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: Uuid,
    /// Body weight
    pub weight_kg: BodyWeightKg,
    /// Sex category for formula factors
    #[serde(default)]
    pub sex: Sex,
    /// Active display language
    #[serde(default)]
    pub language: Language,
    /// Explicit daily limits replacing the computed defaults
    #[serde(default)]
    pub overrides: LimitOverrides,
}

impl Profile {
    /// Create a profile without overrides
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveWeight` if the weight is not positive
    pub fn new(id: Uuid, weight_kg: f64, sex: Sex) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            weight_kg: BodyWeightKg::new(weight_kg)?,
            sex,
            language: Language::default(),
            overrides: LimitOverrides::default(),
        })
    }

    /// Replace the whole override set
    #[must_use]
    pub fn with_overrides(mut self, overrides: LimitOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Apply an edit, producing the updated profile
    ///
    /// The override set is always replaced as a whole; weight, sex, and
    /// language change only when the update carries a value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveWeight` if the new weight is not positive.
    /// The original profile is left untouched either way.
    pub fn apply_update(&self, update: &ProfileUpdate) -> Result<Self, ValidationError> {
        let weight_kg = match update.weight_kg {
            Some(kg) => BodyWeightKg::new(kg)?,
            None => self.weight_kg,
        };

        Ok(Self {
            id: self.id,
            weight_kg,
            sex: update.sex.unwrap_or(self.sex),
            language: update.language.unwrap_or(self.language),
            overrides: update.overrides,
        })
    }
}

/// Profile edit submitted by the settings workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New override set (replaces the existing one entirely)
    #[serde(default)]
    pub overrides: LimitOverrides,
    /// New body weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// New sex category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// New display language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}
