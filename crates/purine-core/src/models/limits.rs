// ABOUTME: Daily limit models, override sets, and nutrient totals
// ABOUTME: LimitSet is derived per call and never cached across profile edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Tracked nutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Purine (mg)
    Purine,
    /// Sugar (g)
    Sugar,
    /// Energy (kcal)
    Kcal,
}

impl Nutrient {
    /// Every tracked nutrient
    pub const ALL: [Self; 3] = [Self::Purine, Self::Sugar, Self::Kcal];

    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Purine => "mg",
            Self::Sugar => "g",
            Self::Kcal => "kcal",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purine => f.pad("purine"),
            Self::Sugar => f.pad("sugar"),
            Self::Kcal => f.pad("kcal"),
        }
    }
}

/// Explicit daily limits chosen by the user
///
/// `None` means "use the computed default". There is no sentinel value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitOverrides {
    /// Purine limit (mg/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purine_mg: Option<f64>,
    /// Sugar limit (g/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Energy limit (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kcal: Option<f64>,
    /// Water target (ml/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<f64>,
}

impl LimitOverrides {
    /// True when no override is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.purine_mg.is_none()
            && self.sugar_g.is_none()
            && self.kcal.is_none()
            && self.water_ml.is_none()
    }
}

/// Resolved daily limits for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitSet {
    /// Purine limit (mg/day)
    pub purine_mg: f64,
    /// Sugar limit (g/day)
    pub sugar_g: f64,
    /// Energy limit (kcal/day)
    pub kcal: f64,
    /// Water target (ml/day)
    pub water_ml: f64,
}

impl LimitSet {
    /// Daily limit for a nutrient
    #[must_use]
    pub const fn for_nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Purine => self.purine_mg,
            Nutrient::Sugar => self.sugar_g,
            Nutrient::Kcal => self.kcal,
        }
    }
}

/// Summed nutrient contributions of a bucket of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Purine (mg)
    pub purine_mg: f64,
    /// Sugar (g)
    pub sugar_g: f64,
    /// Energy (kcal)
    pub kcal: f64,
}

impl NutrientTotals {
    /// Total for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Purine => self.purine_mg,
            Nutrient::Sugar => self.sugar_g,
            Nutrient::Kcal => self.kcal,
        }
    }
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            purine_mg: self.purine_mg + rhs.purine_mg,
            sugar_g: self.sugar_g + rhs.sugar_g,
            kcal: self.kcal + rhs.kcal,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
