// ABOUTME: Engine configuration for limit formulas, risk thresholds, and week start convention
// ABOUTME: Loads defaults, applies PURINE_* environment overrides, then validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! Type-safe configuration for the nutrition engine.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export PURINE_WEEK_START=sunday
//!    export PURINE_DEFAULT_WATER_ML=2500
//!    export PURINE_NUTRIENT_MEDIUM_RATIO=0.9
//!    export PURINE_WATER_HIGH_RATIO=0.4
//!    export PURINE_WATER_MEDIUM_RATIO=0.75
//!    ```
//!
//! 2. Default values (if env vars not set)

use crate::intelligence::WeekStart;
use purine_core::constants::{limits, risk};
use purine_core::errors::ConfigError;
use purine_core::models::Sex;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Week start convention override
pub const ENV_WEEK_START: &str = "PURINE_WEEK_START";
/// Default daily water target override (ml)
pub const ENV_DEFAULT_WATER_ML: &str = "PURINE_DEFAULT_WATER_ML";
/// Nutrient `Medium` tier ratio override
pub const ENV_NUTRIENT_MEDIUM_RATIO: &str = "PURINE_NUTRIENT_MEDIUM_RATIO";
/// Water `High` tier ratio override
pub const ENV_WATER_HIGH_RATIO: &str = "PURINE_WATER_HIGH_RATIO";
/// Water `Medium` tier ratio override
pub const ENV_WATER_MEDIUM_RATIO: &str = "PURINE_WATER_MEDIUM_RATIO";

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// First day of the week for weekly windows and weekday slots
    #[serde(default)]
    pub week_start: WeekStart,
    /// Daily limit formula factors
    #[serde(default)]
    pub limit_factors: LimitFactors,
    /// Risk tier thresholds
    #[serde(default)]
    pub thresholds: RiskThresholds,
}

impl EngineConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or
    /// the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            week_start = %config.week_start,
            nutrient_medium_ratio = config.thresholds.nutrient_medium_ratio,
            default_water_ml = config.limit_factors.default_water_ml,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable is set but cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(ENV_WEEK_START) {
            self.week_start = val.parse().map_err(ConfigError::Parse)?;
        }

        if let Some(ml) = parse_env(ENV_DEFAULT_WATER_ML)? {
            self.limit_factors.default_water_ml = ml;
        }

        if let Some(ratio) = parse_env(ENV_NUTRIENT_MEDIUM_RATIO)? {
            self.thresholds.nutrient_medium_ratio = ratio;
        }

        if let Some(ratio) = parse_env(ENV_WATER_HIGH_RATIO)? {
            self.thresholds.water_high_ratio = ratio;
        }

        if let Some(ratio) = parse_env(ENV_WATER_MEDIUM_RATIO)? {
            self.thresholds.water_medium_ratio = ratio;
        }

        Ok(self)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first range violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limit_factors.validate()?;
        self.thresholds.validate()
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::EnvVar(err)),
    }
}

/// Factors of the default daily limit formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitFactors {
    /// Purine allowance per kg for the male factor (mg/kg)
    pub male_purine_mg_per_kg: f64,
    /// Purine allowance per kg for the female factor (mg/kg)
    pub female_purine_mg_per_kg: f64,
    /// Constant purine allowance (mg)
    pub purine_base_mg: f64,
    /// Calorie allowance per kg for the male factor (kcal/kg)
    pub male_kcal_per_kg: f64,
    /// Calorie allowance per kg for the female factor (kcal/kg)
    pub female_kcal_per_kg: f64,
    /// Share of daily calories allowed from sugar
    pub sugar_kcal_share: f64,
    /// Energy density of sugar (kcal/g)
    pub kcal_per_gram_sugar: f64,
    /// Daily water target without an override (ml)
    pub default_water_ml: f64,
}

impl Default for LimitFactors {
    fn default() -> Self {
        Self {
            male_purine_mg_per_kg: limits::MALE_PURINE_MG_PER_KG,
            female_purine_mg_per_kg: limits::FEMALE_PURINE_MG_PER_KG,
            purine_base_mg: limits::PURINE_BASE_MG,
            male_kcal_per_kg: limits::MALE_KCAL_PER_KG,
            female_kcal_per_kg: limits::FEMALE_KCAL_PER_KG,
            sugar_kcal_share: limits::SUGAR_KCAL_SHARE,
            kcal_per_gram_sugar: limits::KCAL_PER_GRAM_SUGAR,
            default_water_ml: limits::DEFAULT_WATER_ML,
        }
    }
}

impl LimitFactors {
    /// Purine allowance per kg for a sex category
    #[must_use]
    pub const fn purine_mg_per_kg(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_purine_mg_per_kg,
            Sex::Female => self.female_purine_mg_per_kg,
        }
    }

    /// Calorie allowance per kg for a sex category
    #[must_use]
    pub const fn kcal_per_kg(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_kcal_per_kg,
            Sex::Female => self.female_kcal_per_kg,
        }
    }

    /// Validate that every factor can produce a positive limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive factor or
    /// `ConfigError::InvalidRange` for a sugar share outside `(0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (self.male_purine_mg_per_kg, "male_purine_mg_per_kg must be > 0"),
            (
                self.female_purine_mg_per_kg,
                "female_purine_mg_per_kg must be > 0",
            ),
            (self.male_kcal_per_kg, "male_kcal_per_kg must be > 0"),
            (self.female_kcal_per_kg, "female_kcal_per_kg must be > 0"),
            (self.kcal_per_gram_sugar, "kcal_per_gram_sugar must be > 0"),
            (self.default_water_ml, "default_water_ml must be > 0"),
        ];
        for (value, message) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if !(self.purine_base_mg.is_finite() && self.purine_base_mg >= 0.0) {
            return Err(ConfigError::ValueOutOfRange("purine_base_mg must be >= 0"));
        }

        if !(self.sugar_kcal_share > 0.0 && self.sugar_kcal_share <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "sugar_kcal_share must be in (0, 1]",
            ));
        }

        Ok(())
    }
}

/// Ratios of the effective limit at which tiers change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Nutrient totals at or above this ratio are at least `Medium`
    pub nutrient_medium_ratio: f64,
    /// Water totals below this ratio are `High`
    pub water_high_ratio: f64,
    /// Water totals below this ratio are at least `Medium`
    pub water_medium_ratio: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            nutrient_medium_ratio: risk::NUTRIENT_MEDIUM_RATIO,
            water_high_ratio: risk::WATER_HIGH_RATIO,
            water_medium_ratio: risk::WATER_MEDIUM_RATIO,
        }
    }
}

impl RiskThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` unless
    /// `0 < nutrient_medium_ratio < 1` and `0 < water_high_ratio < water_medium_ratio <= 1`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.nutrient_medium_ratio > 0.0 && self.nutrient_medium_ratio < 1.0) {
            return Err(ConfigError::InvalidRange(
                "nutrient_medium_ratio must be in (0, 1)",
            ));
        }

        if !(self.water_high_ratio > 0.0 && self.water_high_ratio < self.water_medium_ratio) {
            return Err(ConfigError::InvalidRange(
                "water_high_ratio must be > 0 and < water_medium_ratio",
            ));
        }

        if self.water_medium_ratio > 1.0 {
            return Err(ConfigError::InvalidRange("water_medium_ratio must be <= 1"));
        }

        Ok(())
    }
}
