// ABOUTME: Default constants for limit formulas, risk thresholds, and water servings
// ABOUTME: Values are the engine defaults and can be overridden through engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily limit formula factors
pub mod limits {
    /// Purine allowance per kg of body weight for the male factor (mg/kg)
    pub const MALE_PURINE_MG_PER_KG: f64 = 4.0;
    /// Purine allowance per kg of body weight for the female factor (mg/kg)
    pub const FEMALE_PURINE_MG_PER_KG: f64 = 3.0;
    /// Constant purine allowance added on top of the weight term (mg)
    pub const PURINE_BASE_MG: f64 = 200.0;
    /// Calorie allowance per kg of body weight for the male factor (kcal/kg)
    pub const MALE_KCAL_PER_KG: f64 = 30.0;
    /// Calorie allowance per kg of body weight for the female factor (kcal/kg)
    pub const FEMALE_KCAL_PER_KG: f64 = 25.0;
    /// Share of daily calories allowed from sugar (5%)
    pub const SUGAR_KCAL_SHARE: f64 = 0.05;
    /// Energy density of sugar (kcal/g)
    pub const KCAL_PER_GRAM_SUGAR: f64 = 4.0;
    /// Daily water target when the profile has no override (ml)
    pub const DEFAULT_WATER_ML: f64 = 2000.0;
}

/// Risk tier thresholds
pub mod risk {
    /// Nutrient totals at or above this share of the limit are at least `Medium`
    pub const NUTRIENT_MEDIUM_RATIO: f64 = 0.85;
    /// Water totals below this share of the target are `High` risk
    pub const WATER_HIGH_RATIO: f64 = 0.5;
    /// Water totals below this share of the target are at least `Medium` risk
    pub const WATER_MEDIUM_RATIO: f64 = 0.8;
    /// Limit multiplier applied to daily totals
    pub const DAILY_MULTIPLIER: f64 = 1.0;
    /// Limit multiplier applied to weekly totals (7 days against a daily limit)
    pub const WEEKLY_MULTIPLIER: f64 = 7.0;
}

/// Water serving volumes
pub mod water {
    /// Small serving (glass) volume in ml
    pub const SMALL_SERVING_ML: u32 = 330;
    /// Large serving (bottle) volume in ml
    pub const LARGE_SERVING_ML: u32 = 500;
}

/// Calendar constants
pub mod calendar {
    /// Number of weekday slots in a week bucket
    pub const DAYS_PER_WEEK: usize = 7;
}
