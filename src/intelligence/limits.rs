// ABOUTME: Personalized daily limit resolution from body weight, sex factor, and overrides
// ABOUTME: Computes purine, calorie, sugar, and water limits with per-field override fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::LimitFactors;
use purine_core::models::{LimitOverrides, LimitSet, Profile};
use tracing::{debug, warn};

/// Resolve the daily limits that apply to a profile
///
/// Each limit is the profile override when one is set and valid, otherwise the
/// formula default:
/// - kcal = `weight_kg` x `kcal_per_kg` (30 male, 25 female)
/// - purine = `weight_kg` x `purine_mg_per_kg` (4 male, 3 female) + 200
/// - sugar = kcal x 0.05 / 4, using the resolved kcal limit
/// - water = 2000 ml
///
/// An override is valid when it is finite and greater than zero. Invalid
/// overrides are logged and ignored.
///
/// # Arguments
/// * `profile` - Profile snapshot (weight is guaranteed positive)
/// * `factors` - Formula factors
#[must_use]
pub fn resolve_limits(profile: &Profile, factors: &LimitFactors) -> LimitSet {
    let limits = compute(profile, &profile.overrides, factors);
    debug!(
        profile_id = %profile.id,
        purine_mg = limits.purine_mg,
        sugar_g = limits.sugar_g,
        kcal = limits.kcal,
        water_ml = limits.water_ml,
        "Resolved daily limits"
    );
    limits
}

/// Formula defaults for a profile with every override ignored
///
/// These are the recommended values shown next to the user's own limits and
/// restored by a reset.
#[must_use]
pub fn resolve_default_limits(profile: &Profile, factors: &LimitFactors) -> LimitSet {
    compute(profile, &LimitOverrides::default(), factors)
}

fn compute(profile: &Profile, overrides: &LimitOverrides, factors: &LimitFactors) -> LimitSet {
    let weight_kg = profile.weight_kg.get();

    let kcal = pick(overrides.kcal, "kcal", || {
        weight_kg * factors.kcal_per_kg(profile.sex)
    });
    let purine_mg = pick(overrides.purine_mg, "purine_mg", || {
        weight_kg.mul_add(factors.purine_mg_per_kg(profile.sex), factors.purine_base_mg)
    });
    let sugar_g = pick(overrides.sugar_g, "sugar_g", || {
        kcal * factors.sugar_kcal_share / factors.kcal_per_gram_sugar
    });
    let water_ml = pick(overrides.water_ml, "water_ml", || factors.default_water_ml);

    LimitSet {
        purine_mg,
        sugar_g,
        kcal,
        water_ml,
    }
}

fn pick(value: Option<f64>, field: &'static str, default: impl FnOnce() -> f64) -> f64 {
    match value {
        Some(limit) if limit.is_finite() && limit > 0.0 => limit,
        Some(limit) => {
            warn!(field, value = limit, "Ignoring invalid limit override");
            default()
        }
        None => default(),
    }
}
