// ABOUTME: Tests for nutrient and water risk tier classification
// ABOUTME: Covers tier boundaries, period multipliers, monotonicity, and precondition errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use purine_tracker::config::RiskThresholds;
use purine_tracker::errors::RiskError;
use purine_tracker::intelligence::{classify, classify_water, RiskClassifier};
use purine_tracker::models::{Period, RiskTier};

mod common;

// ============================================================================
// NUTRIENT TIERS
// ============================================================================

#[test]
fn test_nutrient_tiers_against_daily_limit() {
    // 0.85 * 480 = 408
    assert_eq!(classify(100.0, 480.0, 1.0).unwrap(), RiskTier::Low);
    assert_eq!(classify(407.0, 480.0, 1.0).unwrap(), RiskTier::Low);
    assert_eq!(classify(410.0, 480.0, 1.0).unwrap(), RiskTier::Medium);
    assert_eq!(classify(479.9, 480.0, 1.0).unwrap(), RiskTier::Medium);
    assert_eq!(classify(480.0, 480.0, 1.0).unwrap(), RiskTier::High);
    assert_eq!(classify(500.0, 480.0, 1.0).unwrap(), RiskTier::High);
}

#[test]
fn test_zero_consumption_is_low() {
    assert_eq!(classify(0.0, 26.25, 1.0).unwrap(), RiskTier::Low);
}

#[test]
fn test_weekly_multiplier_scales_the_limit() {
    let weekly = Period::Weekly.multiplier();

    // 7 * 480 = 3360, 0.85 * 3360 = 2856
    assert_eq!(classify(500.0, 480.0, weekly).unwrap(), RiskTier::Low);
    assert_eq!(classify(3000.0, 480.0, weekly).unwrap(), RiskTier::Medium);
    assert_eq!(classify(3400.0, 480.0, weekly).unwrap(), RiskTier::High);
}

#[test]
fn test_nutrient_tier_never_decreases_with_consumption() {
    let mut previous = RiskTier::Low;
    for step in 0..=120 {
        let value = f64::from(step) * 5.0;
        let tier = classify(value, 480.0, 1.0).unwrap();
        assert!(tier >= previous, "tier dropped at {value}");
        previous = tier;
    }
    assert_eq!(previous, RiskTier::High);
}

// ============================================================================
// WATER TIERS (inverted)
// ============================================================================

#[test]
fn test_water_tiers_against_daily_target() {
    assert_eq!(classify_water(0.0, 2000.0, 1.0).unwrap(), RiskTier::High);
    assert_eq!(classify_water(990.0, 2000.0, 1.0).unwrap(), RiskTier::High);
    assert_eq!(classify_water(1000.0, 2000.0, 1.0).unwrap(), RiskTier::Medium);
    assert_eq!(classify_water(1500.0, 2000.0, 1.0).unwrap(), RiskTier::Medium);
    assert_eq!(classify_water(1700.0, 2000.0, 1.0).unwrap(), RiskTier::Low);
    assert_eq!(classify_water(2500.0, 2000.0, 1.0).unwrap(), RiskTier::Low);
}

#[test]
fn test_water_tier_never_increases_with_consumption() {
    let mut previous = RiskTier::High;
    for step in 0..=30 {
        let value = f64::from(step) * 100.0;
        let tier = classify_water(value, 2000.0, 1.0).unwrap();
        assert!(tier <= previous, "tier rose at {value}");
        previous = tier;
    }
    assert_eq!(previous, RiskTier::Low);
}

#[test]
fn test_weekly_water_uses_multiplier() {
    // 7 * 2000 = 14000, half of it is 7000
    let weekly = Period::Weekly.multiplier();
    assert_eq!(classify_water(6000.0, 2000.0, weekly).unwrap(), RiskTier::High);
    assert_eq!(classify_water(13000.0, 2000.0, weekly).unwrap(), RiskTier::Low);
}

// ============================================================================
// CONFIGURED THRESHOLDS
// ============================================================================

#[test]
fn test_classifier_uses_configured_thresholds() {
    let classifier = RiskClassifier::new(RiskThresholds {
        nutrient_medium_ratio: 0.5,
        water_high_ratio: 0.25,
        water_medium_ratio: 0.5,
    });

    assert_eq!(classifier.classify(250.0, 480.0, 1.0).unwrap(), RiskTier::Medium);
    assert_eq!(classify(250.0, 480.0, 1.0).unwrap(), RiskTier::Low);
    assert_eq!(
        classifier.classify_water(600.0, 2000.0, 1.0).unwrap(),
        RiskTier::Medium
    );
    assert!((classifier.thresholds().nutrient_medium_ratio - 0.5).abs() < f64::EPSILON);
}

// ============================================================================
// PRECONDITIONS
// ============================================================================

#[test]
fn test_non_positive_limit_is_rejected() {
    assert_eq!(classify(10.0, 0.0, 1.0), Err(RiskError::NonPositiveLimit(0.0)));
    assert_eq!(
        classify_water(10.0, -2000.0, 1.0),
        Err(RiskError::NonPositiveLimit(-2000.0))
    );
    assert!(matches!(
        classify(10.0, f64::NAN, 1.0),
        Err(RiskError::NonPositiveLimit(_))
    ));
}

#[test]
fn test_non_positive_multiplier_is_rejected() {
    assert_eq!(
        classify(10.0, 480.0, 0.0),
        Err(RiskError::NonPositiveMultiplier(0.0))
    );
    assert_eq!(
        classify_water(10.0, 2000.0, -7.0),
        Err(RiskError::NonPositiveMultiplier(-7.0))
    );
}

#[test]
fn test_invalid_value_is_rejected() {
    assert_eq!(classify(-1.0, 480.0, 1.0), Err(RiskError::InvalidValue(-1.0)));
    assert!(matches!(
        classify(f64::NAN, 480.0, 1.0),
        Err(RiskError::InvalidValue(_))
    ));
    assert!(matches!(
        classify_water(f64::INFINITY, 2000.0, 1.0),
        Err(RiskError::InvalidValue(_))
    ));
}
