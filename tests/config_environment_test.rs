// ABOUTME: Tests for engine and logging configuration loaded from environment variables
// ABOUTME: Validates defaults, PURINE_* overrides, parse failures, and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use purine_tracker::config::engine::{
    ENV_DEFAULT_WATER_ML, ENV_NUTRIENT_MEDIUM_RATIO, ENV_WATER_HIGH_RATIO,
    ENV_WATER_MEDIUM_RATIO, ENV_WEEK_START,
};
use purine_tracker::config::{EngineConfig, LimitFactors, RiskThresholds};
use purine_tracker::errors::ConfigError;
use purine_tracker::intelligence::WeekStart;
use purine_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 5] = [
    ENV_WEEK_START,
    ENV_DEFAULT_WATER_ML,
    ENV_NUTRIENT_MEDIUM_RATIO,
    ENV_WATER_HIGH_RATIO,
    ENV_WATER_MEDIUM_RATIO,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::load().unwrap();

    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.week_start, WeekStart::Monday);
    assert!((config.thresholds.nutrient_medium_ratio - 0.85).abs() < f64::EPSILON);
    assert!((config.limit_factors.default_water_ml - 2000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_env();
    env::set_var(ENV_WEEK_START, "Sunday");
    env::set_var(ENV_DEFAULT_WATER_ML, "2500");
    env::set_var(ENV_NUTRIENT_MEDIUM_RATIO, " 0.9 ");
    env::set_var(ENV_WATER_HIGH_RATIO, "0.4");
    env::set_var(ENV_WATER_MEDIUM_RATIO, "0.75");

    let config = EngineConfig::load().unwrap();
    clear_env();

    assert_eq!(config.week_start, WeekStart::Sunday);
    assert!((config.limit_factors.default_water_ml - 2500.0).abs() < f64::EPSILON);
    assert!((config.thresholds.nutrient_medium_ratio - 0.9).abs() < f64::EPSILON);
    assert!((config.thresholds.water_high_ratio - 0.4).abs() < f64::EPSILON);
    assert!((config.thresholds.water_medium_ratio - 0.75).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_values_are_rejected() {
    clear_env();
    env::set_var(ENV_DEFAULT_WATER_ML, "two litres");
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    env::set_var(ENV_WEEK_START, "friday");
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_overrides_fail_validation() {
    clear_env();
    env::set_var(ENV_WATER_HIGH_RATIO, "0.9");
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));

    env::set_var(ENV_DEFAULT_WATER_ML, "0");
    let result = EngineConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_threshold_validation() {
    assert!(RiskThresholds::default().validate().is_ok());

    let inverted = RiskThresholds {
        water_high_ratio: 0.8,
        water_medium_ratio: 0.5,
        ..RiskThresholds::default()
    };
    assert!(inverted.validate().is_err());

    let saturated = RiskThresholds {
        nutrient_medium_ratio: 1.0,
        ..RiskThresholds::default()
    };
    assert!(saturated.validate().is_err());
}

#[test]
fn test_limit_factor_validation() {
    assert!(LimitFactors::default().validate().is_ok());

    let no_sugar = LimitFactors {
        sugar_kcal_share: 0.0,
        ..LimitFactors::default()
    };
    assert!(matches!(
        no_sugar.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let negative_base = LimitFactors {
        purine_base_mg: -1.0,
        ..LimitFactors::default()
    };
    assert!(negative_base.validate().is_err());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_INCLUDE_LOCATION");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert!(config.include_location);
    assert!(!config.include_thread);

    let defaults = LoggingConfig::from_env();
    assert_eq!(defaults.format, LogFormat::Compact);
    assert_eq!(defaults.level, "info");
}

#[test]
#[serial]
fn test_logging_config_reads_pretty_format() {
    env::set_var("LOG_FORMAT", "pretty");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Pretty);
}
