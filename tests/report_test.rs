// ABOUTME: End-to-end tests for intake reports built from a profile and history
// ABOUTME: Checks daily and weekly tiers, water tiers, overrides, and the week start convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use chrono_tz::Europe::Istanbul;
use purine_tracker::config::EngineConfig;
use purine_tracker::history::History;
use purine_tracker::intelligence::{build_report, WeekStart};
use purine_tracker::models::{
    LimitOverrides, Nutrient, Period, RiskTier, Sex, WaterEntry, WaterServing,
};

mod common;

use common::{BEEF, COLA, SPINACH};

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn busy_wednesday() -> History {
    let catalog = common::sample_catalog();
    let at = |h| common::local_ms(&Istanbul, 2025, 3, 12, h, 0);
    History::new(
        vec![
            common::entry(&catalog, BEEF, 3.0, at(12)),
            common::entry(&catalog, SPINACH, 1.0, at(19)),
        ],
        vec![
            WaterEntry::new(WaterServing::Large, at(9)),
            WaterEntry::new(WaterServing::Large, at(15)),
        ],
    )
}

#[test]
fn test_daily_tiers_for_a_busy_day() {
    common::init_test_logging();
    let profile = common::profile(70.0, Sex::Male);

    let report = build_report(
        &profile,
        &busy_wednesday(),
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    // 3 * 120 + 57 = 417 mg against 480 mg
    assert!((report.daily.totals.purine_mg - 417.0).abs() < 1e-9);
    assert_eq!(report.daily.period, Period::Daily);
    assert_eq!(report.daily.tiers.purine, RiskTier::Medium);
    assert_eq!(report.daily.tiers.sugar, RiskTier::Low);
    assert_eq!(report.daily.tiers.kcal, RiskTier::Low);
    // 2 * 500 ml of a 2000 ml target
    assert_eq!(report.daily.water_ml, 1000);
    assert_eq!(report.daily.tiers.water, RiskTier::Medium);
    assert_eq!(report.daily.tiers.worst(), RiskTier::Medium);
}

#[test]
fn test_weekly_tiers_scale_the_limits() {
    let profile = common::profile(70.0, Sex::Male);

    let report = build_report(
        &profile,
        &busy_wednesday(),
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    assert_eq!(report.weekly.period, Period::Weekly);
    assert!((report.weekly.totals.purine_mg - 417.0).abs() < 1e-9);
    assert_eq!(report.weekly.tiers.purine, RiskTier::Low);
    assert_eq!(report.weekly.tiers.water, RiskTier::High);
    assert!(report.weekly.window.start_ms <= report.daily.window.start_ms);
    assert!(report.weekly.window.end_ms >= report.daily.window.end_ms);
}

#[test]
fn test_overrides_drive_tiers_and_recommended_stays_default() {
    let profile = common::profile(70.0, Sex::Male).with_overrides(LimitOverrides {
        purine_mg: Some(400.0),
        ..LimitOverrides::default()
    });

    let report = build_report(
        &profile,
        &busy_wednesday(),
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    assert!((report.limits.purine_mg - 400.0).abs() < 1e-9);
    assert!((report.recommended_limits.purine_mg - 480.0).abs() < 1e-9);
    assert_eq!(report.daily.tiers.purine, RiskTier::High);
}

#[test]
fn test_sugar_heavy_day_is_high_risk() {
    let catalog = common::sample_catalog();
    let profile = common::profile(70.0, Sex::Male);
    let history = History::new(
        vec![common::entry(
            &catalog,
            COLA,
            1.0,
            common::local_ms(&Istanbul, 2025, 3, 12, 13, 0),
        )],
        Vec::new(),
    );

    let report = build_report(
        &profile,
        &history,
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    // 35 g against 26.25 g
    assert_eq!(report.daily.tiers.sugar, RiskTier::High);
    assert_eq!(report.daily.tiers.water, RiskTier::High);
}

#[test]
fn test_empty_history_is_low_for_nutrients_and_high_for_water() {
    let profile = common::profile(65.0, Sex::Female);

    let report = build_report(
        &profile,
        &History::default(),
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    for nutrient in Nutrient::ALL {
        assert_eq!(report.daily.tiers.for_nutrient(nutrient), RiskTier::Low);
        assert_eq!(report.weekly.tiers.for_nutrient(nutrient), RiskTier::Low);
    }
    assert_eq!(report.daily.tiers.water, RiskTier::High);
    assert_eq!(report.daily.water_ml, 0);
}

#[test]
fn test_week_start_controls_weekly_chart() {
    let profile = common::profile(70.0, Sex::Male);
    let history = busy_wednesday();

    let monday = build_report(
        &profile,
        &history,
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();
    let sunday_config = EngineConfig {
        week_start: WeekStart::Sunday,
        ..EngineConfig::default()
    };
    let sunday = build_report(&profile, &history, wednesday(), &sunday_config, &Istanbul).unwrap();

    assert_eq!(monday.week_start, WeekStart::Monday);
    assert!((monday.per_weekday.series(Nutrient::Purine)[2] - 417.0).abs() < 1e-9);
    assert_eq!(sunday.week_start, WeekStart::Sunday);
    assert!((sunday.per_weekday.series(Nutrient::Purine)[3] - 417.0).abs() < 1e-9);
}

#[test]
fn test_report_serializes_to_json() {
    let profile = common::profile(70.0, Sex::Male);
    let report = build_report(
        &profile,
        &busy_wednesday(),
        wednesday(),
        &EngineConfig::default(),
        &Istanbul,
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["daily"]["tiers"]["purine"], "MEDIUM");
    assert_eq!(json["week_start"], "monday");
    assert_eq!(json["date"], "2025-03-12");
}
