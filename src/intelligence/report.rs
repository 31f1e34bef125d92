// ABOUTME: Intake report combining limits, daily and weekly totals, and risk tiers
// ABOUTME: One pure call per render: resolve limits, bucket, aggregate, then classify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::aggregation::{aggregate_per_weekday, aggregate_water, aggregate_window, WeekdayTotals};
use super::bucketing::{day_window, week_window, TimeWindow, WeekStart};
use super::limits::{resolve_default_limits, resolve_limits};
use super::risk::RiskClassifier;
use crate::config::EngineConfig;
use crate::history::History;
use chrono::{NaiveDate, TimeZone};
use purine_core::errors::RiskError;
use purine_core::models::{LimitSet, Nutrient, NutrientTotals, Period, Profile, RiskTier};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Tier per tracked quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSet {
    /// Purine tier
    pub purine: RiskTier,
    /// Sugar tier
    pub sugar: RiskTier,
    /// Calorie tier
    pub kcal: RiskTier,
    /// Hydration tier
    pub water: RiskTier,
}

impl TierSet {
    /// Tier for a nutrient
    #[must_use]
    pub const fn for_nutrient(&self, nutrient: Nutrient) -> RiskTier {
        match nutrient {
            Nutrient::Purine => self.purine,
            Nutrient::Sugar => self.sugar,
            Nutrient::Kcal => self.kcal,
        }
    }

    /// Most severe tier in the set
    #[must_use]
    pub fn worst(&self) -> RiskTier {
        self.purine.max(self.sugar).max(self.kcal).max(self.water)
    }
}

/// Totals and tiers over one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Period the totals cover
    pub period: Period,
    /// Window the totals were restricted to
    pub window: TimeWindow,
    /// Nutrient totals
    pub totals: NutrientTotals,
    /// Water total (ml)
    pub water_ml: u64,
    /// Risk tiers
    pub tiers: TierSet,
}

/// Everything a dashboard render needs for one reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeReport {
    /// Reference local date
    pub date: NaiveDate,
    /// Week start convention applied
    pub week_start: WeekStart,
    /// Limits in effect for the profile
    pub limits: LimitSet,
    /// Formula defaults with overrides ignored
    pub recommended_limits: LimitSet,
    /// Totals for the reference day
    pub daily: PeriodSummary,
    /// Totals for the week containing the reference day
    pub weekly: PeriodSummary,
    /// Weekly totals split per weekday
    pub per_weekday: WeekdayTotals,
}

/// Build the intake report for `date` in time zone `tz`
///
/// # Errors
///
/// Returns `RiskError` if a resolved limit cannot be classified against. This
/// cannot happen for limits produced by a validated configuration.
pub fn build_report<Tz: TimeZone>(
    profile: &Profile,
    history: &History,
    date: NaiveDate,
    config: &EngineConfig,
    tz: &Tz,
) -> Result<IntakeReport, RiskError> {
    let limits = resolve_limits(profile, &config.limit_factors);
    let classifier = RiskClassifier::new(config.thresholds);

    let daily = summarize(
        &classifier,
        history,
        &limits,
        Period::Daily,
        day_window(date, tz),
    )?;
    let weekly = summarize(
        &classifier,
        history,
        &limits,
        Period::Weekly,
        week_window(date, config.week_start, tz),
    )?;

    info!(
        profile_id = %profile.id,
        %date,
        daily_worst = %daily.tiers.worst(),
        weekly_worst = %weekly.tiers.worst(),
        "Intake report built"
    );

    Ok(IntakeReport {
        date,
        week_start: config.week_start,
        limits,
        recommended_limits: resolve_default_limits(profile, &config.limit_factors),
        daily,
        weekly,
        per_weekday: aggregate_per_weekday(history.meals(), date, config.week_start, tz),
    })
}

fn summarize(
    classifier: &RiskClassifier,
    history: &History,
    limits: &LimitSet,
    period: Period,
    window: TimeWindow,
) -> Result<PeriodSummary, RiskError> {
    let totals = aggregate_window(history.meals(), window);
    let water_ml = aggregate_water(history.water(), window);
    let multiplier = period.multiplier();

    let tiers = TierSet {
        purine: classifier.classify(totals.purine_mg, limits.purine_mg, multiplier)?,
        sugar: classifier.classify(totals.sugar_g, limits.sugar_g, multiplier)?,
        kcal: classifier.classify(totals.kcal, limits.kcal, multiplier)?,
        water: classifier.classify_water(water_ml as f64, limits.water_ml, multiplier)?,
    };

    Ok(PeriodSummary {
        period,
        window,
        totals,
        water_ml,
        tiers,
    })
}
