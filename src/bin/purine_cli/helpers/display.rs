// ABOUTME: Output formatting helpers for purine-cli
// ABOUTME: Renders intake reports, limits, search results, and batch outcomes as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use purine_tracker::catalog::BatchOutcome;
use purine_tracker::intelligence::{IntakeReport, PeriodSummary, WeekStart};
use purine_tracker::models::{CatalogItem, LimitSet, Nutrient};
use serde::Serialize;

use crate::OutputFormat;

const SLOT_LABELS_MONDAY: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const SLOT_LABELS_SUNDAY: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an intake report
pub fn display_report(report: &IntakeReport, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nIntake report for {}", report.date);
    println!("{}", "=".repeat(60));
    display_limit_rows(&report.limits, &report.recommended_limits);
    display_period("Today", &report.daily);
    display_period("This week", &report.weekly);

    let labels = match report.week_start {
        WeekStart::Monday => SLOT_LABELS_MONDAY,
        WeekStart::Sunday => SLOT_LABELS_SUNDAY,
    };
    println!(
        "\nPer weekday (week of {}, starts {}):",
        report.per_weekday.first_day,
        report.week_start.first_day()
    );
    println!("   {:<5}{:>12}{:>12}{:>12}", "", "purine", "sugar", "kcal");
    for (label, totals) in labels.iter().zip(report.per_weekday.slots.iter()) {
        println!(
            "   {label:<5}{:>12.1}{:>12.1}{:>12.1}",
            totals.purine_mg, totals.sugar_g, totals.kcal
        );
    }
    Ok(())
}

/// Print resolved limits next to recommended defaults
pub fn display_limits(
    limits: &LimitSet,
    recommended: &LimitSet,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "limits": limits,
            "recommended_limits": recommended,
        }));
    }
    display_limit_rows(limits, recommended);
    Ok(())
}

/// Print search matches
pub fn display_search_results(items: &[&CatalogItem], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("No matching meals");
        return Ok(());
    }
    for item in items {
        println!(
            "{:>8}  {:<32} {:<20} purine {:>6.1} mg  sugar {:>5.1} g  {:>6.1} kcal",
            item.id, item.name, item.category, item.purine_mg, item.sugar_g, item.kcal
        );
    }
    Ok(())
}

/// Print the outcome of a batch merge
pub fn display_batch_outcome(outcome: &BatchOutcome) {
    match outcome {
        BatchOutcome::Merged(batch) => {
            println!("Merged {} entries", batch.entries.len());
            for item in &batch.custom_items {
                println!("   New custom meal {} ({})", item.name, item.id);
            }
            if !batch.skipped.is_empty() {
                println!("   Skipped unknown ids: {:?}", batch.skipped);
            }
        }
        BatchOutcome::NoOp { skipped } => {
            println!("Nothing to merge");
            if !skipped.is_empty() {
                println!("   Skipped unknown ids: {skipped:?}");
            }
        }
    }
}

fn display_limit_rows(limits: &LimitSet, recommended: &LimitSet) {
    println!("Daily limits:");
    for nutrient in Nutrient::ALL {
        println!(
            "   {nutrient:<8}{:>10.2} {:<5}(recommended {:.2})",
            limits.for_nutrient(nutrient),
            nutrient.unit(),
            recommended.for_nutrient(nutrient)
        );
    }
    println!(
        "   {:<8}{:>10.0} {:<5}(recommended {:.0})",
        "water", limits.water_ml, "ml", recommended.water_ml
    );
}

fn display_period(title: &str, summary: &PeriodSummary) {
    println!("\n{title}:");
    for nutrient in Nutrient::ALL {
        println!(
            "   {nutrient:<8}{:>10.2} {:<5}{}",
            summary.totals.get(nutrient),
            nutrient.unit(),
            summary.tiers.for_nutrient(nutrient)
        );
    }
    println!(
        "   {:<8}{:>10} ml   {}",
        "water", summary.water_ml, summary.tiers.water
    );
}
