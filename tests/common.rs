// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a sample catalog, profiles, and local timestamp helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `purine_tracker`

use chrono::TimeZone;
use purine_tracker::models::{
    Catalog, CatalogItem, ConsumptionEntry, MealCategory, MealId, Profile, ServingCount, Sex,
};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const BEEF: MealId = MealId::new(1);
pub const CHICKEN: MealId = MealId::new(2);
pub const COLA: MealId = MealId::new(3);
pub const SPINACH: MealId = MealId::new(4);
pub const FIG: MealId = MealId::new(5);

pub fn item(id: MealId, name: &str, purine_mg: f64, sugar_g: f64, kcal: f64) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_owned(),
        purine_mg,
        sugar_g,
        kcal,
        quantity_g: 100.0,
        category: String::new(),
    }
}

/// Small catalog with Turkish names across three categories
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        MealCategory {
            name: "Et".to_owned(),
            items: vec![
                item(BEEF, "Dana Eti", 120.0, 0.0, 250.0),
                item(CHICKEN, "Tavuk Göğsü", 100.0, 0.0, 165.0),
            ],
        },
        MealCategory {
            name: "İçecek".to_owned(),
            items: vec![item(COLA, "Kola", 0.0, 35.0, 140.0)],
        },
        MealCategory {
            name: "Sebze ve Meyve".to_owned(),
            items: vec![
                item(SPINACH, "Ispanak", 57.0, 0.4, 23.0),
                item(FIG, "İncir", 2.0, 16.0, 74.0),
            ],
        },
    ])
    .unwrap()
}

pub fn profile(weight_kg: f64, sex: Sex) -> Profile {
    Profile::new(Uuid::new_v4(), weight_kg, sex).unwrap()
}

/// Committed entry for a catalog item
pub fn entry(catalog: &Catalog, id: MealId, count: f64, timestamp_ms: i64) -> ConsumptionEntry {
    let item = catalog.find(id).unwrap().clone();
    ConsumptionEntry::new(item, ServingCount::new(count).unwrap(), timestamp_ms)
}

/// Epoch milliseconds of a local wall-clock time, earliest instant if ambiguous
pub fn local_ms<Tz: TimeZone>(tz: &Tz, y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    tz.with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .unwrap()
        .timestamp_millis()
}
