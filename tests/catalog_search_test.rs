// ABOUTME: Tests for locale-aware catalog search and category ordering
// ABOUTME: Covers Turkish dotted and dotless i folding, collation order, and blank queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use purine_tracker::catalog::search;
use purine_tracker::errors::ValidationError;
use purine_tracker::locale::Language;
use purine_tracker::models::{Catalog, CatalogItem, MealCategory, MealId};

mod common;

fn names(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

fn fruit_catalog() -> Catalog {
    Catalog::new(vec![MealCategory {
        name: "Meyve".to_owned(),
        items: vec![
            common::item(MealId::new(10), "Üzüm", 1.0, 16.0, 69.0),
            common::item(MealId::new(11), "Çilek", 1.0, 5.0, 32.0),
            common::item(MealId::new(12), "Portakal", 1.0, 9.0, 47.0),
            common::item(MealId::new(13), "Şeftali", 1.0, 8.0, 39.0),
            common::item(MealId::new(14), "Ceviz", 25.0, 2.6, 654.0),
            common::item(MealId::new(15), "Elma", 1.0, 10.0, 52.0),
            common::item(MealId::new(16), "Incir Kurusu", 3.0, 48.0, 249.0),
        ],
    }])
    .unwrap()
}

#[test]
fn test_search_is_case_insensitive() {
    common::init_test_logging();
    let catalog = common::sample_catalog();

    let matches = search(&catalog, "kola", Language::Turkish).unwrap();
    assert_eq!(names(&matches), vec!["Kola"]);

    let matches = search(&catalog, "DANA", Language::Turkish).unwrap();
    assert_eq!(names(&matches), vec!["Dana Eti"]);
}

#[test]
fn test_turkish_dotless_and_dotted_i_are_distinct() {
    let catalog = common::sample_catalog();

    // "Ispanak" folds to "ıspanak" and "İncir" to "incir" under Turkish rules
    assert_eq!(
        names(&search(&catalog, "ıspanak", Language::Turkish).unwrap()),
        vec!["Ispanak"]
    );
    assert_eq!(
        names(&search(&catalog, "incir", Language::Turkish).unwrap()),
        vec!["İncir"]
    );
    assert!(search(&catalog, "ispanak", Language::Turkish)
        .unwrap()
        .is_empty());
}

#[test]
fn test_english_folding_uses_plain_lowercase() {
    let catalog = common::sample_catalog();
    assert_eq!(
        names(&search(&catalog, "ispanak", Language::English).unwrap()),
        vec!["Ispanak"]
    );
}

#[test]
fn test_results_follow_turkish_alphabet_order() {
    let catalog = fruit_catalog();

    let matches = search(&catalog, "e", Language::Turkish).unwrap();

    // c < ç < e < ş: Ceviz, Çilek, Elma, Şeftali
    assert_eq!(names(&matches), vec!["Ceviz", "Çilek", "Elma", "Şeftali"]);
}

#[test]
fn test_turkish_order_differs_from_byte_order() {
    let catalog = fruit_catalog();

    let turkish = names(&search(&catalog, "l", Language::Turkish).unwrap());
    let mut bytewise = turkish.clone();
    bytewise.sort();

    assert_eq!(turkish, vec!["Çilek", "Elma", "Portakal", "Şeftali"]);
    assert_eq!(bytewise, vec!["Elma", "Portakal", "Çilek", "Şeftali"]);
}

#[test]
fn test_blank_query_is_rejected() {
    let catalog = common::sample_catalog();
    assert_eq!(
        search(&catalog, "   ", Language::Turkish),
        Err(ValidationError::BlankQuery)
    );
}

#[test]
fn test_query_is_trimmed() {
    let catalog = common::sample_catalog();
    assert_eq!(
        names(&search(&catalog, "  kola ", Language::Turkish).unwrap()),
        vec!["Kola"]
    );
}

#[test]
fn test_category_names_sorted_by_collation() {
    let catalog = common::sample_catalog();
    assert_eq!(
        catalog.sorted_category_names(Language::Turkish),
        vec!["Et", "İçecek", "Sebze ve Meyve"]
    );
}
