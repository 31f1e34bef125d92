// ABOUTME: Locale-aware catalog search by case-insensitive name substring
// ABOUTME: Results are ordered by the active language's collation rather than byte order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use purine_core::errors::ValidationError;
use purine_core::locale::Language;
use purine_core::models::{Catalog, CatalogItem};
use tracing::debug;

/// Items whose name contains `query`, ignoring case under `language` rules
///
/// # Errors
///
/// Returns `ValidationError::BlankQuery` if the query is empty after trimming
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    language: Language,
) -> Result<Vec<&'a CatalogItem>, ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::BlankQuery);
    }

    let mut matches: Vec<&CatalogItem> = catalog
        .items()
        .filter(|item| language.contains_folded(&item.name, query))
        .collect();
    matches.sort_by(|a, b| language.compare(&a.name, &b.name));

    debug!(query, %language, matches = matches.len(), "Catalog search");
    Ok(matches)
}
