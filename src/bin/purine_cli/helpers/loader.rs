// ABOUTME: JSON file loading and saving for profiles, catalogs, and history records
// ABOUTME: Hydrates stored meal records against the catalog and reports skipped records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use purine_tracker::history::{hydrate, History};
use purine_tracker::models::{Catalog, Profile, StoredMealRecord, WaterEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|err| anyhow!("Failed to read {}: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| anyhow!("Invalid JSON in {}: {err}", path.display()))
}

/// Serialize a value as pretty JSON and write it to a file
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|err| anyhow!("Failed to write {}: {err}", path.display()))
}

/// Load a profile file
pub fn load_profile(path: &Path) -> Result<Profile> {
    read_json(path)
}

/// Load and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = read_json(path)?;
    info!(items = catalog.len(), path = %path.display(), "Catalog loaded");
    Ok(catalog)
}

/// Load water entries; a missing file is an empty history
pub fn load_water(path: &Path) -> Result<Vec<WaterEntry>> {
    if path.exists() {
        read_json(path)
    } else {
        Ok(Vec::new())
    }
}

/// Load stored meal records; a missing file is an empty history
pub fn load_records(path: &Path) -> Result<Vec<StoredMealRecord>> {
    if path.exists() {
        read_json(path)
    } else {
        Ok(Vec::new())
    }
}

/// Load meal records and optional water entries into a history
pub fn load_history(
    catalog: &Catalog,
    meals_path: &Path,
    water_path: Option<&Path>,
) -> Result<History> {
    let records = load_records(meals_path)?;
    let hydrated = hydrate(&records, catalog);
    if !hydrated.skipped.is_empty() {
        warn!(
            skipped = hydrated.skipped.len(),
            path = %meals_path.display(),
            "Some history records could not be resolved; they are kept unchanged"
        );
    }

    let water = match water_path {
        Some(path) => load_water(path)?,
        None => Vec::new(),
    };

    Ok(hydrated.into_history(water))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use purine_tracker::models::WaterServing;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_history_skips_unknown_records() {
        let catalog = temp_json(
            r#"[{"name":"Et","meals":[{"id":1,"name":"Dana","purine":120,"sugar":0,"kcal":250,"quantity":100}]}]"#,
        );
        let meals = temp_json(
            r#"[{"id":1,"count":2,"timestamp":1000},{"id":99,"count":1,"timestamp":2000}]"#,
        );

        let catalog = load_catalog(catalog.path()).unwrap();
        let history = load_history(&catalog, meals.path(), None).unwrap();

        assert_eq!(history.meals().len(), 1);
        assert_eq!(history.meals()[0].timestamp_ms, 1000);
        assert_eq!(history.unresolved().len(), 1);
        assert_eq!(history.unresolved()[0].id.get(), 99);
        assert!(history.water().is_empty());
    }

    #[test]
    fn test_missing_water_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let water = load_water(&dir.path().join("water.json")).unwrap();
        assert!(water.is_empty());
    }

    #[test]
    fn test_write_then_read_water() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.json");
        let entries = vec![WaterEntry::new(WaterServing::Large, 5000)];

        write_json(&path, &entries).unwrap();
        let loaded: Vec<WaterEntry> = read_json(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let file = temp_json("not json");
        let err = load_profile(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
