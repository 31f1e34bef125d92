// ABOUTME: Meal catalog models: item identifiers, catalog items, and named categories
// ABOUTME: Catalog construction enforces catalog-wide unique ids and non-negative nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Nutrient;
use crate::errors::ValidationError;
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Catalog item identifier
///
/// Positive ids belong to the shared catalog; zero and negative ids are
/// synthetic ids given to user-created meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(i64);

impl MealId {
    /// Wrap a raw identifier
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// True for synthetic ids of user-created meals
    #[must_use]
    pub const fn is_custom(self) -> bool {
        self.0 <= 0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One food record with nutrient content per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Identifier, unique catalog-wide
    pub id: MealId,
    /// Display name
    pub name: String,
    /// Purine per serving (mg)
    #[serde(alias = "purine")]
    pub purine_mg: f64,
    /// Sugar per serving (g)
    #[serde(alias = "sugar")]
    pub sugar_g: f64,
    /// Energy per serving (kcal)
    pub kcal: f64,
    /// Reference serving quantity (g)
    #[serde(alias = "quantity")]
    pub quantity_g: f64,
    /// Name of the category the item belongs to
    #[serde(default)]
    pub category: String,
}

impl CatalogItem {
    /// Nutrient content per serving
    #[must_use]
    pub const fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Purine => self.purine_mg,
            Nutrient::Sugar => self.sugar_g,
            Nutrient::Kcal => self.kcal,
        }
    }

    /// Check that the name is present and every amount is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankItemName` or `ValidationError::InvalidAmount`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankItemName { id: self.id });
        }
        let amounts = [
            ("purine_mg", self.purine_mg),
            ("sugar_g", self.sugar_g),
            ("kcal", self.kcal),
            ("quantity_g", self.quantity_g),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidAmount { field, value });
            }
        }
        Ok(())
    }
}

/// Named group of catalog items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCategory {
    /// Category name
    pub name: String,
    /// Items in the category
    #[serde(alias = "meals")]
    pub items: Vec<CatalogItem>,
}

/// Validated set of meal categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MealCategory>", into = "Vec<MealCategory>")]
pub struct Catalog {
    categories: Vec<MealCategory>,
}

impl Catalog {
    /// Build a catalog, stamping each item with its category name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateItemId` if an id appears twice anywhere in the
    /// catalog, or the item's own validation error if an item is malformed
    pub fn new(mut categories: Vec<MealCategory>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for category in &mut categories {
            for item in &mut category.items {
                item.validate()?;
                if !seen.insert(item.id) {
                    return Err(ValidationError::DuplicateItemId(item.id));
                }
                item.category.clone_from(&category.name);
            }
        }
        debug!(
            categories = categories.len(),
            items = seen.len(),
            "Catalog loaded"
        );
        Ok(Self { categories })
    }

    /// Categories in provider order
    #[must_use]
    pub fn categories(&self) -> &[MealCategory] {
        &self.categories
    }

    /// Every item across all categories, in provider order
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.categories.iter().flat_map(|category| &category.items)
    }

    /// Look up an item by exact id; the first match wins
    #[must_use]
    pub fn find(&self, id: MealId) -> Option<&CatalogItem> {
        self.items().find(|item| item.id == id)
    }

    /// Total number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// True when the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category names ordered by the language's collation
    #[must_use]
    pub fn sorted_category_names(&self, language: Language) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        names.sort_by(|a, b| language.compare(a, b));
        names
    }

    /// Return a catalog extended with `item`, filed under `item.category`
    ///
    /// The category is created when it does not exist yet. The receiver is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateItemId` if the id is already in use,
    /// or the item's own validation error if it is malformed
    pub fn with_custom_item(&self, item: CatalogItem) -> Result<Self, ValidationError> {
        item.validate()?;
        if self.find(item.id).is_some() {
            return Err(ValidationError::DuplicateItemId(item.id));
        }

        let mut categories = self.categories.clone();
        match categories.iter_mut().find(|c| c.name == item.category) {
            Some(category) => category.items.push(item),
            None => categories.push(MealCategory {
                name: item.category.clone(),
                items: vec![item],
            }),
        }
        Ok(Self { categories })
    }
}

impl TryFrom<Vec<MealCategory>> for Catalog {
    type Error = ValidationError;

    fn try_from(categories: Vec<MealCategory>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<Catalog> for Vec<MealCategory> {
    fn from(catalog: Catalog) -> Self {
        catalog.categories
    }
}
