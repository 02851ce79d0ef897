// ABOUTME: In-memory food catalog loaded once at startup and shared read-only
// ABOUTME: Exact-name, category, and category-list lookups over catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food catalog
//!
//! The catalog keeps records in file order. That order is the order every
//! search and listing reports, so it is never re-sorted.

/// Catalog file decoding and record validation
pub mod loader;
/// Token-AND name search and best-match selection
pub mod search;

use std::collections::{BTreeSet, HashSet};

use nutrition_core::models::FoodRecord;
use tracing::warn;

pub use loader::{load, load_or_empty, LoadReport, RejectedRecord};

/// Ordered, read-only collection of foods
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Build a catalog, keeping the first record for each case-insensitive name
    #[must_use]
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        let (catalog, dropped) = Self::deduplicated(foods);
        for (_, food) in &dropped {
            warn!(name = %food.name, "Dropping duplicate food record");
        }
        catalog
    }

    /// Like [`FoodCatalog::new`], also handing back each dropped duplicate
    /// with its position in `foods`
    #[must_use]
    pub fn deduplicated(foods: Vec<FoodRecord>) -> (Self, Vec<(usize, FoodRecord)>) {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(foods.len());
        let mut dropped = Vec::new();

        for (position, food) in foods.into_iter().enumerate() {
            if seen.insert(food.name_key()) {
                kept.push(food);
            } else {
                dropped.push((position, food));
            }
        }

        (Self { foods: kept }, dropped)
    }

    /// Catalog with no foods
    #[must_use]
    pub const fn empty() -> Self {
        Self { foods: Vec::new() }
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// True when no foods are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// All foods in catalog order
    #[must_use]
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Iterate foods in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.foods.iter()
    }

    /// All food names in catalog order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.foods.iter().map(|food| food.name.clone()).collect()
    }

    /// Exact, case-insensitive name lookup
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.iter().find(|food| food.has_name(name))
    }

    /// Foods whose category equals `category`, ignoring case
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&FoodRecord> {
        self.foods
            .iter()
            .filter(|food| food.in_category(category))
            .collect()
    }

    /// Sorted, de-duplicated, non-empty categories
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.foods
            .iter()
            .map(|food| food.category.trim())
            .filter(|category| !category.is_empty())
            .map(str::to_owned)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
