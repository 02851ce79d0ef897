// ABOUTME: Food lookup commands for nutrition-cli
// ABOUTME: Handles search and nutrition scaling against a catalog file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use nutrition_lookup::{
    catalog::{self, search as matcher},
    errors::AppResult,
    intelligence::{nutrition_scaler, Classifier},
    models::FoodRecord,
};
use tracing::info;

use crate::helpers::output::print_json;

type Result<T> = AppResult<T>;

/// Print foods matching every query word
pub fn search(
    catalog_path: &Path,
    classifier: &Classifier,
    query: &str,
    limit: Option<usize>,
) -> Result<()> {
    let report = catalog::load(catalog_path)?;

    let matches = match limit {
        Some(limit) => matcher::search_limited(&report.catalog, query, limit),
        None => matcher::search(&report.catalog, query),
    };
    info!(query, results = matches.len(), "Search complete");

    let foods: Vec<FoodRecord> = matches
        .into_iter()
        .map(|food| classifier.annotate(food))
        .collect();

    print_json(&foods)
}

/// Print nutrition for `quantity` `unit` of the best match
pub fn nutrition(
    catalog_path: &Path,
    classifier: &Classifier,
    query: &str,
    quantity: f64,
    unit: &str,
) -> Result<()> {
    let report = catalog::load(catalog_path)?;

    let result = nutrition_scaler::nutrition_for_query(
        &report.catalog,
        classifier,
        Some(query),
        quantity,
        unit,
    )?;

    print_json(&result)
}
