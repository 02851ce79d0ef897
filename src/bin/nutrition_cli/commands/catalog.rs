// ABOUTME: Catalog inspection commands for nutrition-cli
// ABOUTME: Handles stats and validate operations on a catalog file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use nutrition_lookup::{
    catalog,
    errors::{AppError, AppResult},
};
use serde_json::json;
use tracing::warn;

use crate::helpers::output::print_json;

type Result<T> = AppResult<T>;

/// Print food count, rejected count, and categories with their sizes
pub fn stats(catalog_path: &Path) -> Result<()> {
    let report = catalog::load(catalog_path)?;
    let catalog = &report.catalog;

    let categories: Vec<_> = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let count = catalog.by_category(&category).len();
            json!({ "name": category, "foods": count })
        })
        .collect();

    print_json(&json!({
        "catalog": catalog_path.display().to_string(),
        "foods": catalog.len(),
        "rejected": report.rejected.len(),
        "categories": categories,
    }))
}

/// Print rejected records; fails when any record is invalid
pub fn validate(catalog_path: &Path) -> Result<()> {
    let report = catalog::load(catalog_path)?;

    print_json(&json!({
        "valid": report.catalog.len(),
        "rejected": report.rejected,
    }))?;

    if report.rejected.is_empty() {
        Ok(())
    } else {
        warn!(rejected = report.rejected.len(), "Catalog has invalid records");
        Err(AppError::invalid_input(format!(
            "{} invalid record(s) in {}",
            report.rejected.len(),
            catalog_path.display()
        )))
    }
}
