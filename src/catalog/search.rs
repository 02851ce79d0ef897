// ABOUTME: Free-text food search with token-AND substring matching
// ABOUTME: Best-match selection prefers an exact case-insensitive name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::errors::NutritionError;
use nutrition_core::models::FoodRecord;

use super::FoodCatalog;

/// Lowercase whitespace-delimited tokens of a query
#[must_use]
pub fn query_tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn matches_all(food: &FoodRecord, tokens: &[String]) -> bool {
    let name = food.name.to_lowercase();
    tokens.iter().all(|token| name.contains(token.as_str()))
}

/// Foods whose name contains every query token, in catalog order
///
/// A blank query matches nothing.
#[must_use]
pub fn search<'a>(catalog: &'a FoodCatalog, query: &str) -> Vec<&'a FoodRecord> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|food| matches_all(food, &tokens))
        .collect()
}

/// [`search`] truncated to at most `limit` results
#[must_use]
pub fn search_limited<'a>(
    catalog: &'a FoodCatalog,
    query: &str,
    limit: usize,
) -> Vec<&'a FoodRecord> {
    let mut results = search(catalog, query);
    results.truncate(limit);
    results
}

/// The food a query most likely means
///
/// An exact case-insensitive name wins; otherwise the first token-AND match.
///
/// # Errors
///
/// Returns `FoodNotFound` when nothing matches, including for a blank query
pub fn find_best_match<'a>(
    catalog: &'a FoodCatalog,
    query: &str,
) -> Result<&'a FoodRecord, NutritionError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(NutritionError::food_not_found(query));
    }

    if let Some(exact) = catalog.find_by_name(trimmed) {
        return Ok(exact);
    }

    let tokens = query_tokens(trimmed);
    catalog
        .iter()
        .find(|food| matches_all(food, &tokens))
        .ok_or_else(|| NutritionError::food_not_found(trimmed))
}
