// ABOUTME: Food search and nutrition route handlers
// ABOUTME: Search, per-quantity nutrition, food listing, single food, and category endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food and nutrition routes
//!
//! All handlers read the shared catalog; none of them mutate it. Allergen
//! lists in responses are inferred from food names unless the catalog stores
//! them, and are advisory only.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use nutrition_core::constants::defaults;
use nutrition_core::errors::AppError;
use nutrition_core::models::FoodRecord;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::catalog::search;
use crate::intelligence::nutrition_scaler;
use crate::resources::ServerResources;

/// Query string of `/api/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub query: Option<String>,
}

/// Query string of `/api/nutrition`
///
/// `quantity` stays a string so a non-numeric value gets the regular JSON
/// error body instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct NutritionParams {
    /// Free-text query
    pub query: Option<String>,
    /// Requested amount, default 100
    pub quantity: Option<String>,
    /// Requested unit, default `g`
    pub unit: Option<String>,
}

/// Query string of `/api/foods`
#[derive(Debug, Default, Deserialize)]
pub struct FoodListParams {
    /// Optional free-text filter; caps the result count when present
    pub query: Option<String>,
    /// Optional category filter
    pub category: Option<String>,
}

/// Food search and nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all food and nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/search", get(Self::handle_search))
            .route("/api/nutrition", get(Self::handle_nutrition))
            .route("/api/foods", get(Self::handle_list_foods))
            .route("/api/foods/:name", get(Self::handle_get_food))
            .route("/api/categories", get(Self::handle_categories))
            .with_state(resources)
    }

    /// Handle free-text food search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<SearchParams>,
    ) -> Result<Response, AppError> {
        let query = params.query.unwrap_or_default();
        let foods: Vec<FoodRecord> = search::search(&resources.catalog, &query)
            .into_iter()
            .map(|food| resources.classifier.annotate(food))
            .collect();

        debug!(query = %query, results = foods.len(), "Food search");

        Ok((StatusCode::OK, Json(foods)).into_response())
    }

    /// Handle nutrition lookup for a quantity of the best-matching food
    async fn handle_nutrition(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<NutritionParams>,
    ) -> Result<Response, AppError> {
        let quantity = nutrition_scaler::parse_quantity(params.quantity.as_deref())?;
        let unit = params
            .unit
            .as_deref()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .unwrap_or(defaults::REQUEST_UNIT);

        let result = nutrition_scaler::nutrition_for_query(
            &resources.catalog,
            &resources.classifier,
            params.query.as_deref(),
            quantity,
            unit,
        )?;

        info!(
            food = %result.name,
            quantity = result.quantity,
            unit = %result.unit,
            calories = result.calories,
            "Nutrition computed"
        );

        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle food name listing, optionally filtered
    async fn handle_list_foods(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<FoodListParams>,
    ) -> Result<Response, AppError> {
        let query = params
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let candidates: Vec<&FoodRecord> = match query {
            Some(query) => search::search(&resources.catalog, query),
            None => resources.catalog.iter().collect(),
        };

        let mut names: Vec<&str> = candidates
            .into_iter()
            .filter(|food| category.is_none_or(|c| food.in_category(c)))
            .map(|food| food.name.as_str())
            .collect();

        if query.is_some() {
            names.truncate(resources.config.search_result_limit);
        }

        Ok((StatusCode::OK, Json(json!({ "foods": names }))).into_response())
    }

    /// Handle exact-name food lookup
    async fn handle_get_food(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let food = resources
            .catalog
            .find_by_name(&name)
            .ok_or_else(|| AppError::not_found(format!("Food '{name}'")))?;

        Ok((StatusCode::OK, Json(resources.classifier.annotate(food))).into_response())
    }

    /// Handle category listing
    async fn handle_categories(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = resources.catalog.categories();
        Ok((StatusCode::OK, Json(json!({ "categories": categories }))).into_response())
    }
}
