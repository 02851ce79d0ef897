// ABOUTME: Route module organization for the nutrition lookup HTTP endpoints
// ABOUTME: Merges domain routers and supplies the JSON not-found fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrition lookup server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the catalog and intelligence layers.

/// Health check and system status routes
pub mod health;
/// Food search and nutrition routes
pub mod nutrition;

use std::sync::Arc;

use axum::{http::Uri, Router};
use nutrition_core::errors::AppError;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use crate::resources::ServerResources;

/// All application routes, without middleware
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(NutritionRoutes::routes(Arc::clone(resources)))
        .fallback(fallback_handler)
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
