// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides root status, liveness, and readiness endpoints with catalog size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/ready` reports `degraded` while the catalog is empty so a load balancer
//! can tell a broken catalog file apart from a healthy process.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn root_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "message": "Server is running",
                "foods_count": resources.catalog.len()
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Json<serde_json::Value> {
            let foods_count = resources.catalog.len();
            Json(serde_json::json!({
                "status": if foods_count == 0 { "degraded" } else { "ready" },
                "foods_count": foods_count,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
