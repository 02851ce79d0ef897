// ABOUTME: Main library entry point for the nutrition lookup service
// ABOUTME: Food catalog, classification, nutrition scaling, and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Lookup
//!
//! A small HTTP service answering "what is in this much of that food?".
//!
//! ## Features
//!
//! - **Search**: token-AND substring search over a JSON food catalog
//! - **Nutrition**: per-quantity scaling in g, ml, oz or cups with macro ratios
//! - **Classification**: liquid detection and advisory allergen hints from food names
//!
//! ## Architecture
//!
//! - **Catalog**: loaded once at startup, read-only afterwards
//! - **Intelligence**: pure classification and scaling functions
//! - **Routes**: thin axum handlers over `ServerResources`
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_lookup::config::ServerConfig;
//! use nutrition_lookup::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config));
//!     nutrition_lookup::server::run(resources).await
//! }
//! ```

/// Food catalog storage, loading, and search
pub mod catalog;

/// Environment configuration
pub mod config;

/// Liquid/allergen classification and nutrition scaling
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

pub use nutrition_core::errors;
pub use nutrition_core::models;
