// ABOUTME: Shared resource container injected into every route as axum state
// ABOUTME: Holds the read-only catalog, the classifier, and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once at startup and shared by `Arc`. Nothing in here is mutated
//! while requests are served, so handlers need no locks.

use std::sync::Arc;

use crate::catalog::{self, FoodCatalog};
use crate::config::ServerConfig;
use crate::intelligence::Classifier;

/// Centralized resource container for dependency injection
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Food catalog loaded at startup
    pub catalog: Arc<FoodCatalog>,
    /// Liquid and allergen classifier
    pub classifier: Arc<Classifier>,
    /// Effective server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(catalog: FoodCatalog, classifier: Classifier, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            classifier: Arc::new(classifier),
            config: Arc::new(config),
        }
    }

    /// Load the catalog and classifier tables named by `config`
    ///
    /// Load failures degrade (empty catalog, built-in tables) and are logged.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let catalog = catalog::load_or_empty(&config.catalog_path);
        let classifier = Classifier::from_optional_file(config.classifier_tables_path.as_deref());
        Self::new(catalog, classifier, config)
    }
}
