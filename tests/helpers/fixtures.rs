// ABOUTME: Catalog fixtures shared by integration tests
// ABOUTME: Sample foods, temp catalog files, and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;
use std::sync::Arc;

use nutrition_lookup::catalog::{loader, FoodCatalog};
use nutrition_lookup::config::ServerConfig;
use nutrition_lookup::intelligence::Classifier;
use nutrition_lookup::resources::ServerResources;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Sample catalog document covering liquids, solids, stored allergens, and categories
pub fn sample_document() -> Value {
    json!({
        "foods": [
            {
                "name": "Latte",
                "calories": 120, "protein": 8, "carbs": 10, "fat": 4.5, "fiber": 0,
                "serving_size": 240, "serving_unit": "ml",
                "acidity_level": 6.2,
                "category": "Beverages",
                "health_benefits": ["Source of calcium"]
            },
            {
                "name": "Iced Coffee",
                "calories": 5, "protein": 0.3, "carbs": 1, "fat": 0,
                "serving_size": 240, "serving_unit": "ml",
                "acidity_level": 5.0,
                "category": "Beverages"
            },
            {
                "name": "Coffee Cake",
                "calories": 410, "protein": 5, "carbs": 52, "fat": 20, "fiber": 1.2,
                "serving_size": 100, "serving_unit": "g",
                "category": "Bakery"
            },
            {
                "name": "Black Tea",
                "calories": 2, "protein": 0, "carbs": 0.5, "fat": 0,
                "serving_size": 240, "serving_unit": "ml",
                "acidity_level": 4.9,
                "category": "Beverages"
            },
            {
                "name": "Grilled Eggplant",
                "calories": 35, "protein": 1, "carbs": 8, "fat": 0.2, "fiber": 3,
                "category": "Vegetables"
            },
            {
                "name": "Peanut Butter",
                "calories": 588, "protein": 25, "carbs": 20, "fat": 50, "fiber": 6,
                "serving_size": 100, "serving_unit": "g",
                "category": "Spreads",
                "allergens": [{ "name": "Peanut", "definite": true }]
            },
            {
                "name": "Orange Juice",
                "calories": 45, "protein": 0.7, "carbs": 10.4, "fat": 0.2,
                "acidity_level": 3.5,
                "category": "Beverages"
            }
        ]
    })
}

/// Number of foods in [`sample_document`]
pub const SAMPLE_FOODS: usize = 7;

/// Sample catalog parsed in memory
pub fn sample_catalog() -> FoodCatalog {
    let bytes = serde_json::to_vec(&sample_document()).unwrap();
    loader::parse_document(&bytes, std::path::Path::new("sample.json"))
        .unwrap()
        .catalog
}

/// Write raw bytes to a temp file that lives as long as the returned handle
pub fn write_catalog_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Resources over the sample catalog with default configuration
pub fn sample_resources() -> Arc<ServerResources> {
    resources_with(sample_catalog(), ServerConfig::default())
}

/// Resources over an arbitrary catalog and configuration
pub fn resources_with(catalog: FoodCatalog, config: ServerConfig) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(catalog, Classifier::default(), config))
}
