// ABOUTME: Application-wide constants for the nutrition lookup service
// ABOUTME: Service defaults, environment variable names, and nutrition factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain

/// Built-in liquid and allergen keyword tables
pub mod keywords;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary and its log target
    pub const NUTRITION_LOOKUP_SERVER: &str = "nutrition-lookup-server";
    /// Name of the offline lookup CLI
    pub const NUTRITION_CLI: &str = "nutrition-cli";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default catalog file, relative to the working directory
    pub const FOOD_DATABASE_PATH: &str = "food_database.json";
    /// Maximum number of names returned by the listing endpoint when filtering
    pub const SEARCH_RESULT_LIMIT: usize = 10;
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Serving size assumed when a record does not carry one
    pub const SERVING_SIZE: f64 = 100.0;
    /// Quantity assumed when a nutrition request omits it
    pub const REQUEST_QUANTITY: f64 = 100.0;
    /// Unit assumed when a nutrition request omits it
    pub const REQUEST_UNIT: &str = "g";
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind host
    pub const HOST: &str = "HOST";
    /// Path to the food catalog JSON document
    pub const FOOD_DATABASE_PATH: &str = "FOOD_DATABASE_PATH";
    /// Optional path to a JSON file replacing the built-in classifier tables
    pub const CLASSIFIER_TABLES_PATH: &str = "CLASSIFIER_TABLES_PATH";
    /// Listing endpoint result cap
    pub const SEARCH_RESULT_LIMIT: &str = "SEARCH_RESULT_LIMIT";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Energy and unit conversion factors
pub mod nutrition {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;

    /// Milliliters per US fluid ounce
    pub const ML_PER_FL_OZ: f64 = 29.5735;
    /// Milliliters per US cup
    pub const ML_PER_CUP: f64 = 236.588;

    /// pH below which a food is described as highly acidic
    pub const HIGH_ACIDITY_PH: f64 = 4.6;
    /// pH below which a food is described as moderately acidic
    pub const NEUTRAL_PH: f64 = 7.0;
}
