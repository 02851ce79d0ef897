// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use nutrition_core::constants::{defaults, env_config};
use nutrition_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment type for logging detail and other deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind host
    pub host: String,
    /// Path of the catalog JSON document
    pub catalog_path: PathBuf,
    /// Optional JSON file replacing the built-in classifier tables
    pub classifier_tables_path: Option<PathBuf>,
    /// Maximum names returned by `/api/foods?query=`
    pub search_result_limit: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            catalog_path: PathBuf::from(defaults::FOOD_DATABASE_PATH),
            classifier_tables_path: None,
            search_result_limit: defaults::SEARCH_RESULT_LIMIT,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error naming the variable when a numeric
    /// setting cannot be parsed or is zero where a positive value is required.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let search_result_limit: usize =
            parse_env(env_config::SEARCH_RESULT_LIMIT, defaults::SEARCH_RESULT_LIMIT)?;
        if search_result_limit == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::SEARCH_RESULT_LIMIT
            )));
        }

        let request_timeout_secs: u64 =
            parse_env(env_config::REQUEST_TIMEOUT_SECS, defaults::REQUEST_TIMEOUT_SECS)?;
        if request_timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::REQUEST_TIMEOUT_SECS
            )));
        }

        Ok(Self {
            http_port: parse_env(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env::var(env_config::HOST).unwrap_or_else(|_| defaults::HOST.to_owned()),
            catalog_path: env::var(env_config::FOOD_DATABASE_PATH)
                .map_or_else(|_| PathBuf::from(defaults::FOOD_DATABASE_PATH), PathBuf::from),
            classifier_tables_path: env::var(env_config::CLASSIFIER_TABLES_PATH)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            search_result_limit,
            request_timeout_secs,
            environment: env::var(env_config::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
        })
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition Lookup Configuration: environment={}, bind={}, catalog={}, classifier_tables={}, search_result_limit={}, request_timeout={}s",
            self.environment,
            self.bind_address(),
            self.catalog_path.display(),
            self.classifier_tables_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.search_result_limit,
            self.request_timeout_secs,
        )
    }
}

/// Read `key` and parse it, using `default` when the variable is unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        }),
        Err(_) => {
            debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
