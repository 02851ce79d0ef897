// ABOUTME: Nutrition lookup HTTP server binary
// ABOUTME: Loads configuration and the food catalog, then serves the JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Lookup Server Binary
//!
//! Starts the HTTP API over the food catalog named by `FOOD_DATABASE_PATH`
//! (or `--catalog`). A missing or broken catalog is logged and the server
//! starts empty.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use nutrition_lookup::{config::ServerConfig, logging, resources::ServerResources, server};
use tracing::{info, warn};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "nutrition-lookup-server")]
#[command(about = "Nutrition lookup API - food search and per-quantity nutrition")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the catalog file path
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override the classifier tables file path
    #[arg(long)]
    classifier_tables: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog;
    }
    if let Some(tables) = args.classifier_tables {
        config.classifier_tables_path = Some(tables);
    }

    logging::init_from_env()?;

    info!("Starting nutrition lookup server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config));
    if resources.catalog.is_empty() {
        warn!("Food catalog is empty; search and nutrition requests will find nothing");
    }

    display_available_endpoints(&resources.config);

    server::run(resources).await
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Nutrition:");
    info!("   Search:       GET http://{host}:{port}/api/search?query=");
    info!("   Nutrition:    GET http://{host}:{port}/api/nutrition?query=&quantity=&unit=");
    info!("   Food Names:   GET http://{host}:{port}/api/foods?query=&category=");
    info!("   Food:         GET http://{host}:{port}/api/foods/{{name}}");
    info!("   Categories:   GET http://{host}:{port}/api/categories");
    info!("Monitoring:");
    info!("   Status:       GET http://{host}:{port}/");
    info!("   Health:       GET http://{host}:{port}/health");
    info!("   Readiness:    GET http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
