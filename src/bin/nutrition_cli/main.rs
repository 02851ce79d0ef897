// ABOUTME: Nutrition CLI - offline command-line access to a food catalog file
// ABOUTME: Search, nutrition scaling, catalog statistics, and record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search foods by name
//! nutrition-cli search "iced coffee"
//!
//! # Nutrition for 8 fl oz of the best match
//! nutrition-cli nutrition latte --quantity 8 --unit oz
//!
//! # Count foods and list categories
//! nutrition-cli stats
//!
//! # Report records that would be skipped at load time
//! nutrition-cli --catalog data/foods.json validate
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nutrition_core::constants::{defaults, env_config};
use nutrition_lookup::errors::AppResult;
use nutrition_lookup::intelligence::Classifier;

type Result<T> = AppResult<T>;
use std::env;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition lookup CLI",
    long_about = "Query a food catalog file directly, without running the HTTP server. Output is JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file (defaults to FOOD_DATABASE_PATH, then food_database.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Classifier tables file (defaults to CLASSIFIER_TABLES_PATH)
    #[arg(long, global = true)]
    classifier_tables: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List foods whose name contains every query word
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results (all when omitted)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Nutrition for a quantity of the best-matching food
    Nutrition {
        /// Free-text query
        query: String,

        /// Amount to scale to
        #[arg(long, default_value_t = defaults::REQUEST_QUANTITY)]
        quantity: f64,

        /// Unit: g, ml, oz or cups
        #[arg(long, default_value = defaults::REQUEST_UNIT)]
        unit: String,
    },

    /// Food count and categories
    Stats,

    /// Report records that fail validation
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli.catalog.unwrap_or_else(|| {
        env::var(env_config::FOOD_DATABASE_PATH)
            .map_or_else(|_| PathBuf::from(defaults::FOOD_DATABASE_PATH), PathBuf::from)
    });
    let tables_path = cli
        .classifier_tables
        .or_else(|| env::var(env_config::CLASSIFIER_TABLES_PATH).ok().map(PathBuf::from));

    debug!(catalog = %catalog_path.display(), "Using catalog");

    match cli.command {
        Command::Search { query, limit } => {
            let classifier = Classifier::from_optional_file(tables_path.as_deref());
            commands::lookup::search(&catalog_path, &classifier, &query, limit)?;
        }
        Command::Nutrition {
            query,
            quantity,
            unit,
        } => {
            let classifier = Classifier::from_optional_file(tables_path.as_deref());
            commands::lookup::nutrition(&catalog_path, &classifier, &query, quantity, &unit)?;
        }
        Command::Stats => commands::catalog::stats(&catalog_path)?,
        Command::Validate => commands::catalog::validate(&catalog_path)?,
    }

    Ok(())
}
