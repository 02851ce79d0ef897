// ABOUTME: Keyword-table classification of foods as liquid or solid and allergen detection
// ABOUTME: Pure functions over data tables; tables load from JSON or fall back to built-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Classifier
//!
//! Tags foods as liquid or solid and lists the allergens their names suggest.
//!
//! Allergen detection is a name heuristic. It misses allergens a name does not
//! mention and flags some it should not; callers must present results as
//! advisory only.
//!
//! # Matching
//!
//! A keyword matches when it is a substring of the lowercased name. Allergen
//! keywords also match with their spaces removed against the name with its
//! whitespace removed, so "hot chocolate" is found in "Hotchocolate Mix" and
//! "egg " is found in "Boiled Egg".
//!
//! Before allergen matching, words listed in `name_exclusions` are cut out of
//! the name. "Grilled Eggplant" carries no Egg flag while "Eggplant and Egg
//! Bake" still does.

use nutrition_core::constants::keywords::{
    ALLERGEN_NAME_EXCLUSIONS, DEFINITE_ALLERGEN_INDICATORS, LIQUID_KEYWORDS,
    POSSIBLE_ALLERGEN_INDICATORS,
};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{AllergenFlag, FoodRecord, ServingUnit};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Keywords that point to one allergen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenIndicator {
    /// Allergen reported when any keyword matches
    pub allergen: String,
    /// Lowercase name fragments
    pub keywords: Vec<String>,
}

/// Keyword tables driving the classifier, in matching and output order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierTables {
    /// Name fragments marking a liquid
    pub liquid_keywords: Vec<String>,
    /// High-confidence allergen indicators
    pub definite_allergens: Vec<AllergenIndicator>,
    /// Low-confidence allergen indicators
    pub possible_allergens: Vec<AllergenIndicator>,
    /// Words cut from a name before allergen matching
    #[serde(default = "default_name_exclusions")]
    pub name_exclusions: Vec<String>,
}

fn default_name_exclusions() -> Vec<String> {
    ALLERGEN_NAME_EXCLUSIONS
        .iter()
        .map(|w| (*w).to_owned())
        .collect()
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self {
            liquid_keywords: LIQUID_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            definite_allergens: indicators_from(DEFINITE_ALLERGEN_INDICATORS),
            possible_allergens: indicators_from(POSSIBLE_ALLERGEN_INDICATORS),
            name_exclusions: default_name_exclusions(),
        }
    }
}

impl ClassifierTables {
    /// Read tables from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::config_invalid(format!(
                "Cannot read classifier tables {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;

        serde_json::from_str(&text).map_err(|e| {
            AppError::config_invalid(format!(
                "Classifier tables {} are not valid: {e}",
                path.display()
            ))
            .with_source(e)
        })
    }
}

fn indicators_from(table: &[(&str, &[&str])]) -> Vec<AllergenIndicator> {
    table
        .iter()
        .map(|(allergen, keywords)| AllergenIndicator {
            allergen: (*allergen).to_owned(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        })
        .collect()
}

/// Keyword with its precomputed space-free form
#[derive(Debug, Clone)]
struct Keyword {
    spaced: String,
    compact: String,
}

impl Keyword {
    fn new(raw: &str) -> Self {
        let spaced = raw.to_lowercase();
        let compact = spaced.replace(' ', "");
        Self { spaced, compact }
    }

    fn matches(&self, name: &str, compact_name: &str) -> bool {
        name.contains(&self.spaced)
            || (!self.compact.is_empty() && compact_name.contains(&self.compact))
    }
}

#[derive(Debug, Clone)]
struct CompiledIndicator {
    allergen: String,
    keywords: Vec<Keyword>,
}

impl CompiledIndicator {
    fn matches(&self, name: &str, compact_name: &str) -> bool {
        self.keywords.iter().any(|k| k.matches(name, compact_name))
    }
}

/// Liquid and allergen classifier built from `ClassifierTables`
#[derive(Debug, Clone)]
pub struct Classifier {
    liquid_keywords: Vec<String>,
    definite: Vec<CompiledIndicator>,
    possible: Vec<CompiledIndicator>,
    name_exclusions: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierTables::default())
    }
}

impl Classifier {
    /// Build a classifier from tables
    #[must_use]
    pub fn new(tables: &ClassifierTables) -> Self {
        let compile = |indicators: &[AllergenIndicator]| {
            indicators
                .iter()
                .map(|indicator| CompiledIndicator {
                    allergen: indicator.allergen.clone(),
                    keywords: indicator.keywords.iter().map(|k| Keyword::new(k)).collect(),
                })
                .collect::<Vec<_>>()
        };

        Self {
            liquid_keywords: tables
                .liquid_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            definite: compile(&tables.definite_allergens),
            possible: compile(&tables.possible_allergens),
            name_exclusions: tables
                .name_exclusions
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Build from the configured table file, falling back to built-in tables
    ///
    /// A missing or malformed file is logged and never fatal.
    #[must_use]
    pub fn from_optional_file(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match ClassifierTables::from_file(path) {
            Ok(tables) => {
                info!(
                    path = %path.display(),
                    liquid_keywords = tables.liquid_keywords.len(),
                    definite = tables.definite_allergens.len(),
                    possible = tables.possible_allergens.len(),
                    "Loaded classifier tables"
                );
                Self::new(&tables)
            }
            Err(e) => {
                warn!("{e}; using built-in classifier tables");
                Self::default()
            }
        }
    }

    /// True iff the lowercased name contains a liquid keyword
    #[must_use]
    pub fn is_liquid(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.liquid_keywords
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }

    /// Allergens suggested by a food name
    ///
    /// Definite allergens come first, then possible ones, each group in table
    /// order. An allergen appears at most once; definite evidence wins.
    #[must_use]
    pub fn detect_allergens(&self, name: &str) -> Vec<AllergenFlag> {
        let mut name = name.to_lowercase();
        for excluded in &self.name_exclusions {
            name = name.replace(excluded.as_str(), " ");
        }
        let compact_name: String = name.chars().filter(|c| !c.is_whitespace()).collect();

        let mut flags: Vec<AllergenFlag> = Vec::new();
        let already_flagged = |flags: &[AllergenFlag], allergen: &str| {
            flags.iter().any(|f| f.name.eq_ignore_ascii_case(allergen))
        };

        for indicator in &self.definite {
            if !already_flagged(&flags, &indicator.allergen)
                && indicator.matches(&name, &compact_name)
            {
                flags.push(AllergenFlag::definite(indicator.allergen.clone()));
            }
        }

        for indicator in &self.possible {
            if !already_flagged(&flags, &indicator.allergen)
                && indicator.matches(&name, &compact_name)
            {
                flags.push(AllergenFlag::possible(indicator.allergen.clone()));
            }
        }

        flags
    }

    /// Unit system of a food: its stored unit, else ml for liquids and g otherwise
    #[must_use]
    pub fn unit_system(&self, food: &FoodRecord) -> ServingUnit {
        food.serving_unit.unwrap_or_else(|| {
            if self.is_liquid(&food.name) {
                ServingUnit::Milliliters
            } else {
                ServingUnit::Grams
            }
        })
    }

    /// Stored allergens when the record has them, detected ones otherwise
    #[must_use]
    pub fn allergens_for(&self, food: &FoodRecord) -> Vec<AllergenFlag> {
        food.allergens
            .clone()
            .unwrap_or_else(|| self.detect_allergens(&food.name))
    }

    /// Copy of the record with allergens filled in
    #[must_use]
    pub fn annotate(&self, food: &FoodRecord) -> FoodRecord {
        let mut annotated = food.clone();
        annotated.allergens = Some(self.allergens_for(food));
        annotated
    }
}
