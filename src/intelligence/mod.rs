// ABOUTME: Food classification and nutrition scaling logic
// ABOUTME: Pure, synchronous functions shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The rules behind a nutrition answer: is the food a liquid, which allergens
//! does its name suggest, and what does a given quantity of it contain.

/// Liquid and allergen keyword classification
pub mod classifier;
/// Per-quantity nutrition scaling and macro ratios
pub mod nutrition_scaler;

pub use classifier::{AllergenIndicator, Classifier, ClassifierTables};
pub use nutrition_scaler::{MacroRatios, ScaledNutrition};
