// ABOUTME: Scales a food's per-serving nutrients to a requested quantity and unit
// ABOUTME: Unit-system checks, linear scaling, rounding, and macro-ratio percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Scaler
//!
//! One rounding and ratio policy for every caller:
//!
//! - calories are rounded to 1 decimal, protein, carbs, fat and fiber to 2,
//!   half away from zero
//! - macro ratios use the rounded protein (4 kcal/g), carbs (4 kcal/g) and
//!   fat (9 kcal/g); fiber is not part of the total
//! - the three percentages are rounded independently, then the largest one
//!   absorbs any drift so they always sum to 100
//! - foods with no macro energy get no ratio block at all
//!
//! Units are strict: a food measured in grams cannot be requested in
//! millilitres (or cups) and vice versa. No density is assumed.

use crate::catalog::{search, FoodCatalog};
use crate::intelligence::classifier::Classifier;
use nutrition_core::constants::{defaults, nutrition};
use nutrition_core::errors::NutritionError;
use nutrition_core::models::{AllergenFlag, FoodRecord, MeasurementUnit, ServingUnit};
use serde::{Deserialize, Serialize};

/// Shown next to allergen lists in every nutrition response
pub const ALLERGEN_NOTICE: &str =
    "Allergens are inferred from the food name and are advisory only";

/// Share of macro energy per macronutrient, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Percent of energy from protein
    pub protein: i64,
    /// Percent of energy from carbohydrates
    pub carbs: i64,
    /// Percent of energy from fat
    pub fat: i64,
}

/// Nutrition for a requested quantity of one food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledNutrition {
    /// Food name as stored in the catalog
    pub name: String,
    /// kcal, 1 decimal
    pub calories: f64,
    /// grams, 2 decimals
    pub protein: f64,
    /// grams, 2 decimals
    pub carbs: f64,
    /// grams, 2 decimals
    pub fat: f64,
    /// grams, 2 decimals
    pub fiber: f64,
    /// Requested quantity, as given
    pub quantity: f64,
    /// Requested unit
    pub unit: MeasurementUnit,
    /// Unit system of the food
    pub serving_unit: ServingUnit,
    /// Whether the food is measured by volume
    pub is_liquid: bool,
    /// pH, when known
    pub acidity_level: Option<f64>,
    /// Human-readable acidity band
    pub acidity_description: String,
    /// Catalog category
    pub category: String,
    /// Health benefit blurbs
    pub health_benefits: Vec<String>,
    /// Stored or detected allergens
    pub allergens: Vec<AllergenFlag>,
    /// Advisory text for `allergens`
    pub allergen_notice: String,
    /// Energy split; absent when the food has no macro energy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macronutrient_ratios: Option<MacroRatios>,
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percent of macro energy from protein, carbs and fat
///
/// Returns `None` when the macros carry no energy.
#[must_use]
pub fn macro_ratios(protein: f64, carbs: f64, fat: f64) -> Option<MacroRatios> {
    let energies = [
        protein * nutrition::KCAL_PER_G_PROTEIN,
        carbs * nutrition::KCAL_PER_G_CARBS,
        fat * nutrition::KCAL_PER_G_FAT,
    ];
    let total: f64 = energies.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut percents = energies.map(|energy| (energy / total * 100.0).round() as i64);

    let drift = 100 - percents.iter().sum::<i64>();
    if drift != 0 {
        // first maximum wins ties, in protein, carbs, fat order
        let mut largest = 0;
        for (index, percent) in percents.iter().enumerate() {
            if *percent > percents[largest] {
                largest = index;
            }
        }
        percents[largest] += drift;
    }

    let [protein, carbs, fat] = percents;
    Some(MacroRatios {
        protein,
        carbs,
        fat,
    })
}

/// Acidity band for a pH value
#[must_use]
pub fn acidity_description(acidity_level: Option<f64>) -> &'static str {
    match acidity_level {
        None => "Acidity level not available",
        Some(ph) if ph < nutrition::HIGH_ACIDITY_PH => "High acidity",
        Some(ph) if ph < nutrition::NEUTRAL_PH => "Moderate acidity",
        Some(_) => "Low acidity",
    }
}

/// Parse the raw `quantity` parameter, defaulting when absent
///
/// # Errors
///
/// Returns `InvalidInput` when the value is not a number
pub fn parse_quantity(raw: Option<&str>) -> Result<f64, NutritionError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(defaults::REQUEST_QUANTITY),
        Some(text) => text.parse::<f64>().map_err(|_| {
            NutritionError::InvalidInput(format!("quantity must be a number, got '{text}'"))
        }),
    }
}

fn check_quantity(quantity: f64) -> Result<(), NutritionError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(NutritionError::InvalidQuantity { quantity })
    }
}

/// Scale one food to `quantity` of `unit`
///
/// # Errors
///
/// - `InvalidQuantity` when `quantity` is not a positive finite number, or is
///   so large that a scaled value overflows
/// - `UnitMismatch` when `unit` belongs to the other unit system than the food
pub fn scale(
    food: &FoodRecord,
    quantity: f64,
    unit: MeasurementUnit,
    classifier: &Classifier,
) -> Result<ScaledNutrition, NutritionError> {
    check_quantity(quantity)?;

    let serving_unit = classifier.unit_system(food);
    if unit.system() != serving_unit {
        return Err(NutritionError::UnitMismatch {
            food: food.name.clone(),
            expected: serving_unit,
            requested: unit.to_string(),
        });
    }

    let factor = unit.to_base(quantity) / food.serving_size_or_default();

    let calories = round_to(food.calories * factor, 1);
    let protein = round_to(food.protein * factor, 2);
    let carbs = round_to(food.carbs * factor, 2);
    let fat = round_to(food.fat * factor, 2);
    let fiber = round_to(food.fiber * factor, 2);

    // serde_json would write an overflowed value as null
    if [factor, calories, protein, carbs, fat, fiber]
        .iter()
        .any(|value| !value.is_finite())
    {
        return Err(NutritionError::InvalidQuantity { quantity });
    }

    Ok(ScaledNutrition {
        name: food.name.clone(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        quantity,
        unit,
        serving_unit,
        is_liquid: serving_unit == ServingUnit::Milliliters,
        acidity_level: food.acidity_level,
        acidity_description: acidity_description(food.acidity_level).to_owned(),
        category: food.category.clone(),
        health_benefits: food.health_benefits.clone(),
        allergens: classifier.allergens_for(food),
        allergen_notice: ALLERGEN_NOTICE.to_owned(),
        macronutrient_ratios: macro_ratios(protein, carbs, fat),
    })
}

/// Resolve a free-text query to its best match and scale it
///
/// # Errors
///
/// - `InvalidInput` for a missing or blank query, or an unknown unit
/// - `InvalidQuantity` for a zero, negative or non-finite quantity, checked
///   before the catalog is searched
/// - `FoodNotFound` when no food matches
/// - any error from [`scale`]
pub fn nutrition_for_query(
    catalog: &FoodCatalog,
    classifier: &Classifier,
    query: Option<&str>,
    quantity: f64,
    unit: &str,
) -> Result<ScaledNutrition, NutritionError> {
    let query = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| NutritionError::InvalidInput("query parameter is required".to_owned()))?;
    check_quantity(quantity)?;

    let unit = MeasurementUnit::parse(unit)?;
    let food = search::find_best_match(catalog, query)?;

    scale(food, quantity, unit, classifier)
}
