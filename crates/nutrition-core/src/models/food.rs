// ABOUTME: Food record model as stored in the JSON catalog document
// ABOUTME: FoodRecord, AllergenFlag, and per-record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};

use super::ServingUnit;
use crate::constants::defaults;

/// Allergen reported for a food
///
/// `definite` is true for high-confidence evidence (e.g. "milk" in the name)
/// and false for weaker, ambiguous evidence (e.g. "nut" as a substring).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllergenFlag {
    /// Allergen name (Dairy, Nuts, Gluten, ...)
    pub name: String,
    /// Whether the evidence is high-confidence
    pub definite: bool,
}

impl AllergenFlag {
    /// High-confidence allergen
    pub fn definite(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definite: true,
        }
    }

    /// Low-confidence allergen
    pub fn possible(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definite: false,
        }
    }
}

/// One food in the catalog
///
/// Nutrient values are per `serving_size` of `serving_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Display name; unique case-insensitively within a catalog
    pub name: String,
    /// Energy per serving (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein per serving (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates per serving (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat per serving (g)
    #[serde(default)]
    pub fat: f64,
    /// Fiber per serving (g)
    #[serde(default)]
    pub fiber: f64,
    /// Serving amount the nutrients refer to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Unit of `serving_size`; inferred from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<ServingUnit>,
    /// pH, informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity_level: Option<f64>,
    /// Free-form category label
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Health benefit blurbs, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_benefits: Vec<String>,
    /// Curated allergens; computed from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<AllergenFlag>>,
}

impl FoodRecord {
    /// Serving size, falling back to 100 when the record has none
    #[must_use]
    pub fn serving_size_or_default(&self) -> f64 {
        self.serving_size.unwrap_or(defaults::SERVING_SIZE)
    }

    /// Key under which two records count as the same food
    #[must_use]
    pub fn name_key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Case-insensitive full-name comparison
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name_key() == name.trim().to_lowercase()
    }

    /// Case-insensitive category comparison, ignoring surrounding whitespace
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }

    /// Check the record for values the scaler cannot work with
    ///
    /// Returns one message per problem; an empty list means the record is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("name must not be empty".to_owned());
        }

        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
        ] {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!("{field} must be a non-negative number"));
            }
        }

        if let Some(size) = self.serving_size {
            if !size.is_finite() || size <= 0.0 {
                problems.push("serving_size must be a positive number".to_owned());
            }
        }

        if let Some(allergens) = &self.allergens {
            if allergens.iter().any(|a| a.name.trim().is_empty()) {
                problems.push("allergen names must not be empty".to_owned());
            }
        }

        problems
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_record_uses_defaults() {
        let food: FoodRecord = serde_json::from_value(json!({
            "name": "Plain Rice",
            "calories": 130,
            "health_benefits": null
        }))
        .unwrap();

        assert!((food.serving_size_or_default() - 100.0).abs() < f64::EPSILON);
        assert!(food.serving_unit.is_none());
        assert!(food.health_benefits.is_empty());
        assert!(food.allergens.is_none());
        assert!(food.validate().is_empty());
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let food: FoodRecord = serde_json::from_value(json!({ "name": "Apple" })).unwrap();
        let value = serde_json::to_value(&food).unwrap();

        assert!(value.get("allergens").is_none());
        assert!(value.get("serving_unit").is_none());
        assert_eq!(value["health_benefits"], json!([]));
    }

    #[test]
    fn test_name_and_category_comparisons_ignore_case() {
        let food: FoodRecord = serde_json::from_value(json!({
            "name": " Crème Brûlée ",
            "category": "Desserts Sucrés"
        }))
        .unwrap();

        assert_eq!(food.name_key(), "crème brûlée");
        assert!(food.has_name("CRÈME BRÛLÉE"));
        assert!(food.in_category("desserts sucrés"));
        assert!(food.in_category(" DESSERTS SUCRÉS "));
        assert!(!food.in_category("Desserts"));
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let food: FoodRecord = serde_json::from_value(json!({
            "name": " ",
            "calories": -1,
            "serving_size": 0
        }))
        .unwrap();

        let problems = food.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().any(|p| p.starts_with("calories")));
        assert!(problems.iter().any(|p| p.starts_with("serving_size")));
    }

    #[test]
    fn test_has_name_is_case_insensitive() {
        let food: FoodRecord = serde_json::from_value(json!({ "name": "Iced Coffee" })).unwrap();
        assert!(food.has_name("iced coffee"));
        assert!(food.has_name("  ICED COFFEE "));
        assert!(!food.has_name("iced"));
    }
}
