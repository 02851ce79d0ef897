// ABOUTME: Core data models shared by the catalog, classifier, and scaler
// ABOUTME: Re-exports food records, serving units, and measurement units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food records and allergen flags as stored in the catalog file
pub mod food;
/// Serving units and request measurement units
pub mod units;

pub use food::{AllergenFlag, FoodRecord};
pub use units::{MeasurementUnit, ServingUnit};
