// ABOUTME: Unit systems for stored servings and requested quantities
// ABOUTME: Parses request units and converts them to grams or milliliters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::nutrition::{ML_PER_CUP, ML_PER_FL_OZ};
use crate::errors::NutritionError;

/// Unit a food's nutrients are defined against; also names a unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServingUnit {
    /// Mass, grams
    #[serde(rename = "g", alias = "G", alias = "gram", alias = "grams")]
    Grams,
    /// Volume, milliliters
    #[serde(rename = "ml", alias = "ML", alias = "mL", alias = "milliliters")]
    Milliliters,
}

impl ServingUnit {
    /// Short unit symbol
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
        }
    }

    /// Food kind this unit system implies, used in user-facing messages
    #[must_use]
    pub const fn food_kind(self) -> &'static str {
        match self {
            Self::Grams => "solid",
            Self::Milliliters => "liquid",
        }
    }
}

impl fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit accepted on a nutrition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliters,
    /// US fluid ounces
    #[serde(rename = "oz")]
    FluidOunces,
    /// US cups
    #[serde(rename = "cups")]
    Cups,
}

impl MeasurementUnit {
    /// Parse a request unit, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::UnknownUnit` for anything outside g, ml, oz, cups
    /// and their spelled-out forms.
    pub fn parse(raw: &str) -> Result<Self, NutritionError> {
        match raw.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::Grams),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Self::Milliliters)
            }
            "oz" | "fl oz" | "floz" | "fl_oz" | "ounce" | "ounces" => Ok(Self::FluidOunces),
            "cup" | "cups" => Ok(Self::Cups),
            _ => Err(NutritionError::UnknownUnit {
                unit: raw.to_owned(),
            }),
        }
    }

    /// Unit system this unit measures in
    #[must_use]
    pub const fn system(self) -> ServingUnit {
        match self {
            Self::Grams => ServingUnit::Grams,
            Self::Milliliters | Self::FluidOunces | Self::Cups => ServingUnit::Milliliters,
        }
    }

    /// Convert an amount in this unit to the base unit of its system
    #[must_use]
    pub fn to_base(self, amount: f64) -> f64 {
        match self {
            Self::Grams | Self::Milliliters => amount,
            Self::FluidOunces => amount * ML_PER_FL_OZ,
            Self::Cups => amount * ML_PER_CUP,
        }
    }

    /// Short unit symbol as echoed back to clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::FluidOunces => "oz",
            Self::Cups => "cups",
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
