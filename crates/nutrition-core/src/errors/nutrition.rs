// ABOUTME: Domain errors for food search, unit handling, and nutrition scaling
// ABOUTME: Converts into AppError so handlers can propagate with `?`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::models::ServingUnit;

/// Failures raised while resolving and scaling a nutrition request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    /// Query missing, blank, or otherwise malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Quantity is not positive, not finite, or overflows when scaled
    #[error("Quantity must be a positive number in range, got {quantity}")]
    InvalidQuantity {
        /// Rejected quantity
        quantity: f64,
    },

    /// Unit string is not one of the supported measurement units
    #[error("Unsupported unit '{unit}' (expected one of g, ml, oz, cups)")]
    UnknownUnit {
        /// Rejected unit string
        unit: String,
    },

    /// Requested unit belongs to the other unit system
    #[error("Please use '{expected}' for {} foods like {food}", .expected.food_kind())]
    UnitMismatch {
        /// Name of the matched food
        food: String,
        /// Unit system the food is defined in
        expected: ServingUnit,
        /// Unit the caller asked for
        requested: String,
    },

    /// No catalog entry matched the query
    #[error("No food found matching '{query}'")]
    FoodNotFound {
        /// Query as received
        query: String,
    },
}

impl NutritionError {
    /// Create a "food not found" error
    #[must_use]
    pub fn food_not_found(query: impl Into<String>) -> Self {
        Self::FoodNotFound {
            query: query.into(),
        }
    }

    /// Error code this failure maps to at the HTTP boundary
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) | Self::UnknownUnit { .. } => ErrorCode::InvalidInput,
            Self::InvalidQuantity { .. } => ErrorCode::ValueOutOfRange,
            Self::UnitMismatch { .. } => ErrorCode::UnitMismatch,
            Self::FoodNotFound { .. } => ErrorCode::ResourceNotFound,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
