// ABOUTME: Core types and constants for the nutrition lookup service
// ABOUTME: Foundation crate with error handling, food models, and classifier keyword tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! lookup service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Service defaults, environment variable names, and keyword tables
//! - **models**: Food records, serving units, and allergen flags

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and default keyword tables organized by domain
pub mod constants;

/// Core data models (`FoodRecord`, `ServingUnit`, `MeasurementUnit`, `AllergenFlag`)
pub mod models;
