// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the nutrition lookup server. Configuration is
//! environment-only; command-line flags on the binaries override it.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
