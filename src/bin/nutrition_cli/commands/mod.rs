// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: Provides lookup and catalog inspection commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod lookup;
