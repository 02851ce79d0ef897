// ABOUTME: HTTP middleware for request tracing and context propagation
// ABOUTME: Provides request ID generation and span creation for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request id generation and per-request spans
pub mod tracing;

pub use self::tracing::{create_request_span, record_response, MakeRequestIdentifier, REQUEST_ID_HEADER};
