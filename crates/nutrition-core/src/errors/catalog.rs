// ABOUTME: Errors raised while reading and decoding the food catalog file
// ABOUTME: The server degrades to an empty catalog on any of these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Catalog load failures
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be opened or read
    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON
    #[error("Catalog file {} is not valid JSON: {source}", path.display())]
    Parse {
        /// Catalog path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// File bytes are not decodable text
    #[error("Catalog file {} has an unsupported encoding: {reason}", path.display())]
    Encoding {
        /// Catalog path
        path: PathBuf,
        /// What went wrong while decoding
        reason: String,
    },

    /// JSON is neither `{"foods": [...]}` nor a bare array
    #[error("Catalog file {} must hold an array of foods or an object with a \"foods\" array", path.display())]
    UnsupportedShape {
        /// Catalog path
        path: PathBuf,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Io { .. } | CatalogError::Encoding { .. } => ErrorCode::StorageError,
            CatalogError::Parse { .. } | CatalogError::UnsupportedShape { .. } => {
                ErrorCode::SerializationError
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
