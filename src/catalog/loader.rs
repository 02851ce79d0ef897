// ABOUTME: Reads the catalog JSON document from disk into a FoodCatalog
// ABOUTME: Handles BOM/UTF-16 decoding, both document shapes, and per-record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog loading
//!
//! Accepted documents are `{"foods": [...]}` or a bare `[...]`, encoded as
//! UTF-8 (BOM optional) or UTF-16 with a BOM. Records are checked one by one:
//! a bad record is skipped and reported, it never fails the whole load.

use std::fs;
use std::path::Path;

use nutrition_core::errors::CatalogError;
use nutrition_core::models::FoodRecord;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::FoodCatalog;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// A record that did not make it into the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Position in the document's food array
    pub index: usize,
    /// Name, when the record had a readable one
    pub name: Option<String>,
    /// Why it was rejected
    pub problems: Vec<String>,
}

/// Outcome of a successful load
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Accepted foods
    pub catalog: FoodCatalog,
    /// Skipped records
    pub rejected: Vec<RejectedRecord>,
}

/// Load and validate a catalog file
///
/// # Errors
///
/// Returns a `CatalogError` when the file cannot be read, decoded, or parsed,
/// or when the JSON has neither accepted shape
pub fn load(path: &Path) -> Result<LoadReport, CatalogError> {
    let bytes = fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_document(&bytes, path)?;

    info!(
        path = %path.display(),
        foods = report.catalog.len(),
        rejected = report.rejected.len(),
        "Loaded food catalog"
    );

    Ok(report)
}

/// Load a catalog, degrading to an empty one on failure
///
/// Used at server startup where a broken catalog must not stop the process.
#[must_use]
pub fn load_or_empty(path: &Path) -> FoodCatalog {
    match load(path) {
        Ok(report) => report.catalog,
        Err(e) => {
            error!("{e}; starting with an empty catalog");
            FoodCatalog::empty()
        }
    }
}

/// Decode and validate catalog bytes; `path` is only used for messages
///
/// # Errors
///
/// Returns a `CatalogError` for undecodable bytes, invalid JSON, or an
/// unsupported document shape
pub fn parse_document(bytes: &[u8], path: &Path) -> Result<LoadReport, CatalogError> {
    let text = decode(bytes, path)?;

    let document: Value = serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("foods") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(CatalogError::UnsupportedShape {
                    path: path.to_path_buf(),
                })
            }
        },
        _ => {
            return Err(CatalogError::UnsupportedShape {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(validate_entries(entries))
}

fn validate_entries(entries: Vec<Value>) -> LoadReport {
    let mut accepted = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let problems = match serde_json::from_value::<FoodRecord>(entry) {
            Err(e) => vec![e.to_string()],
            Ok(food) => {
                let problems = food.validate();
                if problems.is_empty() {
                    accepted.push((index, food));
                    continue;
                }
                problems
            }
        };

        reject(&mut rejected, index, name, problems);
    }

    let (indices, foods): (Vec<usize>, Vec<FoodRecord>) = accepted.into_iter().unzip();
    let (catalog, duplicates) = FoodCatalog::deduplicated(foods);
    for (position, food) in duplicates {
        reject(
            &mut rejected,
            indices[position],
            Some(food.name),
            vec!["duplicate of an earlier record".to_owned()],
        );
    }
    rejected.sort_by_key(|record| record.index);

    LoadReport { catalog, rejected }
}

fn reject(
    rejected: &mut Vec<RejectedRecord>,
    index: usize,
    name: Option<String>,
    problems: Vec<String>,
) {
    warn!(
        index,
        name = name.as_deref().unwrap_or("<unnamed>"),
        problems = %problems.join("; "),
        "Skipping invalid food record"
    );
    rejected.push(RejectedRecord {
        index,
        name,
        problems,
    });
}

fn decode(bytes: &[u8], path: &Path) -> Result<String, CatalogError> {
    let encoding_error = |reason: String| CatalogError::Encoding {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8(rest.to_vec()).map_err(|e| encoding_error(e.to_string()));
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes).map_err(encoding_error);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes).map_err(encoding_error);
    }

    String::from_utf8(bytes.to_vec()).map_err(|e| encoding_error(e.to_string()))
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err("UTF-16 data has an odd number of bytes".to_owned());
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| e.to_string())
}
