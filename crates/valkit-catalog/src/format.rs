//! Catalog file formats
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::error::{CatalogError, CatalogResult};
use std::path::Path;

/// Supported catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl Format {
    /// Format for a file extension, ignoring case
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml") {
            Some(Format::Yaml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else {
            None
        }
    }

    /// Format of a catalog file, from its extension
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CatalogError::unsupported_format(path))
    }
}
