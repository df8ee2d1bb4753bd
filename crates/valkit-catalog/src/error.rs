//! Error types for catalog loading
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while reading message catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File I/O errors
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML catalog '{path}': {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON catalog '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Extension is not one of .yaml, .yml or .json
    #[error("Unsupported catalog format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

impl CatalogError {
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source: error,
        }
    }

    pub fn yaml(path: &Path, error: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.to_path_buf(),
            source: error,
        }
    }

    pub fn json(path: &Path, error: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source: error,
        }
    }

    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    /// File the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::UnsupportedFormat { path } => path,
        }
    }
}
