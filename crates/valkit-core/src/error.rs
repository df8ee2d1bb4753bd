//! Validation error types returned to callers
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A resolved validation failure for a single field
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Leaf field name
    pub field: String,
    /// Path to the field, with literal indices (`items[2].name`)
    pub path: String,
    /// Human-readable error message
    pub message: String,
    /// Constraint that failed (e.g. "required", "min")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub constraint: String,
    /// Constraint parameter (e.g. "5" for min=5)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
    /// Value that failed validation
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub actual: Value,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationError ({} | {}): {}",
            self.path, self.constraint, self.message
        )
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Ordered collection of validation errors, in the order the failures were
/// reported
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            write!(f, "{};", error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Group errors by their path. Each group keeps the original order.
    pub fn group_by_path(&self) -> BTreeMap<String, ValidationErrors> {
        let mut grouped: BTreeMap<String, ValidationErrors> = BTreeMap::new();
        for error in &self.errors {
            grouped.entry(error.path.clone()).or_default().add(error.clone());
        }
        grouped
    }

    /// All errors reported for exactly `path`
    pub fn errors_for_path(&self, path: &str) -> ValidationErrors {
        self.errors
            .iter()
            .filter(|error| error.path == path)
            .cloned()
            .collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
