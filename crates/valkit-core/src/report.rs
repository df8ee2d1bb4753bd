//! Response shapes for reporting validation errors
//!
//! Framework bindings convert [`ValidationErrors`] into whatever body they
//! send back. [`DefaultErrorFormatter`] produces the common form:
//!
//! ```json
//! {"status": "error", "message": "Validation failed", "errors": {"email": ["Email is required"]}}
//! ```
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::error::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Converts validation errors into a serializable response body
pub trait ErrorFormatter {
    fn format(&self, errors: &ValidationErrors) -> Value;
}

/// Standard validation error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    /// Messages per path, in reporting order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        let mut by_path: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in errors {
            by_path
                .entry(error.path.clone())
                .or_default()
                .push(error.message.clone());
        }

        Self {
            status: "error".to_string(),
            message: "Validation failed".to_string(),
            errors: by_path,
        }
    }
}

/// Formats errors as an [`ErrorResponse`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorFormatter;

impl ErrorFormatter for DefaultErrorFormatter {
    fn format(&self, errors: &ValidationErrors) -> Value {
        serde_json::to_value(ErrorResponse::from_errors(errors)).unwrap_or(Value::Null)
    }
}
