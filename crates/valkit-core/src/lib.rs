//! Valkit Core - message resolution for struct validation errors
//!
//! Given the raw failures reported by a constraint validator, this crate
//! produces the final, human-readable error messages.
//!
//! # Main Components
//!
//! - **Paths** ([`path`]): normalization of field paths into lookup keys
//! - **Templates** ([`template`]): positional, named and custom placeholders
//!   with `{{escapes}}`
//! - **Registry** ([`messages`]): messages keyed by path and constraint
//! - **Shapes** ([`shape`], [`annotation`]): per-field message overrides
//!   declared on type descriptors
//! - **Validator** ([`validator`]): tiered resolution into [`ValidationError`]s
//!
//! # Example
//!
//! ```rust
//! use valkit_core::{FieldFailure, Validator};
//!
//! let mut validator = Validator::new();
//! validator
//!     .set_constraint_default("required", "{field} is required")
//!     .set_constraint_message("items[0].name", "min", "Item names need {param}+ characters");
//!
//! let failures = vec![
//!     FieldFailure::new("email", "email", "required"),
//!     FieldFailure::new("name", "items[4].name", "min").with_param("3"),
//! ];
//!
//! let errors = validator.resolve_all(&failures, None);
//! assert_eq!(errors.errors[0].message, "email is required");
//! assert_eq!(errors.errors[1].message, "Item names need 3+ characters");
//! ```
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

pub mod annotation;
pub mod constraint;
pub mod error;
pub mod failure;
pub mod messages;
pub mod path;
pub mod presets;
pub mod report;
pub mod shape;
pub mod template;
pub mod validator;

// Re-export commonly used types for convenience
pub use constraint::Constraint;
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use failure::{FailureSource, FieldFailure};
pub use messages::{MessageConfig, MessageRegistry};
pub use presets::PasswordOptions;
pub use report::{DefaultErrorFormatter, ErrorFormatter, ErrorResponse};
pub use shape::{Describe, FieldKind, FieldShape, ShapeRef, TypeShape};
pub use template::{interpolate, CustomParams};
pub use validator::{MessageSource, Validator, DEFAULT_MESSAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
