//! Valkit Catalog - file based message configuration
//!
//! Loads message catalogs from YAML or JSON files and applies them to a
//! [`valkit_core::Validator`]. Several files can be layered, for example a
//! base catalog followed by a locale or tenant override.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use valkit_catalog::{CatalogLoader, Format};
//! use valkit_core::FieldFailure;
//!
//! let content = r#"
//! constraints:
//!   required: "{field} is required"
//! params:
//!   appName: MyApp
//! "#;
//!
//! let catalog = CatalogLoader::new().parse_str(content, Format::Yaml, Path::new("en.yaml"))?;
//! let validator = catalog.to_validator();
//!
//! let error = validator.resolve(&FieldFailure::new("email", "email", "required"), None);
//! assert_eq!(error.message, "email is required");
//! # Ok::<(), valkit_catalog::CatalogError>(())
//! ```
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod error;
pub mod format;
pub mod loader;

pub use catalog::{MessageCatalog, PathMessages};
pub use error::{CatalogError, CatalogResult};
pub use format::Format;
pub use loader::CatalogLoader;
