//! Serializable message catalogs
//!
//! A catalog is the file form of a validator's message settings:
//!
//! ```yaml
//! default_message: "Invalid value"
//! constraints:
//!   required: "{field} is required"
//! paths:
//!   users[0].email:
//!     default: "Email is invalid"
//!     constraints:
//!       required: "Please provide an email"
//! params:
//!   appName: MyApp
//! password:
//!   min_length: 12
//! ```
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use valkit_core::path::normalize;
use valkit_core::{PasswordOptions, Validator};

/// Message settings for a validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageCatalog {
    /// Global default message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
    /// Default message per constraint
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constraints: BTreeMap<String, String>,
    /// Messages per normalized field path.
    ///
    /// Keys read from a file are normalized as they are read; entries that
    /// normalize to the same key are merged in document order.
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "deserialize_paths"
    )]
    pub paths: BTreeMap<String, PathMessages>,
    /// Custom template parameters
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
    /// Password policy whose description becomes the `password` default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordOptions>,
}

/// Messages registered for one path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathMessages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constraints: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Register every setting on `validator`.
    ///
    /// Settings go through the validator's own setters, so paths are
    /// normalized and existing entries with the same key are replaced. An
    /// explicit `password` constraint message wins over the policy message.
    pub fn apply(&self, validator: &mut Validator) {
        if let Some(message) = &self.default_message {
            validator.set_default_message(message.as_str());
        }
        if let Some(options) = &self.password {
            validator.use_password_message(options);
        }
        for (constraint, template) in &self.constraints {
            validator.set_constraint_default(constraint, template.as_str());
        }
        for (path, messages) in &self.paths {
            if let Some(default) = &messages.default {
                validator.set_path_default_message(path, default.as_str());
            }
            for (constraint, template) in &messages.constraints {
                validator.set_constraint_message(path, constraint, template.as_str());
            }
        }
        for (name, value) in &self.params {
            validator.add_custom_param(name.as_str(), value.clone());
        }

        log::debug!(
            "applied catalog: {} constraint defaults, {} paths, {} params",
            self.constraints.len(),
            self.paths.len(),
            self.params.len()
        );
    }

    /// Fresh validator configured from this catalog
    pub fn to_validator(&self) -> Validator {
        let mut validator = Validator::new();
        self.apply(&mut validator);
        validator
    }

    /// Fold `other` into this catalog; `other` wins on every collision
    pub fn merge(&mut self, other: MessageCatalog) {
        if other.default_message.is_some() {
            self.default_message = other.default_message;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        self.constraints.extend(other.constraints);

        // Catalogs built in code may hold keys that were never normalized.
        for (path, messages) in std::mem::take(&mut self.paths) {
            merge_path(&mut self.paths, &path, messages);
        }
        for (path, messages) in other.paths {
            merge_path(&mut self.paths, &path, messages);
        }

        self.params.extend(other.params);
    }
}

impl PathMessages {
    fn merge(&mut self, other: PathMessages) {
        if other.default.is_some() {
            self.default = other.default;
        }
        self.constraints.extend(other.constraints);
    }
}

fn merge_path(paths: &mut BTreeMap<String, PathMessages>, path: &str, messages: PathMessages) {
    paths.entry(normalize(path)).or_default().merge(messages);
}

fn deserialize_paths<'de, D>(deserializer: D) -> Result<BTreeMap<String, PathMessages>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathsVisitor;

    impl<'de> Visitor<'de> for PathsVisitor {
        type Value = BTreeMap<String, PathMessages>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of field paths to messages")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut paths = BTreeMap::new();
            while let Some((path, messages)) = access.next_entry::<String, PathMessages>()? {
                merge_path(&mut paths, &path, messages);
            }
            Ok(paths)
        }
    }

    deserializer.deserialize_map(PathsVisitor)
}
