//! Constraint names
//!
//! Failures identify the violated rule by its tag name. [`Constraint`] gives
//! the common tags a typed spelling while still accepting any other name.
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Constraint tag as reported by the external validator.
///
/// Equality and hashing go by tag name, so `Other("min")` equals `Min`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Constraint {
    Required,
    Min,
    Max,
    Len,
    Email,
    Eq,
    Ne,
    OneOf,
    Url,
    Password,
    /// Any tag without a dedicated variant
    Other(String),
}

impl Constraint {
    /// Tag name used in failure records and message keys
    pub fn as_str(&self) -> &str {
        match self {
            Constraint::Required => "required",
            Constraint::Min => "min",
            Constraint::Max => "max",
            Constraint::Len => "len",
            Constraint::Email => "email",
            Constraint::Eq => "eq",
            Constraint::Ne => "ne",
            Constraint::OneOf => "oneof",
            Constraint::Url => "url",
            Constraint::Password => "password",
            Constraint::Other(name) => name,
        }
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Constraint {
    fn from(name: &str) -> Self {
        match name {
            "required" => Constraint::Required,
            "min" => Constraint::Min,
            "max" => Constraint::Max,
            "len" => Constraint::Len,
            "email" => Constraint::Email,
            "eq" => Constraint::Eq,
            "ne" => Constraint::Ne,
            "oneof" => Constraint::OneOf,
            "url" => Constraint::Url,
            "password" => Constraint::Password,
            other => Constraint::Other(other.to_string()),
        }
    }
}

impl From<String> for Constraint {
    fn from(name: String) -> Self {
        Constraint::from(name.as_str())
    }
}

impl From<Constraint> for String {
    fn from(constraint: Constraint) -> Self {
        constraint.as_str().to_string()
    }
}

impl FromStr for Constraint {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Constraint::from(s))
    }
}

impl AsRef<str> for Constraint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
