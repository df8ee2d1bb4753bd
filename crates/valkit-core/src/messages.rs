//! Path-keyed message registry
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::path::normalize;
use crate::template::{interpolate, CustomParams};
use serde_json::Value;
use std::collections::HashMap;

/// Messages registered for one normalized path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageConfig {
    /// Used for any constraint without its own template
    pub default: Option<String>,
    /// Constraint-specific templates
    pub constraints: HashMap<String, String>,
}

impl MessageConfig {
    /// Template for `constraint`, falling back to the path default.
    ///
    /// Empty templates count as absent.
    pub fn template_for(&self, constraint: &str) -> Option<&str> {
        self.constraints
            .get(constraint)
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
            .or_else(|| self.default.as_deref().filter(|msg| !msg.is_empty()))
    }
}

/// Message templates keyed by normalized field path.
///
/// Both setters normalize the path, so `items[0].name` and `items[3].name`
/// share a single entry. Registering the same key twice replaces the earlier
/// template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRegistry {
    entries: HashMap<String, MessageConfig>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for a path and constraint combination
    pub fn set_constraint_message<C, M>(&mut self, path: &str, constraint: C, template: M)
    where
        C: AsRef<str>,
        M: Into<String>,
    {
        self.entries
            .entry(normalize(path))
            .or_default()
            .constraints
            .insert(constraint.as_ref().to_string(), template.into());
    }

    /// Register the fallback template for a path
    pub fn set_default_message<M: Into<String>>(&mut self, path: &str, template: M) {
        self.entries.entry(normalize(path)).or_default().default = Some(template.into());
    }

    /// Resolve and interpolate the template for `path` and `constraint`.
    ///
    /// Returns `None` when the registry has nothing for this pair or the
    /// message interpolates to nothing, which tells the caller to try the
    /// next resolution tier.
    pub fn resolve(
        &self,
        path: &str,
        constraint: &str,
        positional: &[Value],
        overlays: &[&CustomParams],
    ) -> Option<String> {
        self.get(path)
            .and_then(|config| config.template_for(constraint))
            .map(|template| interpolate(template, positional, overlays))
            .filter(|message| !message.is_empty())
    }

    /// Entry for a path, normalizing it first
    pub fn get(&self, path: &str) -> Option<&MessageConfig> {
        self.entries.get(&normalize(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registered message
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
