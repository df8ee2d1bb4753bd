//! Raw failure records produced by the external validator
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::annotation::split_segments;
use crate::path::strip_root;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One failed constraint on one field.
///
/// The `path` is what callers see (`items[2].name`); the optional `locator`
/// is the type-system location (`Order.Items[2].Name`) used to find
/// structural message overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFailure {
    field: String,
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    struct_field: Option<String>,
    constraint: String,
    #[serde(default)]
    param: String,
    #[serde(default)]
    actual: Value,
}

impl FieldFailure {
    /// Create a failure for `field` at `path` violating `constraint`
    pub fn new<F, P, C>(field: F, path: P, constraint: C) -> Self
    where
        F: Into<String>,
        P: Into<String>,
        C: AsRef<str>,
    {
        Self {
            field: field.into(),
            path: path.into(),
            locator: None,
            struct_field: None,
            constraint: constraint.as_ref().to_string(),
            param: String::new(),
            actual: Value::Null,
        }
    }

    /// Create a failure from a type locator alone.
    ///
    /// The path is the locator without its root segment and the field name
    /// is the path's last segment. Dots inside brackets (`Labels[app.io]`)
    /// do not start a new segment.
    pub fn from_locator<C: AsRef<str>>(locator: &str, constraint: C) -> Self {
        let path = strip_root(locator);
        let leaf = split_segments(path).last().copied().unwrap_or(path);
        Self::new(leaf, path, constraint).with_locator(locator, leaf)
    }

    /// Attach the type locator and the leaf struct field name
    pub fn with_locator<L, S>(mut self, locator: L, struct_field: S) -> Self
    where
        L: Into<String>,
        S: Into<String>,
    {
        self.locator = Some(locator.into());
        self.struct_field = Some(struct_field.into());
        self
    }

    pub fn with_param<P: Into<String>>(mut self, param: P) -> Self {
        self.param = param.into();
        self
    }

    pub fn with_actual<V: Into<Value>>(mut self, actual: V) -> Self {
        self.actual = actual.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    /// Leaf struct field name, defaulting to the field name
    pub fn struct_field(&self) -> &str {
        self.struct_field.as_deref().unwrap_or(&self.field)
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn actual(&self) -> &Value {
        &self.actual
    }
}

/// Adapter seam for the constraint evaluator.
///
/// Implementations run whatever checks they use and report every failed
/// constraint, in evaluation order.
pub trait FailureSource {
    fn failures(&self) -> Vec<FieldFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let failure = FieldFailure::new("age", "user.age", "min")
            .with_param("18")
            .with_actual(12);

        assert_eq!(failure.field(), "age");
        assert_eq!(failure.path(), "user.age");
        assert_eq!(failure.constraint(), "min");
        assert_eq!(failure.param(), "18");
        assert_eq!(failure.actual(), &json!(12));
        assert_eq!(failure.locator(), None);
        assert_eq!(failure.struct_field(), "age");
    }

    #[test]
    fn test_from_locator() {
        let failure = FieldFailure::from_locator("User.Addresses[0].Street", "required");
        assert_eq!(failure.path(), "Addresses[0].Street");
        assert_eq!(failure.field(), "Street");
        assert_eq!(failure.locator(), Some("User.Addresses[0].Street"));
        assert_eq!(failure.struct_field(), "Street");

        let failure = FieldFailure::from_locator("User.Tags[2]", "min");
        assert_eq!(failure.path(), "Tags[2]");
        assert_eq!(failure.field(), "Tags[2]");
    }

    #[test]
    fn test_from_locator_with_dotted_key() {
        let failure = FieldFailure::from_locator("Pod.Labels[app.io]", "required");
        assert_eq!(failure.path(), "Labels[app.io]");
        assert_eq!(failure.field(), "Labels[app.io]");
        assert_eq!(failure.struct_field(), "Labels[app.io]");

        let failure = FieldFailure::from_locator("Pod.Spec.Labels[a.b].Value", "required");
        assert_eq!(failure.path(), "Spec.Labels[a.b].Value");
        assert_eq!(failure.field(), "Value");
    }

    #[test]
    fn test_deserialize_defaults() {
        let failure: FieldFailure = serde_json::from_value(json!({
            "field": "email",
            "path": "email",
            "constraint": "required"
        }))
        .unwrap();
        assert_eq!(failure.param(), "");
        assert!(failure.actual().is_null());
    }
}
