//! Message template interpolation
//!
//! Templates support three kinds of placeholders:
//!
//! - **Positional**: `{0}`, `{1}`, ... resolved against the positional list.
//!   Multi-digit indices must not start with `0`, so `{007}` stays literal.
//! - **Named**: `{field}`, `{value}` and `{param}` map to positions 0, 1 and 2.
//! - **Custom**: any name supplied through [`CustomParams`] overlays. Custom
//!   names always win over the built-in ones.
//!
//! Double braces escape a placeholder: `{{name}}` renders as `{name}` and is
//! never substituted. Names starting with a digit (`{0name}`) are never
//! treated as named parameters.
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Names bound to positions 0, 1 and 2 of the positional list.
pub const BUILTIN_NAMES: [&str; 3] = ["field", "value", "param"];

const SENTINEL_OPEN: char = '\u{E000}';
const SENTINEL_CLOSE: char = '\u{E001}';

fn escaped_regex() -> &'static Regex {
    static ESCAPED_REGEX: OnceLock<Regex> = OnceLock::new();
    ESCAPED_REGEX.get_or_init(|| Regex::new(r"\{\{([^{}]*?)\}\}").expect("escape pattern is valid"))
}

fn named_regex() -> &'static Regex {
    static NAMED_REGEX: OnceLock<Regex> = OnceLock::new();
    NAMED_REGEX.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("named pattern is valid"))
}

fn positional_regex() -> &'static Regex {
    static POSITIONAL_REGEX: OnceLock<Regex> = OnceLock::new();
    POSITIONAL_REGEX.get_or_init(|| {
        Regex::new(r"\{([0-9])\}|\{([1-9][0-9]+)\}").expect("positional pattern is valid")
    })
}

/// Named values available to message templates.
///
/// A resolution receives a list of overlays; on a name collision the later
/// overlay wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomParams(HashMap<String, Value>);

impl CustomParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Option<Value>
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into())
    }

    /// Builder form of [`CustomParams::insert`]
    pub fn with<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for CustomParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Render a parameter value the way it appears inside a message.
///
/// Strings are inserted raw, `null` renders as nothing and containers fall
/// back to compact JSON.
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Standard positional parameters for a validation failure.
///
/// Position 0 is the field name, 1 the offending value and 2 the constraint
/// parameter (`null` when the constraint takes none).
pub fn validation_params(field: &str, actual: &Value, param: &str) -> Vec<Value> {
    let param = if param.is_empty() {
        Value::Null
    } else {
        Value::String(param.to_string())
    };
    vec![Value::String(field.to_string()), actual.clone(), param]
}

/// Interpolate `template` with positional values and custom overlays.
///
/// Interpolation never fails: unknown names, out-of-range indices and
/// malformed placeholders are left as literal text.
///
/// ```rust
/// use serde_json::json;
/// use valkit_core::template::{interpolate, CustomParams};
///
/// let params = CustomParams::new().with("appName", "X").with("version", "1.0");
/// assert_eq!(interpolate("{{appName}} v{version}", &[], &[&params]), "{appName} v1.0");
/// let positional = [json!("age"), json!(3), json!(18)];
/// assert_eq!(interpolate("{0} needs {param}", &positional, &[]), "age needs 18");
/// ```
pub fn interpolate(template: &str, positional: &[Value], overlays: &[&CustomParams]) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    // Escapes are swapped out first so nothing below can substitute them.
    let mut escapes: Vec<(String, String)> = Vec::new();
    let shielded = escaped_regex().replace_all(template, |caps: &Captures| {
        let sentinel = format!("{}{}{}", SENTINEL_OPEN, escapes.len(), SENTINEL_CLOSE);
        escapes.push((sentinel.clone(), format!("{{{}}}", &caps[1])));
        sentinel
    });

    let mut named: HashMap<&str, &Value> = HashMap::new();
    for (name, value) in BUILTIN_NAMES.iter().zip(positional) {
        named.insert(*name, value);
    }
    for overlay in overlays {
        for (name, value) in overlay.iter() {
            named.insert(name, value);
        }
    }

    let with_names = named_regex().replace_all(&shielded, |caps: &Captures| {
        let name = &caps[1];
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return caps[0].to_string();
        }
        match named.get(name) {
            Some(value) => render_value(value).into_owned(),
            None => caps[0].to_string(),
        }
    });

    let with_positions = positional_regex().replace_all(&with_names, |caps: &Captures| {
        let index = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().parse::<usize>().ok());
        match index.and_then(|i| positional.get(i)) {
            Some(value) => render_value(value).into_owned(),
            None => caps[0].to_string(),
        }
    });

    let mut result = with_positions.into_owned();
    for (sentinel, literal) in &escapes {
        result = result.replacen(sentinel.as_str(), literal, 1);
    }
    result
}
