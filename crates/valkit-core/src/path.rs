//! Field path utilities
//!
//! Paths reported by a validator carry literal indices (`items[3].name`).
//! Message lookups key on the normalized form instead, where every numeric
//! index collapses to `[]`, so one registration covers every element.
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

fn index_regex() -> &'static Regex {
    static INDEX_REGEX: OnceLock<Regex> = OnceLock::new();
    INDEX_REGEX.get_or_init(|| Regex::new(r"\[([0-9]+)\]").expect("index pattern is valid"))
}

fn dots_regex() -> &'static Regex {
    static DOTS_REGEX: OnceLock<Regex> = OnceLock::new();
    DOTS_REGEX.get_or_init(|| Regex::new(r"\.+").expect("dots pattern is valid"))
}

/// Normalize a field path into its registry lookup key.
///
/// Whitespace is removed entirely, every `[<digits>]` becomes `[]` and runs
/// of `.` collapse into one. The function is total and idempotent.
///
/// ```rust
/// use valkit_core::path::normalize;
///
/// assert_eq!(normalize("users[0].addresses[12].street"), "users[].addresses[].street");
/// assert_eq!(normalize(" a [1] .. b "), "a[].b");
/// ```
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let generic = index_regex().replace_all(&compact, "[]");
    dots_regex().replace_all(&generic, ".").into_owned()
}

/// Drop the root type segment from a type locator.
///
/// `User.Addresses[0].Street` becomes `Addresses[0].Street`. A locator
/// without any dot is returned as is.
pub fn strip_root(locator: &str) -> &str {
    match locator.split_once('.') {
        Some((_, rest)) => rest,
        None => locator,
    }
}

/// First numeric index found in a path, if any.
pub fn first_index(path: &str) -> Option<usize> {
    index_regex()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_indices() {
        assert_eq!(normalize("users[0].addresses[12].street"), "users[].addresses[].street");
        assert_eq!(normalize("users[1].addresses[2].street"), "users[].addresses[].street");
        assert_eq!(normalize("matrix[0][1]"), "matrix[][]");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
        assert_eq!(normalize("  name  "), "name");
        assert_eq!(normalize("user . profile [ 3 ] . name"), "user.profile[].name");
    }

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize("a..b...c"), "a.b.c");
        assert_eq!(normalize("items[0]..name"), "items[].name");
    }

    #[test]
    fn test_normalize_keeps_non_numeric_keys() {
        assert_eq!(normalize("metadata[key].value"), "metadata[key].value");
        assert_eq!(normalize("items[].name"), "items[].name");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["users[0].name", " a . . b ", "x[10][2]..y", "plain", ""] {
            let once = normalize(path);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_strip_root() {
        assert_eq!(strip_root("User.Addresses[0].Street"), "Addresses[0].Street");
        assert_eq!(strip_root("User.Name"), "Name");
        assert_eq!(strip_root("User"), "User");
    }

    #[test]
    fn test_first_index() {
        assert_eq!(first_index("users[2].name"), Some(2));
        assert_eq!(first_index("users[15].addresses[3]"), Some(15));
        assert_eq!(first_index("users.name"), None);
        assert_eq!(first_index("users[abc]"), None);
        assert_eq!(first_index("users[]"), None);
    }
}
