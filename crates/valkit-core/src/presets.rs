//! Ready-made messages for common custom constraints
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Password policy enforced by a `password` constraint.
///
/// The check itself belongs to the validator running the constraint; this
/// type only describes the policy so a matching message can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl PasswordOptions {
    /// Message describing every requirement of the policy
    pub fn message(&self) -> String {
        let mut message = format!("Password must be at least {} characters", self.min_length);

        let requirements: Vec<&str> = [
            (self.require_uppercase, "at least one uppercase letter"),
            (self.require_lowercase, "at least one lowercase letter"),
            (self.require_digit, "at least one number"),
            (self.require_special, "at least one special character"),
        ]
        .into_iter()
        .filter_map(|(enabled, text)| enabled.then_some(text))
        .collect();

        if let Some((last, rest)) = requirements.split_last() {
            message.push_str(" and contain ");
            if !rest.is_empty() {
                message.push_str(&rest.join(", "));
                message.push_str(" and ");
            }
            message.push_str(last);
        }

        message
    }
}
