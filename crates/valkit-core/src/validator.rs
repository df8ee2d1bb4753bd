//! Validator configuration and message resolution
//!
//! A [`Validator`] owns every message setting: the global default, the
//! per-constraint defaults, the path-keyed [`MessageRegistry`] and the custom
//! template parameters. Resolving a failure tries, in order:
//!
//! 1. a structural override on the failing field (`errmsg-<constraint>` or
//!    `errmsg` tags on its [`TypeShape`])
//! 2. the registry entry for the failure's normalized path
//! 3. the default for the constraint
//! 4. the global default
//!
//! The first tier producing a non-empty message wins. Every tier
//! interpolates with the standard parameters (`{field}`/`{0}`,
//! `{value}`/`{1}`, `{param}`/`{2}`) plus the custom parameters.
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::annotation::find_override;
use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::failure::{FailureSource, FieldFailure};
use crate::messages::MessageRegistry;
use crate::presets::PasswordOptions;
use crate::shape::{Describe, TypeShape};
use crate::template::{interpolate, validation_params, CustomParams};
use crate::Constraint;
use serde_json::Value;
use std::collections::HashMap;

/// Message used when nothing more specific is configured
pub const DEFAULT_MESSAGE: &str = "Invalid value";

/// Tier a message was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    Annotation,
    Registry,
    ConstraintDefault,
    GlobalDefault,
}

/// Message configuration and resolution entry point
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    default_message: String,
    constraint_defaults: HashMap<String, String>,
    messages: MessageRegistry,
    custom_params: CustomParams,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_string(),
            constraint_defaults: HashMap::new(),
            messages: MessageRegistry::new(),
            custom_params: CustomParams::new(),
        }
    }

    /// Independent copy of this configuration.
    ///
    /// Changes to the copy never reach the base, and the other way around.
    pub fn derive(&self) -> Self {
        self.clone()
    }

    /// Copy of this configuration using a different message registry.
    ///
    /// The global default, constraint defaults and custom parameters are
    /// copied; the registry is replaced entirely.
    pub fn derive_with_messages(&self, messages: MessageRegistry) -> Self {
        Self {
            default_message: self.default_message.clone(),
            constraint_defaults: self.constraint_defaults.clone(),
            messages,
            custom_params: self.custom_params.clone(),
        }
    }

    /// Set the message used when no other tier matches
    pub fn set_default_message<M: Into<String>>(&mut self, template: M) -> &mut Self {
        self.default_message = template.into();
        self
    }

    /// Set the default message for a constraint, e.g. "required"
    pub fn set_constraint_default<C, M>(&mut self, constraint: C, template: M) -> &mut Self
    where
        C: AsRef<str>,
        M: Into<String>,
    {
        self.constraint_defaults
            .insert(constraint.as_ref().to_string(), template.into());
        self
    }

    /// Set the message for a path and constraint combination.
    ///
    /// `set_constraint_message("user.profile.firstname", "required", "First name is required")`
    pub fn set_constraint_message<C, M>(
        &mut self,
        path: &str,
        constraint: C,
        template: M,
    ) -> &mut Self
    where
        C: AsRef<str>,
        M: Into<String>,
    {
        self.messages.set_constraint_message(path, constraint, template);
        self
    }

    /// Set the message for a path when its constraint has no message of its own
    pub fn set_path_default_message<M>(&mut self, path: &str, template: M) -> &mut Self
    where
        M: Into<String>,
    {
        self.messages.set_default_message(path, template);
        self
    }

    /// Add a parameter usable as `{name}` in every message
    pub fn add_custom_param<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.custom_params.insert(name, value);
        self
    }

    pub fn remove_custom_param(&mut self, name: &str) -> &mut Self {
        self.custom_params.remove(name);
        self
    }

    /// Register the policy description as the `password` constraint default
    pub fn use_password_message(&mut self, options: &PasswordOptions) -> &mut Self {
        self.set_constraint_default(Constraint::Password, options.message())
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    pub fn constraint_default(&self, constraint: &str) -> Option<&str> {
        self.constraint_defaults.get(constraint).map(String::as_str)
    }

    pub fn messages(&self) -> &MessageRegistry {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageRegistry {
        &mut self.messages
    }

    pub fn custom_params(&self) -> &CustomParams {
        &self.custom_params
    }

    /// Resolve the final error for one failure.
    ///
    /// `shape` describes the root type the failure's locator starts from.
    /// Without a shape or a locator the structural tier is skipped.
    pub fn resolve(&self, failure: &FieldFailure, shape: Option<&TypeShape>) -> ValidationError {
        let (message, _) = self.resolve_message(failure, shape);
        ValidationError {
            field: failure.field().to_string(),
            path: failure.path().to_string(),
            message,
            constraint: failure.constraint().to_string(),
            param: failure.param().to_string(),
            actual: failure.actual().clone(),
        }
    }

    /// Resolve every failure, keeping their order
    pub fn resolve_all<'a, I>(&self, failures: I, shape: Option<&TypeShape>) -> ValidationErrors
    where
        I: IntoIterator<Item = &'a FieldFailure>,
    {
        failures
            .into_iter()
            .map(|failure| self.resolve(failure, shape))
            .collect()
    }

    /// Message for one failure along with the tier it came from.
    ///
    /// A tier whose interpolated message is empty counts as unset and the
    /// next tier is tried. The global default is used as is.
    pub fn resolve_message(
        &self,
        failure: &FieldFailure,
        shape: Option<&TypeShape>,
    ) -> (String, MessageSource) {
        let params = validation_params(failure.field(), failure.actual(), failure.param());
        let overlays = [&self.custom_params];
        let constraint = failure.constraint();

        let annotation = || {
            shape
                .zip(failure.locator())
                .and_then(|(root, locator)| {
                    find_override(root, locator, failure.struct_field(), constraint)
                })
                .map(|template| interpolate(template, &params, &overlays))
        };
        let registry = || self.messages.resolve(failure.path(), constraint, &params, &overlays);
        let constraint_default = || {
            self.constraint_defaults
                .get(constraint)
                .map(|template| interpolate(template, &params, &overlays))
        };

        let resolved = non_empty(annotation())
            .map(|message| (message, MessageSource::Annotation))
            .or_else(|| non_empty(registry()).map(|message| (message, MessageSource::Registry)))
            .or_else(|| {
                non_empty(constraint_default())
                    .map(|message| (message, MessageSource::ConstraintDefault))
            });

        let (message, source) = resolved.unwrap_or_else(|| {
            (
                interpolate(&self.default_message, &params, &overlays),
                MessageSource::GlobalDefault,
            )
        });

        log::debug!(
            "resolved message for '{}' ({}) from {:?}",
            failure.path(),
            constraint,
            source
        );
        (message, source)
    }

    /// Resolve the failures reported by `value` against its own shape
    pub fn validate<T>(&self, value: &T) -> ValidationResult<()>
    where
        T: FailureSource + Describe,
    {
        let failures = value.failures();
        self.resolve_all(&failures, Some(T::shape())).into_result()
    }

    /// Resolve the failures reported by `value` without structural overrides
    pub fn validate_unshaped<T: FailureSource>(&self, value: &T) -> ValidationResult<()> {
        let failures = value.failures();
        self.resolve_all(&failures, None).into_result()
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|message| !message.is_empty())
}
