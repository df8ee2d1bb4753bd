//! Type descriptors for validated values
//!
//! A [`TypeShape`] lists the named fields of a record type, what each field
//! holds (a scalar, another record, a sequence, a map or an optional value)
//! and free-form metadata tags. Message overrides are stored as tags:
//!
//! - `errmsg-<constraint>`: message for one constraint on the field
//! - `errmsg`: message for any constraint on the field
//!
//! Shapes are built once per type, usually behind a `OnceLock` in a
//! [`Describe`] implementation:
//!
//! ```rust
//! use std::sync::OnceLock;
//! use valkit_core::shape::{Describe, FieldKind, FieldShape, TypeShape};
//!
//! struct Address;
//! struct User;
//!
//! impl Describe for Address {
//!     fn shape() -> &'static TypeShape {
//!         static SHAPE: OnceLock<TypeShape> = OnceLock::new();
//!         SHAPE.get_or_init(|| {
//!             TypeShape::new("Address")
//!                 .field(
//!                     FieldShape::scalar("Street")
//!                         .constraint_message("required", "Street is required"),
//!                 )
//!         })
//!     }
//! }
//!
//! impl Describe for User {
//!     fn shape() -> &'static TypeShape {
//!         static SHAPE: OnceLock<TypeShape> = OnceLock::new();
//!         SHAPE.get_or_init(|| {
//!             TypeShape::new("User")
//!                 .field(FieldShape::scalar("Name").message("Name is invalid"))
//!                 .field(FieldShape::new(
//!                     "Addresses",
//!                     FieldKind::sequence(FieldKind::of::<Address>()),
//!                 ))
//!         })
//!     }
//! }
//!
//! assert_eq!(User::shape().fields().len(), 2);
//! ```
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Tag holding the field-wide message override
pub const MESSAGE_TAG: &str = "errmsg";

/// Tag holding the message override for one constraint
pub fn constraint_tag(constraint: &str) -> String {
    format!("{}-{}", MESSAGE_TAG, constraint)
}

/// Types that can describe their own shape
pub trait Describe {
    fn shape() -> &'static TypeShape;
}

/// Named record type and its fields
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShape {
    name: String,
    fields: Vec<FieldShape>,
}

impl TypeShape {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Lookups return the first field with a given name.
    pub fn field(mut self, field: FieldShape) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// One named field with its kind and metadata tags
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    name: String,
    kind: FieldKind,
    tags: BTreeMap<String, String>,
}

impl FieldShape {
    pub fn new<N: Into<String>>(name: N, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            tags: BTreeMap::new(),
        }
    }

    pub fn scalar<N: Into<String>>(name: N) -> Self {
        Self::new(name, FieldKind::Scalar)
    }

    /// Field holding a nested record
    pub fn record<N, S>(name: N, shape: S) -> Self
    where
        N: Into<String>,
        S: Into<ShapeRef>,
    {
        Self::new(name, FieldKind::Record(shape.into()))
    }

    /// Attach an arbitrary metadata tag
    pub fn tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Message used for any failed constraint on this field
    pub fn message<M: Into<String>>(self, template: M) -> Self {
        self.tag(MESSAGE_TAG, template)
    }

    /// Message used when `constraint` fails on this field
    pub fn constraint_message<C, M>(self, constraint: C, template: M) -> Self
    where
        C: AsRef<str>,
        M: Into<String>,
    {
        let key = constraint_tag(constraint.as_ref());
        self.tag(key, template)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// What a field holds
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Leaf value with no inner structure
    Scalar,
    /// Nested record
    Record(ShapeRef),
    /// Slice, array or vector of the inner kind
    Sequence(Box<FieldKind>),
    /// Map whose values have the inner kind
    Map(Box<FieldKind>),
    /// Optional or boxed value, unwrapped transparently during lookups
    Optional(Box<FieldKind>),
}

impl FieldKind {
    /// Record kind for a type implementing [`Describe`]
    pub fn of<T: Describe>() -> Self {
        FieldKind::Record(ShapeRef::Static(T::shape))
    }

    pub fn record<S: Into<ShapeRef>>(shape: S) -> Self {
        FieldKind::Record(shape.into())
    }

    pub fn sequence(element: FieldKind) -> Self {
        FieldKind::Sequence(Box::new(element))
    }

    pub fn map(value: FieldKind) -> Self {
        FieldKind::Map(Box::new(value))
    }

    pub fn optional(inner: FieldKind) -> Self {
        FieldKind::Optional(Box::new(inner))
    }

    /// Strip any number of optional wrappers
    pub fn unwrap_optional(&self) -> &FieldKind {
        let mut kind = self;
        while let FieldKind::Optional(inner) = kind {
            kind = inner;
        }
        kind
    }
}

/// Reference to a record shape.
///
/// `Static` defers to a [`Describe`] implementation, which also makes
/// self-referencing types possible.
#[derive(Clone)]
pub enum ShapeRef {
    Shared(Arc<TypeShape>),
    Static(fn() -> &'static TypeShape),
}

impl ShapeRef {
    pub fn get(&self) -> &TypeShape {
        match self {
            ShapeRef::Shared(shape) => shape.as_ref(),
            ShapeRef::Static(describe) => describe(),
        }
    }
}

impl From<TypeShape> for ShapeRef {
    fn from(shape: TypeShape) -> Self {
        ShapeRef::Shared(Arc::new(shape))
    }
}

impl From<Arc<TypeShape>> for ShapeRef {
    fn from(shape: Arc<TypeShape>) -> Self {
        ShapeRef::Shared(shape)
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShapeRef::Shared(a), ShapeRef::Shared(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => std::ptr::eq(self.get(), other.get()),
        }
    }
}

// Only the name is printed so recursive shapes stay finite.
impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeRef({})", self.get().name())
    }
}
