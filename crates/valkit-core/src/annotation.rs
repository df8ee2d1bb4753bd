//! Structural message overrides
//!
//! A failure's locator (`User.Items[2].Contacts[0].Email`) names the root type
//! followed by the field chain that led to the failing value. Walking that
//! chain through a [`TypeShape`] finds the field the failure came from, whose
//! `errmsg` tags may carry a message override.
//!
//! Locators and shapes are supplied independently and may disagree. Every
//! mismatch resolves to `None`; nothing here panics.
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::shape::{constraint_tag, FieldKind, FieldShape, TypeShape, MESSAGE_TAG};

/// One dotted locator segment: a field name plus any bracket keys
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment<'a> {
    name: &'a str,
    keys: Vec<&'a str>,
}

impl<'a> Segment<'a> {
    /// Parse `Name`, `Name[0]`, `Name[key]` or `Name[0][key]`
    fn parse(raw: &'a str) -> Option<Self> {
        let (name, mut rest) = match raw.find('[') {
            Some(pos) => (&raw[..pos], &raw[pos..]),
            None => (raw, ""),
        };
        if name.is_empty() {
            return None;
        }

        let mut keys = Vec::new();
        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            let key = &inner[..close];
            if key.is_empty() {
                return None;
            }
            keys.push(key);
            rest = &inner[close + 1..];
        }

        Some(Self { name, keys })
    }
}

/// Split a locator on dots that are not inside brackets, so map keys such as
/// `Labels[app.kubernetes.io]` stay in one segment.
pub(crate) fn split_segments(locator: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (pos, ch) in locator.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&locator[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    segments.push(&locator[start..]);
    segments
}

fn base_name(name: &str) -> &str {
    match name.find('[') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

fn is_index(key: &str) -> bool {
    key.bytes().all(|b| b.is_ascii_digit())
}

/// Step through one bracket key: into a sequence element (numeric keys only)
/// or a map value (any key).
fn step_into<'a>(kind: &'a FieldKind, key: &str) -> Option<&'a FieldKind> {
    match kind.unwrap_optional() {
        FieldKind::Sequence(element) if is_index(key) => Some(element.as_ref()),
        FieldKind::Map(value) => Some(value.as_ref()),
        _ => None,
    }
}

/// Locate the field a failure originated from.
///
/// The first locator segment is the root type name and is skipped. When the
/// locator has no further segments, `leaf` is looked up directly on `root`.
/// The final segment names the leaf field; if it carries bracket keys the
/// failure is on an element and the container field is returned.
///
/// A non-empty `leaf` that disagrees with the final segment is a mismatch.
pub fn find_field<'a>(root: &'a TypeShape, locator: &str, leaf: &str) -> Option<&'a FieldShape> {
    let segments = split_segments(locator);
    if segments.len() <= 1 {
        return root.field_by_name(base_name(leaf));
    }

    let last = segments.len() - 1;
    let mut current = root;

    for (i, raw) in segments.iter().enumerate().skip(1) {
        let segment = Segment::parse(raw)?;
        let Some(field) = current.field_by_name(segment.name) else {
            log::trace!(
                "no field '{}' on '{}' for locator '{}'",
                segment.name,
                current.name(),
                locator
            );
            return None;
        };

        if i == last {
            if !leaf.is_empty() && base_name(leaf) != segment.name {
                log::trace!("locator '{}' does not end at leaf '{}'", locator, leaf);
                return None;
            }
            return Some(field);
        }

        let mut kind = field.kind().unwrap_optional();
        for key in &segment.keys {
            kind = step_into(kind, key)?.unwrap_optional();
        }

        match kind {
            FieldKind::Record(shape) => current = shape.get(),
            _ => {
                log::trace!("segment '{}' of locator '{}' is not a record", raw, locator);
                return None;
            }
        }
    }

    None
}

/// Message override attached to a field for `constraint`.
///
/// The constraint-specific tag wins over the field-wide one. Empty tags are
/// treated as absent.
pub fn read_override<'a>(field: &'a FieldShape, constraint: &str) -> Option<&'a str> {
    field
        .get_tag(&constraint_tag(constraint))
        .filter(|msg| !msg.is_empty())
        .or_else(|| field.get_tag(MESSAGE_TAG).filter(|msg| !msg.is_empty()))
}

/// [`find_field`] followed by [`read_override`]
pub fn find_override<'a>(
    root: &'a TypeShape,
    locator: &str,
    leaf: &str,
    constraint: &str,
) -> Option<&'a str> {
    find_field(root, locator, leaf).and_then(|field| read_override(field, constraint))
}
