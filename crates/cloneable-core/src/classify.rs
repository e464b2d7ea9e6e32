//! Field classification: which declared fields a clone copies.
//!
//! Rules run in a fixed order and the first match wins. Anything the host
//! could not categorize is excluded, so classification never fails.

use cloneable_schema::{
    CLONE_REFERENCE_FIELD,
    node::{EntityTypeDescriptor, FieldDescriptor, FieldType},
};
use derive_more::{Deref, Display};

///
/// Exclusion
///
/// Why a field was left out of the clone.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Exclusion {
    #[display("static")]
    Static,

    #[display("transient")]
    Transient,

    #[display("collection-typed")]
    Collection,

    #[display("array-typed")]
    Array,

    #[display("unresolved type")]
    Unresolved,

    #[display("identifier")]
    Identifier,

    #[display("version")]
    Version,

    #[display("reserved clone reference")]
    CloneReference,
}

/// Return the first exclusion rule a field hits, or `None` if it is copied.
#[must_use]
pub fn exclusion(descriptor: &EntityTypeDescriptor, field: &FieldDescriptor) -> Option<Exclusion> {
    let modifiers = field.modifiers;

    if modifiers.is_static {
        return Some(Exclusion::Static);
    }
    if modifiers.is_transient {
        return Some(Exclusion::Transient);
    }

    match &field.ty {
        FieldType::Collection { .. } => return Some(Exclusion::Collection),
        FieldType::Array(_) => return Some(Exclusion::Array),
        FieldType::Unresolved(_) => return Some(Exclusion::Unresolved),
        FieldType::Scalar(_) | FieldType::Entity(_) => {}
    }

    if descriptor.is_identifier(&field.name) {
        return Some(Exclusion::Identifier);
    }
    if descriptor.is_version(&field.name) {
        return Some(Exclusion::Version);
    }

    // cloning a clone must not carry the original's reference across
    if field.name == CLONE_REFERENCE_FIELD {
        return Some(Exclusion::CloneReference);
    }

    None
}

///
/// CloneableFieldSet
///
/// Fields copied into a clone, in declaration order. Derived on demand
/// from a descriptor; never stored on its own.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct CloneableFieldSet<'a>(Vec<&'a FieldDescriptor>);

impl CloneableFieldSet<'_> {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }
}

/// Classify every declared field of a descriptor.
#[must_use]
pub fn classify(descriptor: &EntityTypeDescriptor) -> CloneableFieldSet<'_> {
    CloneableFieldSet(
        descriptor
            .fields
            .iter()
            .filter(|field| exclusion(descriptor, field).is_none())
            .collect(),
    )
}

/// Per-field verdicts in declaration order, for host diagnostics.
pub fn explain(
    descriptor: &EntityTypeDescriptor,
) -> impl Iterator<Item = (&FieldDescriptor, Option<Exclusion>)> {
    descriptor
        .fields
        .iter()
        .map(move |field| (field, exclusion(descriptor, field)))
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
