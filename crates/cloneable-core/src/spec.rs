//! Declarative output consumed by the downstream weaver.

use crate::merge::{MemberSignature, MemberSlot, Resolution};
use cloneable_schema::{
    node::{MetadataKey, TypeName},
    types::{FetchStrategy, Relation, Visibility},
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldSpec
///
/// The synthesized self-reference field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeName,
    pub visibility: Visibility,
    pub relation: Relation,
    pub fetch: FetchStrategy,
}

///
/// ReturnType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ReturnType {
    Entity(TypeName),
    ListOf(TypeName),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(ty) => write!(f, "{ty}"),
            Self::ListOf(ty) => write!(f, "List<{ty}>"),
        }
    }
}

///
/// QueryValue
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryValue {
    /// The instance the method is invoked on.
    Receiver,
}

///
/// BodyContract
///
/// Semantic description of a method body. The weaver decides how to
/// express it; nothing here is source text.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BodyContract {
    /// Return the current value of a field, with no side effects.
    ReturnField { field: String },

    /// Query every persisted `entity` whose `field` equals `value`.
    FindByEquality {
        entity: TypeName,
        field: String,
        value: QueryValue,
    },

    /// Allocate a fresh `entity`, point `reference_field` at the receiver,
    /// shallow-copy `copied_fields`, persist it, and return it.
    CreateClone {
        entity: TypeName,
        reference_field: String,
        copied_fields: Vec<String>,
    },
}

///
/// MethodSpec
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MethodSpec {
    pub name: String,
    pub params: Vec<String>,
    pub returns: ReturnType,
    pub visibility: Visibility,
    pub body: BodyContract,
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({}) -> {}",
            self.visibility,
            self.name,
            self.params.join(", "),
            self.returns
        )
    }
}

///
/// AugmentationSpec
///
/// Everything to add to one entity type, rebuilt from scratch on every
/// computation. Each member slot is either synthesized or points at the
/// hand-written member that stands in for it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AugmentationSpec {
    pub key: MetadataKey,
    pub aspect: TypeName,
    pub entity: TypeName,

    /// CloneableFieldSet names, in declaration order.
    pub cloneable_fields: Vec<String>,

    pub clone_reference: MemberSlot<FieldSpec>,
    pub get_clone_reference: MemberSlot<MethodSpec>,
    pub get_clones: MemberSlot<MethodSpec>,
    pub create_clone: MemberSlot<MethodSpec>,
}

impl AugmentationSpec {
    /// Method slots in emission order.
    #[must_use]
    pub const fn methods(&self) -> [&MemberSlot<MethodSpec>; 3] {
        [&self.get_clone_reference, &self.get_clones, &self.create_clone]
    }

    /// Method slot by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MemberSlot<MethodSpec>> {
        self.methods()
            .into_iter()
            .find(|slot| slot.signature().name == name)
    }

    /// Methods the weaver must add.
    pub fn synthesized_methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods().into_iter().filter_map(MemberSlot::synthesized)
    }

    /// Signatures of every member left to hand-written code.
    #[must_use]
    pub fn reused(&self) -> Vec<MemberSignature> {
        std::iter::once(self.clone_reference.existing_signature())
            .chain(self.methods().into_iter().map(MemberSlot::existing_signature))
            .flatten()
            .collect()
    }

    /// Flatten the slots back into a merge resolution.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        let mut resolution = Resolution::default();
        resolution.record(&self.clone_reference);
        for slot in self.methods() {
            resolution.record(slot);
        }

        resolution
    }

    /// Whether nothing at all remains for the weaver to add.
    #[must_use]
    pub fn is_fully_hand_written(&self) -> bool {
        self.clone_reference.synthesized().is_none() && self.synthesized_methods().next().is_none()
    }
}

impl fmt::Display for AugmentationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "aspect {} for {} ({})", self.aspect, self.entity, self.key)?;

        match &self.clone_reference {
            MemberSlot::Synthesized(field) => writeln!(
                f,
                "  field {} {}: {} [{} fetch={}]",
                field.visibility, field.name, field.ty, field.relation, field.fetch
            )?,
            MemberSlot::Existing(existing) => {
                writeln!(f, "  field {} (hand-written)", existing.name)?;
            }
        }

        for slot in self.methods() {
            match slot {
                MemberSlot::Synthesized(method) => writeln!(f, "  method {method}")?,
                MemberSlot::Existing(existing) => {
                    writeln!(f, "  method {} (hand-written)", existing.name)?;
                }
            }
        }

        write!(f, "  copies [{}]", self.cloneable_fields.join(", "))
    }
}
