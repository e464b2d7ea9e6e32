//! Reconcile synthesized members with members the author already wrote.
//!
//! A candidate is dropped when a hand-written member of the same kind has
//! the same name and the same parameter count. Parameter types are not
//! compared. Each candidate is checked on its own.

use crate::spec::{FieldSpec, MethodSpec};
use cloneable_schema::node::EntityTypeDescriptor;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum MemberKind {
    #[display("field")]
    Field,

    #[display("method")]
    Method,
}

///
/// MemberSignature
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[display("{kind} {name}/{param_count}")]
pub struct MemberSignature {
    pub kind: MemberKind,
    pub name: String,
    pub param_count: usize,
}

impl MemberSignature {
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Field,
            name: name.into(),
            param_count: 0,
        }
    }

    #[must_use]
    pub fn method(name: impl Into<String>, param_count: usize) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
            param_count,
        }
    }

    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name && self.param_count == other.param_count
    }
}

///
/// ExistingMember
///
/// A hand-written member that takes the place of a synthesized one.
///

pub type ExistingMember = MemberSignature;

/// Every member the author declared on the type, fields first.
#[must_use]
pub fn existing_members(descriptor: &EntityTypeDescriptor) -> Vec<ExistingMember> {
    let fields = descriptor
        .fields
        .iter()
        .map(|f| MemberSignature::field(f.name.clone()));
    let methods = descriptor
        .methods
        .iter()
        .map(|m| MemberSignature::method(m.name.clone(), m.param_count));

    fields.chain(methods).collect()
}

///
/// Member
///

pub trait Member {
    fn signature(&self) -> MemberSignature;
}

impl Member for FieldSpec {
    fn signature(&self) -> MemberSignature {
        MemberSignature::field(self.name.clone())
    }
}

impl Member for MethodSpec {
    fn signature(&self) -> MemberSignature {
        MemberSignature::method(self.name.clone(), self.params.len())
    }
}

///
/// MemberSlot
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MemberSlot<T> {
    Synthesized(T),
    Existing(ExistingMember),
}

impl<T: Member> MemberSlot<T> {
    #[must_use]
    pub fn signature(&self) -> MemberSignature {
        match self {
            Self::Synthesized(member) => member.signature(),
            Self::Existing(existing) => existing.clone(),
        }
    }
}

impl<T> MemberSlot<T> {
    #[must_use]
    pub const fn synthesized(&self) -> Option<&T> {
        match self {
            Self::Synthesized(member) => Some(member),
            Self::Existing(_) => None,
        }
    }

    #[must_use]
    pub const fn existing(&self) -> Option<&ExistingMember> {
        match self {
            Self::Synthesized(_) => None,
            Self::Existing(existing) => Some(existing),
        }
    }

    #[must_use]
    pub fn existing_signature(&self) -> Option<MemberSignature> {
        self.existing().cloned()
    }

    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }
}

/// Resolve one candidate against the declared members.
#[must_use]
pub fn resolve_member<T: Member>(candidate: T, existing: &[ExistingMember]) -> MemberSlot<T> {
    let signature = candidate.signature();

    match existing.iter().find(|member| member.matches(&signature)) {
        Some(found) => MemberSlot::Existing(found.clone()),
        None => MemberSlot::Synthesized(candidate),
    }
}

///
/// Candidate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Candidate {
    Field(FieldSpec),
    Method(MethodSpec),
}

impl Member for Candidate {
    fn signature(&self) -> MemberSignature {
        match self {
            Self::Field(field) => field.signature(),
            Self::Method(method) => method.signature(),
        }
    }
}

impl From<FieldSpec> for Candidate {
    fn from(field: FieldSpec) -> Self {
        Self::Field(field)
    }
}

impl From<MethodSpec> for Candidate {
    fn from(method: MethodSpec) -> Self {
        Self::Method(method)
    }
}

///
/// Resolution
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Resolution {
    pub to_synthesize: Vec<Candidate>,
    pub reused: Vec<ExistingMember>,
}

impl Resolution {
    pub(crate) fn record<T: Clone + Into<Candidate>>(&mut self, slot: &MemberSlot<T>) {
        match slot {
            MemberSlot::Synthesized(member) => self.to_synthesize.push(member.clone().into()),
            MemberSlot::Existing(existing) => self.reused.push(existing.clone()),
        }
    }
}

/// Resolve a batch of candidates, preserving candidate order.
#[must_use]
pub fn resolve(candidates: Vec<Candidate>, existing: &[ExistingMember]) -> Resolution {
    let mut resolution = Resolution::default();
    for candidate in candidates {
        resolution.record(&resolve_member(candidate, existing));
    }

    resolution
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CREATE_CLONE, GET_CLONE_REFERENCE, GET_CLONES,
        synthesize::Candidates,
        test_fixtures::note,
    };
    use cloneable_schema::{
        CLONE_REFERENCE_FIELD, config::CloneConfiguration, node::MethodDescriptor,
        types::FetchStrategy,
    };

    fn candidates() -> Vec<Candidate> {
        let note = note();
        let config = CloneConfiguration::new(FetchStrategy::Lazy);
        let fields = crate::classify::classify(&note);

        Candidates::new(&note, config, &fields).into_vec()
    }

    fn names(candidates: &[Candidate]) -> Vec<String> {
        candidates.iter().map(|c| c.signature().name).collect()
    }

    #[test]
    fn nothing_declared_synthesizes_everything() {
        let resolution = resolve(candidates(), &[]);

        assert_eq!(
            names(&resolution.to_synthesize),
            [CLONE_REFERENCE_FIELD, GET_CLONE_REFERENCE, GET_CLONES, CREATE_CLONE]
        );
        assert!(resolution.reused.is_empty());
    }

    #[test]
    fn hand_written_get_clones_skips_only_that_member() {
        let existing = [MemberSignature::method(GET_CLONES, 0)];
        let resolution = resolve(candidates(), &existing);

        assert_eq!(
            names(&resolution.to_synthesize),
            [CLONE_REFERENCE_FIELD, GET_CLONE_REFERENCE, CREATE_CLONE]
        );
        assert_eq!(resolution.reused, existing);
    }

    #[test]
    fn different_arity_is_not_a_match() {
        let existing = [MemberSignature::method(CREATE_CLONE, 1)];
        let resolution = resolve(candidates(), &existing);

        assert_eq!(resolution.to_synthesize.len(), 4);
        assert!(resolution.reused.is_empty());
    }

    #[test]
    fn a_field_does_not_shadow_a_method_of_the_same_name() {
        let existing = [MemberSignature::field(GET_CLONES)];
        let resolution = resolve(candidates(), &existing);

        assert_eq!(resolution.to_synthesize.len(), 4);
    }

    #[test]
    fn hand_declared_reference_field_is_reused() {
        let existing = [MemberSignature::field(CLONE_REFERENCE_FIELD)];
        let resolution = resolve(candidates(), &existing);

        assert_eq!(
            names(&resolution.to_synthesize),
            [GET_CLONE_REFERENCE, GET_CLONES, CREATE_CLONE]
        );
        assert_eq!(resolution.reused, existing);
    }

    #[test]
    fn existing_members_lists_fields_then_methods() {
        let mut descriptor = note();
        descriptor.methods.push(MethodDescriptor::new("toString", 0));

        let members = existing_members(&descriptor);
        assert_eq!(members.first(), Some(&MemberSignature::field("id")));
        assert_eq!(members.last(), Some(&MemberSignature::method("toString", 0)));
        assert_eq!(members.len(), descriptor.fields.len() + 1);
    }

    #[test]
    fn signature_display_is_compact() {
        assert_eq!(MemberSignature::method(GET_CLONES, 0).to_string(), "method getClones/0");
    }
}
