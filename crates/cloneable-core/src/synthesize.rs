//! Member synthesis: the reference field and the three derived methods.

use crate::{
    CREATE_CLONE, GET_CLONE_REFERENCE, GET_CLONES,
    classify::CloneableFieldSet,
    merge::Candidate,
    spec::{BodyContract, FieldSpec, MethodSpec, QueryValue, ReturnType},
};
use cloneable_schema::{
    CLONE_REFERENCE_FIELD,
    config::CloneConfiguration,
    node::{EntityTypeDescriptor, TypeName},
    types::{Relation, Visibility},
};

/// Private many-to-one association back to the clone's source.
#[must_use]
pub fn clone_reference_field(entity: &TypeName, config: CloneConfiguration) -> FieldSpec {
    FieldSpec {
        name: CLONE_REFERENCE_FIELD.to_string(),
        ty: entity.clone(),
        visibility: Visibility::Private,
        relation: Relation::ManyToOne,
        fetch: config.fetch,
    }
}

#[must_use]
pub fn get_clone_reference_method(entity: &TypeName) -> MethodSpec {
    MethodSpec {
        name: GET_CLONE_REFERENCE.to_string(),
        params: Vec::new(),
        returns: ReturnType::Entity(entity.clone()),
        visibility: Visibility::Public,
        body: BodyContract::ReturnField {
            field: CLONE_REFERENCE_FIELD.to_string(),
        },
    }
}

#[must_use]
pub fn get_clones_method(entity: &TypeName) -> MethodSpec {
    MethodSpec {
        name: GET_CLONES.to_string(),
        params: Vec::new(),
        returns: ReturnType::ListOf(entity.clone()),
        visibility: Visibility::Public,
        body: BodyContract::FindByEquality {
            entity: entity.clone(),
            field: CLONE_REFERENCE_FIELD.to_string(),
            value: QueryValue::Receiver,
        },
    }
}

#[must_use]
pub fn create_clone_method(entity: &TypeName, fields: &CloneableFieldSet<'_>) -> MethodSpec {
    MethodSpec {
        name: CREATE_CLONE.to_string(),
        params: Vec::new(),
        returns: ReturnType::Entity(entity.clone()),
        visibility: Visibility::Public,
        body: BodyContract::CreateClone {
            entity: entity.clone(),
            reference_field: CLONE_REFERENCE_FIELD.to_string(),
            copied_fields: fields.names().map(str::to_string).collect(),
        },
    }
}

///
/// Candidates
///
/// The four members before merge resolution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidates {
    pub clone_reference: FieldSpec,
    pub get_clone_reference: MethodSpec,
    pub get_clones: MethodSpec,
    pub create_clone: MethodSpec,
}

impl Candidates {
    #[must_use]
    pub fn new(
        descriptor: &EntityTypeDescriptor,
        config: CloneConfiguration,
        fields: &CloneableFieldSet<'_>,
    ) -> Self {
        let entity = &descriptor.ty;

        Self {
            clone_reference: clone_reference_field(entity, config),
            get_clone_reference: get_clone_reference_method(entity),
            get_clones: get_clones_method(entity),
            create_clone: create_clone_method(entity, fields),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Candidate> {
        vec![
            self.clone_reference.into(),
            self.get_clone_reference.into(),
            self.get_clones.into(),
            self.create_clone.into(),
        ]
    }
}
