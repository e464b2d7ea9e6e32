use crate::{
    RuntimeError,
    instance::Instance,
    store::Persistence,
    value::{EntityId, Value},
};
use cloneable_core::{
    CREATE_CLONE, GET_CLONE_REFERENCE, GET_CLONES,
    merge::MemberSlot,
    spec::{AugmentationSpec, BodyContract, MethodSpec, QueryValue},
};
use cloneable_schema::node::TypeName;

///
/// CloneOps
///
/// Executes the synthesized clone members of one spec.
///

#[derive(Clone, Copy, Debug)]
pub struct CloneOps<'a> {
    spec: &'a AugmentationSpec,
}

impl<'a> CloneOps<'a> {
    #[must_use]
    pub const fn new(spec: &'a AugmentationSpec) -> Self {
        Self { spec }
    }

    /// `getCloneReference()`: the source this instance was cloned from.
    pub fn get_clone_reference(
        &self,
        receiver: &Instance,
    ) -> Result<Option<EntityId>, RuntimeError> {
        let method = self.method(&self.spec.get_clone_reference)?;
        let BodyContract::ReturnField { field } = &method.body else {
            return Err(unexpected(GET_CLONE_REFERENCE, "ReturnField"));
        };

        match receiver.get(field) {
            Value::Null => Ok(None),
            Value::Ref(id) => Ok(Some(*id)),
            other => Err(RuntimeError::NotAReference {
                field: field.clone(),
                found: other.to_string(),
            }),
        }
    }

    /// Resolve `getCloneReference()` to the stored source instance.
    pub fn load_clone_reference<P: Persistence + ?Sized>(
        &self,
        store: &P,
        receiver: &Instance,
    ) -> Result<Option<Instance>, RuntimeError> {
        match self.get_clone_reference(receiver)? {
            Some(id) => store.load(&receiver.entity, id),
            None => Ok(None),
        }
    }

    /// `getClones()`: every persisted instance whose reference is the receiver.
    pub fn get_clones<P: Persistence + ?Sized>(
        &self,
        store: &P,
        receiver: &Instance,
    ) -> Result<Vec<Instance>, RuntimeError> {
        let method = self.method(&self.spec.get_clones)?;
        let BodyContract::FindByEquality {
            entity,
            field,
            value: QueryValue::Receiver,
        } = &method.body
        else {
            return Err(unexpected(GET_CLONES, "FindByEquality"));
        };

        check_entity(entity, receiver)?;
        let reference = receiver_ref(receiver)?;

        store.find_by_field(entity, field, &reference)
    }

    /// `createClone()`: shallow-copy the receiver, point the copy back at
    /// it, persist, and return the persisted copy.
    pub fn create_clone<P: Persistence + ?Sized>(
        &self,
        store: &mut P,
        receiver: &Instance,
    ) -> Result<Instance, RuntimeError> {
        let method = self.method(&self.spec.create_clone)?;
        let BodyContract::CreateClone {
            entity,
            reference_field,
            copied_fields,
        } = &method.body
        else {
            return Err(unexpected(CREATE_CLONE, "CreateClone"));
        };

        check_entity(entity, receiver)?;
        let reference = receiver_ref(receiver)?;

        // exact runtime type of the receiver, identifier left unset
        let mut clone = Instance::new(receiver.entity.clone());
        clone.set(reference_field.clone(), reference);
        for field in copied_fields {
            clone.set(field.clone(), receiver.get(field).clone());
        }

        let clone = store.save(clone)?;
        tracing::debug!(
            entity = %receiver.entity,
            source = ?receiver.id,
            clone = ?clone.id,
            copied = copied_fields.len(),
            "created clone"
        );

        Ok(clone)
    }

    fn method(&self, slot: &'a MemberSlot<MethodSpec>) -> Result<&'a MethodSpec, RuntimeError> {
        match slot {
            MemberSlot::Synthesized(method) => Ok(method),
            MemberSlot::Existing(existing) => Err(RuntimeError::HandWritten {
                entity: self.spec.entity.clone(),
                member: existing.name.clone(),
            }),
        }
    }
}

fn unexpected(member: &str, expected: &'static str) -> RuntimeError {
    RuntimeError::UnexpectedContract {
        member: member.to_string(),
        expected,
    }
}

fn check_entity(expected: &TypeName, receiver: &Instance) -> Result<(), RuntimeError> {
    if &receiver.entity == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongEntity {
            expected: expected.clone(),
            found: receiver.entity.clone(),
        })
    }
}

fn receiver_ref(receiver: &Instance) -> Result<Value, RuntimeError> {
    receiver
        .as_ref_value()
        .ok_or_else(|| RuntimeError::Unpersisted(receiver.entity.clone()))
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
