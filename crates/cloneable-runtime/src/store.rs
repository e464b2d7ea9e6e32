use crate::{
    RuntimeError,
    instance::Instance,
    value::{EntityId, Value},
};
use cloneable_schema::{error::ErrorClass, node::TypeName};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("'{entity}' {id} not found")]
    NotFound { entity: TypeName, id: EntityId },
}

impl StoreError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
        }
    }
}

///
/// Persistence
///
/// The store collaborator woven clone members call at run time.
///

pub trait Persistence {
    /// Every persisted `entity` whose `field` equals `value`, in the
    /// store's default order.
    fn find_by_field(
        &self,
        entity: &TypeName,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Instance>, RuntimeError>;

    /// Persist an instance, assigning an identifier if it has none.
    fn save(&mut self, instance: Instance) -> Result<Instance, RuntimeError>;

    fn load(&self, entity: &TypeName, id: EntityId) -> Result<Option<Instance>, RuntimeError>;
}

///
/// MemoryStore
///
/// In-process store ordered by identifier. Identifiers start at 1 and are
/// unique across entity types.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: BTreeMap<TypeName, BTreeMap<EntityId, Instance>>,
    last_id: u64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self, entity: &TypeName) -> usize {
        self.rows.get(entity).map_or(0, BTreeMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeMap::is_empty)
    }

    const fn next_id(&mut self) -> EntityId {
        self.last_id += 1;
        EntityId(self.last_id)
    }
}

impl Persistence for MemoryStore {
    fn find_by_field(
        &self,
        entity: &TypeName,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Instance>, RuntimeError> {
        let Some(rows) = self.rows.get(entity) else {
            return Ok(Vec::new());
        };

        Ok(rows
            .values()
            .filter(|row| row.get(field) == value)
            .cloned()
            .collect())
    }

    fn save(&mut self, mut instance: Instance) -> Result<Instance, RuntimeError> {
        let id = match instance.id {
            Some(id) => {
                let known = self
                    .rows
                    .get(&instance.entity)
                    .is_some_and(|rows| rows.contains_key(&id));
                if !known {
                    return Err(StoreError::NotFound {
                        entity: instance.entity,
                        id,
                    }
                    .into());
                }
                id
            }
            None => self.next_id(),
        };

        instance.id = Some(id);
        self.rows
            .entry(instance.entity.clone())
            .or_default()
            .insert(id, instance.clone());

        Ok(instance)
    }

    fn load(&self, entity: &TypeName, id: EntityId) -> Result<Option<Instance>, RuntimeError> {
        Ok(self.rows.get(entity).and_then(|rows| rows.get(&id)).cloned())
    }
}
