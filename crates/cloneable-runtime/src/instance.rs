use crate::value::{EntityId, Value};
use cloneable_schema::node::TypeName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static NULL: Value = Value::Null;

///
/// Instance
///
/// One dynamically-typed entity instance. Unset fields read as `Null`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Instance {
    pub entity: TypeName,
    pub id: Option<EntityId>,

    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

impl Instance {
    #[must_use]
    pub const fn new(entity: TypeName) -> Self {
        Self {
            entity,
            id: None,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    // get
    #[must_use]
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Whether a field was ever assigned on this instance.
    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// A reference to this instance, if it has been persisted.
    #[must_use]
    pub fn as_ref_value(&self) -> Option<Value> {
        self.id.map(Value::Ref)
    }
}
