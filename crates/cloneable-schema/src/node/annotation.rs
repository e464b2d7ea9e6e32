use crate::node::TypeName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// AttributeValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Enum { ty: TypeName, variant: String },
    Array(Vec<Self>),
}

impl AttributeValue {
    #[must_use]
    pub fn enum_value(ty: TypeName, variant: impl Into<String>) -> Self {
        Self::Enum {
            ty,
            variant: variant.into(),
        }
    }

    /// Short kind label used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Enum { .. } => "enum",
            Self::Array(_) => "array",
        }
    }
}

///
/// Annotation
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Annotation {
    pub ty: TypeName,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Annotation {
    #[must_use]
    pub const fn new(ty: TypeName) -> Self {
        Self {
            ty,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// Find an annotation by simple type name.
#[must_use]
pub fn find_annotation<'a>(
    annotations: &'a [Annotation],
    simple_name: &str,
) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.ty.matches_simple(simple_name))
}
