use crate::{
    node::{Annotation, TypeName},
    types::{CollectionKind, Visibility},
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldType
///
/// Declared type of a field, as far as the host could resolve it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldType {
    /// Single-valued, non-entity type such as `String` or `i64`.
    Scalar(String),

    /// Association to another (or the same) entity type.
    Entity(TypeName),

    Collection {
        kind: CollectionKind,
        of: Box<Self>,
    },

    Array(Box<Self>),

    /// The host could not categorize the type; carries its source text.
    Unresolved(String),
}

impl FieldType {
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(name.into())
    }

    #[must_use]
    pub fn collection(kind: CollectionKind, of: Self) -> Self {
        Self::Collection {
            kind,
            of: Box::new(of),
        }
    }

    #[must_use]
    pub fn array(of: Self) -> Self {
        Self::Array(Box::new(of))
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection { .. })
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => write!(f, "{name}"),
            Self::Entity(ty) => write!(f, "{ty}"),
            Self::Collection { kind, of } => write!(f, "{kind}<{of}>"),
            Self::Array(of) => write!(f, "[{of}]"),
            Self::Unresolved(text) => write!(f, "?{text}"),
        }
    }
}

///
/// Modifiers
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_transient: bool,
    pub is_final: bool,
}

impl Modifiers {
    pub const PRIVATE: Self = Self {
        visibility: Visibility::Private,
        is_static: false,
        is_transient: false,
        is_final: false,
    };

    pub const PUBLIC: Self = Self {
        visibility: Visibility::Public,
        ..Self::PRIVATE
    };

    #[must_use]
    pub const fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub const fn with_transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    #[must_use]
    pub const fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: FieldType,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::PRIVATE,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}
