use crate::{
    ASPECT_SUFFIX, PROVIDES_TYPE,
    node::{LogicalPath, TypeName},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

const MID_PREFIX: &str = "MID:";

///
/// InvalidIdentifierError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidIdentifierError {
    #[error("metadata identifier '{0}' must start with '{prefix}'", prefix = MID_PREFIX)]
    MissingPrefix(String),

    #[error("metadata identifier '{id}' is missing the '{separator}' separator")]
    MissingSeparator { id: String, separator: char },

    #[error(
        "metadata identifier belongs to provider '{0}', expected '{provider}'",
        provider = PROVIDES_TYPE
    )]
    WrongProvider(String),

    #[error("unknown source root '{0}'")]
    UnknownRoot(String),

    #[error("invalid module '{module}': {reason}")]
    Module { module: String, reason: String },

    #[error("invalid type name '{name}': {reason}")]
    TypeName { name: String, reason: String },
}

///
/// MetadataKey
///
/// Composite (type, path) key naming one entity's augmentation.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct MetadataKey {
    pub ty: TypeName,
    pub path: LogicalPath,
}

impl MetadataKey {
    #[must_use]
    pub const fn new(ty: TypeName, path: LogicalPath) -> Self {
        Self { ty, path }
    }

    /// Parse the `MID:cloneable#<path>?<type>` string form.
    pub fn parse(id: &str) -> Result<Self, InvalidIdentifierError> {
        let rest = id
            .strip_prefix(MID_PREFIX)
            .ok_or_else(|| InvalidIdentifierError::MissingPrefix(id.to_string()))?;

        let (provider, rest) =
            rest.split_once('#')
                .ok_or_else(|| InvalidIdentifierError::MissingSeparator {
                    id: id.to_string(),
                    separator: '#',
                })?;
        if provider != PROVIDES_TYPE {
            return Err(InvalidIdentifierError::WrongProvider(provider.to_string()));
        }

        let (path, ty) =
            rest.split_once('?')
                .ok_or_else(|| InvalidIdentifierError::MissingSeparator {
                    id: id.to_string(),
                    separator: '?',
                })?;

        Ok(Self {
            ty: ty.parse()?,
            path: path.parse()?,
        })
    }

    /// Whether a string is a well-formed identifier for this provider.
    #[must_use]
    pub fn is_valid(id: &str) -> bool {
        Self::parse(id).is_ok()
    }

    /// Name of the aspect the weaver should emit for this entity.
    pub fn aspect_name(&self) -> Result<TypeName, InvalidIdentifierError> {
        let simple = format!("{}{ASPECT_SUFFIX}", self.ty.simple_name());

        self.ty.sibling(&simple)
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MID_PREFIX}{PROVIDES_TYPE}#{}?{}", self.path, self.ty)
    }
}

impl FromStr for MetadataKey {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
