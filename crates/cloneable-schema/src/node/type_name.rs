use crate::{node::InvalidIdentifierError, validate::validate_path};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// TypeName
///
/// Fully-qualified, `::`-separated name of a type.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidIdentifierError> {
        let path = path.into();
        validate_path(&path).map_err(|reason| InvalidIdentifierError::TypeName {
            name: path.clone(),
            reason,
        })?;

        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, e.g. `Note` for `app::domain::Note`.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    /// Everything before the last segment, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once("::").map(|(parent, _)| parent)
    }

    /// A sibling type in the same module.
    pub fn sibling(&self, simple_name: &str) -> Result<Self, InvalidIdentifierError> {
        match self.parent() {
            Some(parent) => Self::new(format!("{parent}::{simple_name}")),
            None => Self::new(simple_name),
        }
    }

    /// Compare by simple name, so `cloneable::Cloneable` matches `Cloneable`.
    #[must_use]
    pub fn matches_simple(&self, simple_name: &str) -> bool {
        self.simple_name() == simple_name
    }
}

impl FromStr for TypeName {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = InvalidIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0
    }
}
