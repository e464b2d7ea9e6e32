use crate::{node::InvalidIdentifierError, validate::validate_segment};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// PathRoot
///
/// Source root a type is declared under.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PathRoot {
    #[default]
    #[display("main")]
    Main,

    #[display("test")]
    Test,

    #[display("generated")]
    Generated,
}

impl FromStr for PathRoot {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Test),
            "generated" => Ok(Self::Generated),
            _ => Err(InvalidIdentifierError::UnknownRoot(s.to_string())),
        }
    }
}

///
/// LogicalPath
///
/// Source root plus the optional module it belongs to.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct LogicalPath {
    module: Option<String>,
    root: PathRoot,
}

impl LogicalPath {
    #[must_use]
    pub const fn root(root: PathRoot) -> Self {
        Self { module: None, root }
    }

    pub fn in_module(
        module: impl Into<String>,
        root: PathRoot,
    ) -> Result<Self, InvalidIdentifierError> {
        let module = module.into();
        validate_segment(&module).map_err(|reason| InvalidIdentifierError::Module {
            module: module.clone(),
            reason,
        })?;

        Ok(Self {
            module: Some(module),
            root,
        })
    }

    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    #[must_use]
    pub const fn path_root(&self) -> PathRoot {
        self.root
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{module}|{}", self.root),
            None => write!(f, "{}", self.root),
        }
    }
}

impl FromStr for LogicalPath {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('|') {
            Some((module, root)) => Self::in_module(module, root.parse()?),
            None => Ok(Self::root(s.parse()?)),
        }
    }
}
