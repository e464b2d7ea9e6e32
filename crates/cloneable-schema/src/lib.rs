//! Read-only input vocabulary for clone augmentation: type names, metadata
//! keys, field and method descriptors, and the trigger configuration.

pub mod config;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Provider id embedded in every metadata identifier string.
pub const PROVIDES_TYPE: &str = "cloneable";

/// Simple name of the trigger annotation.
pub const TRIGGER_ANNOTATION: &str = "Cloneable";

/// Required attribute on the trigger annotation.
pub const FETCH_ATTRIBUTE: &str = "fetch";

/// Reserved name of the synthesized self-reference field.
pub const CLONE_REFERENCE_FIELD: &str = "cloneReference";

/// Suffix appended to the entity's simple name to name its aspect.
pub const ASPECT_SUFFIX: &str = "Cloneable";

use crate::{config::ConfigurationError, node::InvalidIdentifierError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{CloneConfiguration, ConfigurationError},
        error::ErrorClass,
        node::*,
        types::{CollectionKind, FetchStrategy, Relation, Visibility},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    InvalidIdentifierError(#[from] InvalidIdentifierError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> error::ErrorClass {
        match self {
            Self::ConfigurationError(_) => error::ErrorClass::InvalidDeclaration,
            Self::InvalidIdentifierError(_) => error::ErrorClass::InvalidIdentifier,
        }
    }
}
