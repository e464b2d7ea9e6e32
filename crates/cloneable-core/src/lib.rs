//! Clone augmentation pipeline: classify fields, synthesize the reference
//! field and the three derived methods, merge against hand-written members,
//! and publish the resulting [`spec::AugmentationSpec`] on every change.

pub mod classify;
pub mod merge;
pub mod pipeline;
pub mod provider;
pub mod spec;
pub mod synthesize;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use cloneable_schema::CLONE_REFERENCE_FIELD;

/// Accessor returning the clone's source instance.
pub const GET_CLONE_REFERENCE: &str = "getCloneReference";

/// Finder returning every persisted clone of the receiver.
pub const GET_CLONES: &str = "getClones";

/// Factory producing and persisting a shallow clone of the receiver.
pub const CREATE_CLONE: &str = "createClone";

use cloneable_schema::{
    config::ConfigurationError, error::ErrorClass, node::InvalidIdentifierError,
};
use provider::ProviderError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        classify::{CloneableFieldSet, Exclusion, classify},
        merge::{ExistingMember, MemberKind, MemberSignature, MemberSlot, Resolution},
        pipeline::compute,
        provider::{CloneableProvider, MetadataSource, Outcome},
        spec::{AugmentationSpec, BodyContract, FieldSpec, MethodSpec, QueryValue, ReturnType},
    };
    pub use cloneable_schema::prelude::*;
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

    #[error(transparent)]
    ProviderError(#[from] ProviderError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::ConfigurationError(_) => ErrorClass::InvalidDeclaration,
            Self::InvalidIdentifierError(_) => ErrorClass::InvalidIdentifier,
            Self::ProviderError(err) => err.class(),
        }
    }
}

impl From<cloneable_schema::Error> for Error {
    fn from(err: cloneable_schema::Error) -> Self {
        match err {
            cloneable_schema::Error::ConfigurationError(err) => Self::ConfigurationError(err),
            cloneable_schema::Error::InvalidIdentifierError(err) => {
                Self::InvalidIdentifierError(err)
            }
        }
    }
}
