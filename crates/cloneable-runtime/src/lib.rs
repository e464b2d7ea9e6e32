//! Reference interpreter for the body contracts of an
//! [`AugmentationSpec`](cloneable_core::spec::AugmentationSpec), run against
//! a pluggable persistence collaborator.
//!
//! This is what a woven entity does at run time; it lets hosts and tests
//! check clone behaviour without a weaver or a real store.

pub mod instance;
pub mod ops;
pub mod store;
pub mod value;

use cloneable_schema::{error::ErrorClass, node::TypeName};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        instance::Instance,
        ops::CloneOps,
        store::{MemoryStore, Persistence},
        value::{EntityId, Value},
    };
}

///
/// RuntimeError
///

#[derive(Debug, ThisError)]
pub enum RuntimeError {
    #[error("'{member}' is hand-written on '{entity}'; call the entity's own member")]
    HandWritten { entity: TypeName, member: String },

    #[error("'{member}' does not carry a {expected} body contract")]
    UnexpectedContract {
        member: String,
        expected: &'static str,
    },

    #[error("receiver of type '{0}' has not been persisted")]
    Unpersisted(TypeName),

    #[error("receiver is a '{found}', contract targets '{expected}'")]
    WrongEntity { expected: TypeName, found: TypeName },

    #[error("field '{field}' holds {found}, expected a reference")]
    NotAReference { field: String, found: String },

    #[error(transparent)]
    Store(#[from] store::StoreError),
}

impl RuntimeError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::HandWritten { .. } | Self::UnexpectedContract { .. } => ErrorClass::Unsupported,
            Self::Unpersisted(_) | Self::WrongEntity { .. } | Self::NotAReference { .. } => {
                ErrorClass::Conflict
            }
            Self::Store(err) => err.class(),
        }
    }
}
