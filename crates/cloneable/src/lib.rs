//! ## Crate layout
//! - `schema`: entity descriptors, metadata identifiers, and the clone trigger configuration.
//! - `core`: field classification, member synthesis, merge, and the reactive provider.
//! - `runtime`: reference interpreter for synthesized clone members over a pluggable store.
//!
//! The `prelude` module exposes the surface a metadata host needs to register
//! entity types and read published augmentation specs.

pub use cloneable_core as core;
pub use cloneable_runtime as runtime;
pub use cloneable_schema as schema;

use schema::error::ErrorClass;
use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        core::prelude::*,
        runtime::{RuntimeError, prelude::*},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] core::Error),

    #[error(transparent)]
    Runtime(#[from] runtime::RuntimeError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Core(err) => err.class(),
            Self::Runtime(err) => err.class(),
        }
    }
}

impl From<schema::Error> for Error {
    fn from(err: schema::Error) -> Self {
        Self::Core(err.into())
    }
}
