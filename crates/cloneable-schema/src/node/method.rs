use crate::types::Visibility;
use serde::{Deserialize, Serialize};

///
/// MethodDescriptor
///
/// A hand-written method: only what the merge check needs.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub param_count: usize,

    #[serde(default)]
    pub visibility: Visibility,
}

impl MethodDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, param_count: usize) -> Self {
        Self {
            name: name.into(),
            param_count,
            visibility: Visibility::Public,
        }
    }
}
