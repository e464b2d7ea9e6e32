mod annotation;
mod entity;
mod field;
mod key;
mod method;
mod path;
mod type_name;

pub use annotation::*;
pub use entity::*;
pub use field::*;
pub use key::*;
pub use method::*;
pub use path::*;
pub use type_name::*;
