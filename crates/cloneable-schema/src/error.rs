use derive_more::Display;

///
/// ErrorClass
/// Coarse taxonomy hosts use to decide how a failure is reported.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    /// The entity author wrote an invalid declaration.
    #[display("invalid_declaration")]
    InvalidDeclaration,

    /// A metadata identifier was not a well-formed (type, path) pair.
    #[display("invalid_identifier")]
    InvalidIdentifier,

    #[display("not_found")]
    NotFound,

    #[display("unsupported")]
    Unsupported,

    #[display("conflict")]
    Conflict,
}
