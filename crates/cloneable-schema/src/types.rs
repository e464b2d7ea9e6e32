use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// FetchStrategy
///
/// How the persistence layer loads the clone-reference association.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FetchStrategy {
    #[display("EAGER")]
    Eager,

    #[display("LAZY")]
    Lazy,
}

impl FetchStrategy {
    pub const ALL: [Self; 2] = [Self::Eager, Self::Lazy];
}

///
/// UnknownFetchStrategy
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFetchStrategy(pub String);

// variant names are matched case-insensitively: `lazy` and `LAZY` both resolve
impl FromStr for FetchStrategy {
    type Err = UnknownFetchStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFetchStrategy(s.to_string()))
    }
}

///
/// Visibility
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
pub enum Visibility {
    #[default]
    Private,
    Module,
    Public,
}

///
/// CollectionKind
///
/// Built-in multi-valued container shapes a field type can take.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum CollectionKind {
    Deque,
    List,
    Map,
    Set,
    SortedMap,
    SortedSet,
}

///
/// Relation
///
/// Persistence relationship carried by a synthesized association field.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Relation {
    ManyToOne,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_strategy_parses_case_insensitively() {
        assert_eq!("lazy".parse::<FetchStrategy>(), Ok(FetchStrategy::Lazy));
        assert_eq!("EAGER".parse::<FetchStrategy>(), Ok(FetchStrategy::Eager));
        assert_eq!("Lazy".parse::<FetchStrategy>(), Ok(FetchStrategy::Lazy));
    }

    #[test]
    fn fetch_strategy_rejects_unknown_variant() {
        assert_eq!(
            "sometimes".parse::<FetchStrategy>(),
            Err(UnknownFetchStrategy("sometimes".to_string()))
        );
    }

    #[test]
    fn fetch_strategy_displays_upper_case() {
        assert_eq!(FetchStrategy::Eager.to_string(), "EAGER");
        assert_eq!(FetchStrategy::Lazy.to_string(), "LAZY");
    }
}
