use crate::{
    FETCH_ATTRIBUTE, TRIGGER_ANNOTATION,
    node::{Annotation, AttributeValue, EntityTypeDescriptor, TypeName},
    types::FetchStrategy,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigurationError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigurationError {
    #[error("type '{0}' does not carry the {trigger} annotation", trigger = TRIGGER_ANNOTATION)]
    MissingTrigger(TypeName),

    #[error(
        "{trigger} on '{0}' is missing the required '{attr}' attribute",
        trigger = TRIGGER_ANNOTATION,
        attr = FETCH_ATTRIBUTE
    )]
    MissingAttribute(TypeName),

    #[error(
        "{trigger} on '{ty}': '{attr}' must be an enum value, found {found}",
        trigger = TRIGGER_ANNOTATION,
        attr = FETCH_ATTRIBUTE
    )]
    WrongKind { ty: TypeName, found: &'static str },

    #[error(
        "{trigger} on '{ty}': '{attr}' must be one of eager, lazy; found '{variant}'",
        trigger = TRIGGER_ANNOTATION,
        attr = FETCH_ATTRIBUTE
    )]
    UnknownVariant { ty: TypeName, variant: String },
}

///
/// CloneConfiguration
///
/// Resolved trigger attributes. There is no default: an absent `fetch`
/// attribute is an invalid declaration.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CloneConfiguration {
    pub fetch: FetchStrategy,
}

impl CloneConfiguration {
    #[must_use]
    pub const fn new(fetch: FetchStrategy) -> Self {
        Self { fetch }
    }

    /// Resolve from the trigger annotation on a descriptor.
    pub fn resolve(descriptor: &EntityTypeDescriptor) -> Result<Self, ConfigurationError> {
        let trigger = descriptor
            .trigger()
            .ok_or_else(|| ConfigurationError::MissingTrigger(descriptor.ty.clone()))?;

        Self::from_annotation(&descriptor.ty, trigger)
    }

    /// Resolve from an already-located trigger annotation.
    pub fn from_annotation(
        ty: &TypeName,
        trigger: &Annotation,
    ) -> Result<Self, ConfigurationError> {
        let value = trigger
            .get(FETCH_ATTRIBUTE)
            .ok_or_else(|| ConfigurationError::MissingAttribute(ty.clone()))?;

        let AttributeValue::Enum { variant, .. } = value else {
            return Err(ConfigurationError::WrongKind {
                ty: ty.clone(),
                found: value.kind(),
            });
        };

        let fetch = variant
            .parse::<FetchStrategy>()
            .map_err(|_| ConfigurationError::UnknownVariant {
                ty: ty.clone(),
                variant: variant.clone(),
            })?;

        Ok(Self { fetch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty() -> TypeName {
        TypeName::new("app::Note").expect("valid type name")
    }

    fn trigger() -> Annotation {
        Annotation::new(TypeName::new("Cloneable").expect("valid type name"))
    }

    fn fetch_enum(variant: &str) -> AttributeValue {
        AttributeValue::enum_value(
            TypeName::new("cloneable::FetchType").expect("valid type name"),
            variant,
        )
    }

    #[test]
    fn resolves_lazy_and_eager() {
        let lazy = trigger().with(FETCH_ATTRIBUTE, fetch_enum("lazy"));
        let eager = trigger().with(FETCH_ATTRIBUTE, fetch_enum("EAGER"));

        assert_eq!(
            CloneConfiguration::from_annotation(&ty(), &lazy),
            Ok(CloneConfiguration::new(FetchStrategy::Lazy))
        );
        assert_eq!(
            CloneConfiguration::from_annotation(&ty(), &eager),
            Ok(CloneConfiguration::new(FetchStrategy::Eager))
        );
    }

    #[test]
    fn missing_attribute_is_an_error_not_a_default() {
        assert_eq!(
            CloneConfiguration::from_annotation(&ty(), &trigger()),
            Err(ConfigurationError::MissingAttribute(ty()))
        );
    }

    #[test]
    fn non_enum_attribute_is_wrong_kind() {
        let text = trigger().with(FETCH_ATTRIBUTE, AttributeValue::Text("lazy".into()));
        assert_eq!(
            CloneConfiguration::from_annotation(&ty(), &text),
            Err(ConfigurationError::WrongKind {
                ty: ty(),
                found: "text"
            })
        );
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let odd = trigger().with(FETCH_ATTRIBUTE, fetch_enum("deferred"));
        assert_eq!(
            CloneConfiguration::from_annotation(&ty(), &odd),
            Err(ConfigurationError::UnknownVariant {
                ty: ty(),
                variant: "deferred".to_string()
            })
        );
    }

    #[test]
    fn descriptor_without_trigger_fails() {
        let descriptor = EntityTypeDescriptor::builder(ty()).build();
        assert_eq!(
            CloneConfiguration::resolve(&descriptor),
            Err(ConfigurationError::MissingTrigger(ty()))
        );
    }
}
