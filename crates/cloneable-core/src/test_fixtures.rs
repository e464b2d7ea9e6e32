use cloneable_schema::{
    FETCH_ATTRIBUTE,
    node::{
        Annotation, AttributeValue, EntityTypeDescriptor, FieldDescriptor, FieldType, LogicalPath,
        MetadataKey, PathRoot, TypeName,
    },
    types::CollectionKind,
};

pub(crate) fn type_name(path: &str) -> TypeName {
    TypeName::new(path).expect("fixture type name should be valid")
}

pub(crate) fn trigger(variant: &str) -> Annotation {
    Annotation::new(type_name("cloneable::Cloneable")).with(
        FETCH_ATTRIBUTE,
        AttributeValue::enum_value(type_name("cloneable::FetchType"), variant),
    )
}

pub(crate) fn note_key() -> MetadataKey {
    MetadataKey::new(type_name("app::domain::Note"), LogicalPath::root(PathRoot::Main))
}

/// `Note` with an identifier, a version, two scalars, a tag set and a
/// self-association, opted in with a lazy fetch.
pub(crate) fn note() -> EntityTypeDescriptor {
    let ty = type_name("app::domain::Note");

    EntityTypeDescriptor::builder(ty.clone())
        .annotation(trigger("lazy"))
        .field(FieldDescriptor::new("id", FieldType::scalar("u64")))
        .field(FieldDescriptor::new("version", FieldType::scalar("u32")))
        .field(FieldDescriptor::new("author", FieldType::scalar("String")))
        .field(FieldDescriptor::new("body", FieldType::scalar("String")))
        .field(FieldDescriptor::new(
            "tags",
            FieldType::collection(CollectionKind::Set, FieldType::scalar("String")),
        ))
        .field(FieldDescriptor::new("original", FieldType::Entity(ty)))
        .identifier("id")
        .version("version")
        .build()
}
