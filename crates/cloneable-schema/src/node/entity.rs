use crate::{
    TRIGGER_ANNOTATION,
    node::{Annotation, FieldDescriptor, MethodDescriptor, TypeName, find_annotation},
};
use serde::{Deserialize, Serialize};

///
/// EntityTypeDescriptor
///
/// Host-supplied snapshot of one entity type. Read-only for the pipeline;
/// a fresh snapshot arrives with every structural-change notification.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityTypeDescriptor {
    pub ty: TypeName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    /// Declared fields in declaration order.
    pub fields: Vec<FieldDescriptor>,

    pub identifier_fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_field: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
}

impl EntityTypeDescriptor {
    #[must_use]
    pub fn builder(ty: TypeName) -> EntityTypeDescriptorBuilder {
        EntityTypeDescriptorBuilder::new(ty)
    }

    // get_field
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The trigger annotation, if the author opted this type in.
    #[must_use]
    pub fn trigger(&self) -> Option<&Annotation> {
        find_annotation(&self.annotations, TRIGGER_ANNOTATION)
    }

    #[must_use]
    pub fn is_identifier(&self, field: &str) -> bool {
        self.identifier_fields.iter().any(|id| id == field)
    }

    #[must_use]
    pub fn is_version(&self, field: &str) -> bool {
        self.version_field.as_deref() == Some(field)
    }

    /// First hand-written method matching by name and parameter count.
    #[must_use]
    pub fn find_method(&self, name: &str, param_count: usize) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.param_count == param_count)
    }
}

///
/// EntityTypeDescriptorBuilder
///

#[derive(Debug)]
pub struct EntityTypeDescriptorBuilder {
    descriptor: EntityTypeDescriptor,
}

impl EntityTypeDescriptorBuilder {
    #[must_use]
    pub const fn new(ty: TypeName) -> Self {
        Self {
            descriptor: EntityTypeDescriptor {
                ty,
                annotations: Vec::new(),
                fields: Vec::new(),
                identifier_fields: Vec::new(),
                version_field: None,
                methods: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.descriptor.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.descriptor.fields.push(field);
        self
    }

    #[must_use]
    pub fn identifier(mut self, field: impl Into<String>) -> Self {
        self.descriptor.identifier_fields.push(field.into());
        self
    }

    #[must_use]
    pub fn version(mut self, field: impl Into<String>) -> Self {
        self.descriptor.version_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.descriptor.methods.push(method);
        self
    }

    #[must_use]
    pub fn build(self) -> EntityTypeDescriptor {
        self.descriptor
    }
}
