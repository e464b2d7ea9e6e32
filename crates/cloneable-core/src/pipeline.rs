use crate::{
    Error,
    classify::classify,
    merge::{existing_members, resolve_member},
    spec::AugmentationSpec,
    synthesize::Candidates,
};
use cloneable_schema::{
    config::CloneConfiguration,
    node::{EntityTypeDescriptor, MetadataKey},
};

/// Run one full computation: resolve configuration, classify, synthesize,
/// merge. Pure; the same inputs always yield the same spec.
pub fn compute(
    key: &MetadataKey,
    descriptor: &EntityTypeDescriptor,
) -> Result<AugmentationSpec, Error> {
    let config = CloneConfiguration::resolve(descriptor)?;
    let aspect = key.aspect_name()?;

    let fields = classify(descriptor);
    let candidates = Candidates::new(descriptor, config, &fields);
    let existing = existing_members(descriptor);

    let spec = AugmentationSpec {
        key: key.clone(),
        aspect,
        entity: descriptor.ty.clone(),
        cloneable_fields: fields.names().map(str::to_string).collect(),
        clone_reference: resolve_member(candidates.clone_reference, &existing),
        get_clone_reference: resolve_member(candidates.get_clone_reference, &existing),
        get_clones: resolve_member(candidates.get_clones, &existing),
        create_clone: resolve_member(candidates.create_clone, &existing),
    };

    tracing::debug!(
        key = %key,
        fetch = %config.fetch,
        cloneable_fields = spec.cloneable_fields.len(),
        reused = ?spec.reused().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "computed clone augmentation"
    );

    Ok(spec)
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------
