//! Reactive provider: registers per-key dependencies on the host's
//! metadata source and republishes a fresh spec on every notification.

use crate::{Error, pipeline::compute, spec::AugmentationSpec};
use cloneable_schema::{
    error::ErrorClass,
    node::{EntityTypeDescriptor, MetadataKey, TypeName},
};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

///
/// MetadataSource
///
/// Host-side view of entity structure.
///

pub trait MetadataSource {
    /// Current descriptor for a key, if the host knows the type.
    fn descriptor(&self, key: &MetadataKey) -> Option<EntityTypeDescriptor>;
}

impl<F> MetadataSource for F
where
    F: Fn(&MetadataKey) -> Option<EntityTypeDescriptor>,
{
    fn descriptor(&self, key: &MetadataKey) -> Option<EntityTypeDescriptor> {
        self(key)
    }
}

///
/// ProviderError
///

#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error("no descriptor available for '{0}'")]
    DescriptorNotFound(MetadataKey),

    #[error("descriptor for '{key}' describes '{found}'")]
    DescriptorMismatch { key: MetadataKey, found: TypeName },
}

impl ProviderError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::DescriptorNotFound(_) => ErrorClass::NotFound,
            Self::DescriptorMismatch { .. } => ErrorClass::Conflict,
        }
    }
}

///
/// Outcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A new or changed spec is now in effect.
    Published,

    /// Recomputed; identical to the augmentation already in effect.
    Unchanged,

    /// The type dropped its trigger annotation; its spec was withdrawn.
    Retracted,

    /// The key is not registered with this provider.
    Ignored,
}

///
/// CloneableProvider
///
/// Holds the registered keys and the augmentation currently in effect for each.
/// Every notification recomputes from scratch; a failed recomputation
/// leaves the previous spec in place.
///

#[derive(Debug, Default)]
pub struct CloneableProvider {
    registered: BTreeSet<MetadataKey>,
    published: BTreeMap<MetadataKey, AugmentationSpec>,
}

impl CloneableProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change dependency for a key. Returns false if it was
    /// already registered.
    pub fn activate(&mut self, key: MetadataKey) -> bool {
        tracing::debug!(key = %key, "registering clone dependency");

        self.registered.insert(key)
    }

    /// Deregister a key and withdraw whatever was published for it.
    pub fn deactivate(&mut self, key: &MetadataKey) -> Option<AugmentationSpec> {
        tracing::debug!(key = %key, "deregistering clone dependency");
        self.registered.remove(key);

        self.published.remove(key)
    }

    #[must_use]
    pub fn is_registered(&self, key: &MetadataKey) -> bool {
        self.registered.contains(key)
    }

    pub fn registered(&self) -> impl Iterator<Item = &MetadataKey> {
        self.registered.iter()
    }

    /// The augmentation currently in effect for a key.
    #[must_use]
    pub fn published(&self, key: &MetadataKey) -> Option<&AugmentationSpec> {
        self.published.get(key)
    }

    /// Handle a structural-change notification identified by its string form.
    pub fn notify_identifier<S: MetadataSource + ?Sized>(
        &mut self,
        source: &S,
        id: &str,
    ) -> Result<Outcome, Error> {
        let key = MetadataKey::parse(id)?;

        self.notify(source, &key)
    }

    /// Handle a structural-change notification for one key.
    pub fn notify<S: MetadataSource + ?Sized>(
        &mut self,
        source: &S,
        key: &MetadataKey,
    ) -> Result<Outcome, Error> {
        if !self.registered.contains(key) {
            tracing::debug!(key = %key, "ignoring notification for unregistered key");
            return Ok(Outcome::Ignored);
        }

        match self.recompute(source, key) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    class = %err.class(),
                    error = %err,
                    kept_previous = self.published.contains_key(key),
                    "clone augmentation recompute failed"
                );
                Err(err)
            }
        }
    }

    /// Notify every registered key, collecting per-key results.
    pub fn notify_all<S: MetadataSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Vec<(MetadataKey, Result<Outcome, Error>)> {
        let keys: Vec<_> = self.registered.iter().cloned().collect();

        keys.into_iter()
            .map(|key| {
                let result = self.notify(source, &key);
                (key, result)
            })
            .collect()
    }

    fn recompute<S: MetadataSource + ?Sized>(
        &mut self,
        source: &S,
        key: &MetadataKey,
    ) -> Result<Outcome, Error> {
        let descriptor = source
            .descriptor(key)
            .ok_or_else(|| ProviderError::DescriptorNotFound(key.clone()))?;

        if descriptor.ty != key.ty {
            return Err(ProviderError::DescriptorMismatch {
                key: key.clone(),
                found: descriptor.ty,
            }
            .into());
        }

        if descriptor.trigger().is_none() {
            return Ok(match self.published.remove(key) {
                Some(_) => {
                    tracing::info!(key = %key, "trigger removed, retracting clone augmentation");
                    Outcome::Retracted
                }
                None => Outcome::Unchanged,
            });
        }

        let spec = compute(key, &descriptor)?;

        if self.published.get(key) == Some(&spec) {
            return Ok(Outcome::Unchanged);
        }

        tracing::info!(
            key = %key,
            synthesized = spec.synthesized_methods().count(),
            "publishing clone augmentation"
        );
        self.published.insert(key.clone(), spec);

        Ok(Outcome::Published)
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        GET_CLONES,
        test_fixtures::{note, note_key, type_name},
    };
    use cloneable_schema::{
        config::ConfigurationError, node::MethodDescriptor, types::FetchStrategy,
    };
    use std::cell::RefCell;

    ///
    /// HostStub
    ///

    #[derive(Default)]
    struct HostStub {
        types: RefCell<BTreeMap<MetadataKey, EntityTypeDescriptor>>,
    }

    impl HostStub {
        fn with(key: MetadataKey, descriptor: EntityTypeDescriptor) -> Self {
            let host = Self::default();
            host.put(key, descriptor);
            host
        }

        fn put(&self, key: MetadataKey, descriptor: EntityTypeDescriptor) {
            self.types.borrow_mut().insert(key, descriptor);
        }
    }

    impl MetadataSource for HostStub {
        fn descriptor(&self, key: &MetadataKey) -> Option<EntityTypeDescriptor> {
            self.types.borrow().get(key).cloned()
        }
    }

    fn active_provider() -> CloneableProvider {
        let mut provider = CloneableProvider::new();
        assert!(provider.activate(note_key()));
        provider
    }

    #[test]
    fn unregistered_keys_are_ignored() {
        let host = HostStub::with(note_key(), note());
        let mut provider = CloneableProvider::new();

        let outcome = provider.notify(&host, &note_key()).expect("notify should succeed");
        assert_eq!(outcome, Outcome::Ignored);
        assert!(provider.published(&note_key()).is_none());
    }

    #[test]
    fn notification_publishes_then_reports_unchanged() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();

        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Published));
        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Unchanged));
        assert!(provider.published(&note_key()).is_some());
    }

    #[test]
    fn newer_notification_supersedes_older_spec() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();
        provider.notify(&host, &note_key()).expect("first notify should succeed");

        let mut changed = note();
        changed.methods.push(MethodDescriptor::new(GET_CLONES, 0));
        changed.annotations[0] = crate::test_fixtures::trigger("eager");
        host.put(note_key(), changed);

        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Published));

        let spec = provider.published(&note_key()).expect("spec should be published");
        assert!(!spec.get_clones.is_synthesized());
        assert_eq!(
            spec.clone_reference.synthesized().map(|f| f.fetch),
            Some(FetchStrategy::Eager)
        );
    }

    #[test]
    fn failed_recompute_keeps_previous_spec() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();
        provider.notify(&host, &note_key()).expect("first notify should succeed");
        let before = provider.published(&note_key()).cloned();

        let mut broken = note();
        broken.annotations[0].attributes.clear();
        host.put(note_key(), broken);

        let err = provider
            .notify(&host, &note_key())
            .expect_err("missing fetch should fail");
        assert!(matches!(
            err,
            Error::ConfigurationError(ConfigurationError::MissingAttribute(_))
        ));
        assert_eq!(provider.published(&note_key()).cloned(), before);
    }

    #[test]
    fn removing_the_trigger_retracts() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();
        provider.notify(&host, &note_key()).expect("first notify should succeed");

        let mut plain = note();
        plain.annotations.clear();
        host.put(note_key(), plain);

        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Retracted));
        assert!(provider.published(&note_key()).is_none());
        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Unchanged));
    }

    #[test]
    fn missing_descriptor_is_not_found() {
        let host = HostStub::default();
        let mut provider = active_provider();

        let err = provider
            .notify(&host, &note_key())
            .expect_err("no descriptor should fail");
        assert_eq!(err.class(), ErrorClass::NotFound);
    }

    #[test]
    fn descriptor_for_another_type_is_a_conflict() {
        let mut other = note();
        other.ty = type_name("app::domain::Memo");
        let host = HostStub::with(note_key(), other);
        let mut provider = active_provider();

        let err = provider
            .notify(&host, &note_key())
            .expect_err("mismatched descriptor should fail");
        assert_eq!(err.class(), ErrorClass::Conflict);
    }

    #[test]
    fn malformed_identifier_is_rejected_before_lookup() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();

        let err = provider
            .notify_identifier(&host, "MID:cloneable#main")
            .expect_err("malformed identifier should fail");
        assert_eq!(err.class(), ErrorClass::InvalidIdentifier);

        let outcome = provider
            .notify_identifier(&host, &note_key().to_string())
            .expect("well-formed identifier should notify");
        assert_eq!(outcome, Outcome::Published);
    }

    #[test]
    fn closures_act_as_metadata_sources() {
        let source = |key: &MetadataKey| (*key == note_key()).then(note);
        let mut provider = active_provider();

        assert_eq!(provider.notify(&source, &note_key()).ok(), Some(Outcome::Published));
    }

    #[test]
    fn deactivate_withdraws_and_stops_listening() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();
        provider.notify(&host, &note_key()).expect("notify should succeed");

        assert!(provider.deactivate(&note_key()).is_some());
        assert!(!provider.is_registered(&note_key()));
        assert_eq!(provider.notify(&host, &note_key()).ok(), Some(Outcome::Ignored));
    }

    #[test]
    fn notify_all_visits_every_registered_key() {
        let host = HostStub::with(note_key(), note());
        let mut provider = active_provider();
        let memo_key = MetadataKey::new(type_name("app::domain::Memo"), note_key().path);
        provider.activate(memo_key.clone());
        assert_eq!(provider.registered().count(), 2);

        let results = provider.notify_all(&host);
        assert_eq!(results.len(), 2);

        for (key, result) in results {
            if key == memo_key {
                assert!(result.is_err(), "memo has no descriptor");
            } else {
                assert_eq!(result.ok(), Some(Outcome::Published));
            }
        }
    }
}
