//! Training-content storage orchestration.
//!
//! # Responsibility
//! - Provide the set/get/delete contract consumed by entity managers.
//! - Enforce per-category size policy before any write.
//!
//! # Invariants
//! - A subject is either `Empty` (empty descriptor) or `Populated`; failed
//!   validation never moves it between the two.
//! - Replacement reuses the subject's deterministic location; it never
//!   produces a second one.
//! - Concurrent writers against one subject race at the filesystem level;
//!   the outcome is last-write-wins. Expected access is a single writer
//!   per subject.

use crate::model::subject::{LocationDescriptor, TrainingSubject};
use crate::policy::max_content_chars;
use crate::storage::resolver::LocationResolver;
use crate::storage::{LocalBlobBackend, StorageError, StorageResult};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// Storage manager for free-text training content.
pub struct TrainingStorageService {
    resolver: LocationResolver,
}

impl TrainingStorageService {
    /// Creates a service over an already-assembled resolver.
    pub fn new(resolver: LocationResolver) -> Self {
        Self { resolver }
    }

    /// Creates a service backed by a local blob backend rooted at
    /// `base_dir`. The directory is created if absent.
    ///
    /// # Errors
    /// - `StorageError::Io` when the base directory cannot be prepared.
    pub fn local(base_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let backend = Arc::new(LocalBlobBackend::new(base_dir)?);
        let resolver =
            LocationResolver::with_primary(backend).expect("local scheme constant is valid");
        Ok(Self::new(resolver))
    }

    /// Returns the resolver, e.g. to register additional backends.
    pub fn resolver_mut(&mut self) -> &mut LocationResolver {
        &mut self.resolver
    }

    /// Stores, replaces or clears the content for one subject.
    ///
    /// # Contract
    /// - Blank content clears: the backing blob is removed (idempotent) and
    ///   the empty descriptor is returned. Never an error.
    /// - Non-blank content is validated against the category policy first;
    ///   `ContentTooLarge` performs no write and leaves prior state intact.
    /// - Replacement deletes the old blob before writing the new one at the
    ///   same deterministic location. A crash between the two steps loses
    ///   that subject's content; writes are not atomic.
    pub fn set_content(
        &self,
        subject: &TrainingSubject,
        content: &str,
    ) -> StorageResult<LocationDescriptor> {
        if content.trim().is_empty() {
            return self.clear_subject(subject);
        }

        let limit = max_content_chars(subject.category());
        let actual = content.chars().count();
        if actual > limit {
            warn!(
                "event=training_set module=storage status=rejected subject={subject} \
                 error_code=content_too_large limit={limit} actual={actual}"
            );
            return Err(StorageError::ContentTooLarge {
                category: subject.category(),
                limit,
                actual,
            });
        }

        let descriptor = self.resolver.descriptor_for(subject);
        let (backend, path) = self.resolver.dispatch(&descriptor)?;
        // Delete-then-write replacement; the location is identical on both
        // steps, so the write alone already overwrites in place.
        backend.delete(&path)?;
        if let Err(err) = backend.write(&path, content) {
            error!(
                "event=training_set module=storage status=error subject={subject} \
                 error_code=storage_io error={err}"
            );
            return Err(err);
        }

        info!(
            "event=training_set module=storage status=ok subject={subject} chars={actual} \
             scheme={}",
            self.resolver.primary_scheme()
        );
        Ok(descriptor)
    }

    /// Reads the content behind one descriptor.
    ///
    /// The empty descriptor and a missing blob both read as `""`; "never
    /// set" and "cleared" are indistinguishable here.
    pub fn get_content(&self, descriptor: &LocationDescriptor) -> StorageResult<String> {
        if descriptor.is_empty() {
            return Ok(String::new());
        }
        let (backend, path) = self.resolver.dispatch(descriptor)?;
        match backend.read(&path) {
            Ok(content) => Ok(content),
            Err(err) => {
                error!(
                    "event=training_get module=storage status=error \
                     error_code=storage_io error={err}"
                );
                Err(err)
            }
        }
    }

    /// Removes the blob behind one descriptor. Idempotent; the empty
    /// descriptor is a no-op.
    pub fn delete_content(&self, descriptor: &LocationDescriptor) -> StorageResult<()> {
        if descriptor.is_empty() {
            return Ok(());
        }
        let (backend, path) = self.resolver.dispatch(descriptor)?;
        backend.delete(&path)?;
        info!("event=training_delete module=storage status=ok");
        Ok(())
    }

    fn clear_subject(&self, subject: &TrainingSubject) -> StorageResult<LocationDescriptor> {
        let descriptor = self.resolver.descriptor_for(subject);
        let (backend, path) = self.resolver.dispatch(&descriptor)?;
        backend.delete(&path)?;
        info!("event=training_clear module=storage status=ok subject={subject}");
        Ok(LocationDescriptor::empty())
    }
}
