//! Entity-facing lifecycle orchestration.
//!
//! # Responsibility
//! - Combine content storage with descriptor persistence on the owning
//!   entity record, in one logical operation per call.
//!
//! # Invariants
//! - Blob store and entity repository are not transactionally coupled: a
//!   failure after the blob write can leave the persisted descriptor
//!   stale. Callers retry; this layer does not.

use crate::model::subject::{LocationDescriptor, TrainingSubject};
use crate::repo::location_repo::{LocationRepoError, TrainingLocationRepository};
use crate::service::training_service::TrainingStorageService;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure from either side of the lifecycle boundary.
#[derive(Debug)]
pub enum LifecycleError {
    Storage(StorageError),
    Repository(LocationRepoError),
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Repository(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LifecycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Repository(err) => Some(err),
        }
    }
}

impl From<StorageError> for LifecycleError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<LocationRepoError> for LifecycleError {
    fn from(value: LocationRepoError) -> Self {
        Self::Repository(value)
    }
}

/// Lifecycle facade the owning-entity manager drives.
pub struct TrainingLifecycle<R: TrainingLocationRepository> {
    storage: TrainingStorageService,
    repo: R,
}

impl<R: TrainingLocationRepository> TrainingLifecycle<R> {
    /// Creates a lifecycle facade over a storage service and the entity
    /// repository boundary.
    pub fn new(storage: TrainingStorageService, repo: R) -> Self {
        Self { storage, repo }
    }

    /// Stores (or clears, for blank input) the subject's content and
    /// persists the resulting descriptor on the entity record.
    ///
    /// Returns the descriptor that was persisted.
    pub fn replace_content(
        &self,
        subject: &TrainingSubject,
        content: &str,
    ) -> Result<LocationDescriptor, LifecycleError> {
        let descriptor = self.storage.set_content(subject, content)?;
        self.repo.store_location(subject, &descriptor)?;
        Ok(descriptor)
    }

    /// Clears the subject's content and resets the persisted descriptor.
    pub fn clear_content(&self, subject: &TrainingSubject) -> Result<(), LifecycleError> {
        self.replace_content(subject, "")?;
        Ok(())
    }

    /// Reads the subject's content through its persisted descriptor.
    ///
    /// Subjects with no persisted descriptor read as `""`.
    pub fn content_for(&self, subject: &TrainingSubject) -> Result<String, LifecycleError> {
        match self.repo.load_location(subject)? {
            None => Ok(String::new()),
            Some(descriptor) => Ok(self.storage.get_content(&descriptor)?),
        }
    }

    /// Returns the underlying storage service.
    pub fn storage(&self) -> &TrainingStorageService {
        &self.storage
    }
}
