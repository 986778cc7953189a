//! Location-descriptor persistence contract.
//!
//! # Responsibility
//! - Specify the interface the external entity repository implements so
//!   lifecycle orchestration can persist descriptors on entity records.
//! - Ship an in-memory reference implementation for tests and prototyping.
//!
//! # Invariants
//! - The descriptor column is opaque; implementations store and return it
//!   verbatim.

use crate::model::subject::{LocationDescriptor, OwnerId, TrainingSubject};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

pub type LocationRepoResult<T> = Result<T, LocationRepoError>;

/// Persistence errors surfaced by entity-repository implementations.
#[derive(Debug)]
pub enum LocationRepoError {
    /// No entity record exists for the owner.
    OwnerNotFound(OwnerId),
    /// The underlying store failed; message comes from the implementation.
    Persistence(String),
}

impl Display for LocationRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OwnerNotFound(owner_id) => write!(f, "owner not found: {owner_id}"),
            Self::Persistence(message) => write!(f, "location persistence failed: {message}"),
        }
    }
}

impl Error for LocationRepoError {}

/// Interface the owning-entity repository implements.
///
/// Keyed by the full subject so general and topic descriptors of one owner
/// land on their respective records.
pub trait TrainingLocationRepository {
    /// Loads the persisted descriptor for one subject, if any.
    fn load_location(
        &self,
        subject: &TrainingSubject,
    ) -> LocationRepoResult<Option<LocationDescriptor>>;

    /// Persists the descriptor on the subject's entity record, replacing
    /// any previous value. Persisting the empty descriptor records "no
    /// content stored".
    fn store_location(
        &self,
        subject: &TrainingSubject,
        descriptor: &LocationDescriptor,
    ) -> LocationRepoResult<()>;
}

/// In-memory reference implementation of the repository boundary.
///
/// Intended for tests and for wiring the starter template before a real
/// entity repository exists.
#[derive(Default)]
pub struct InMemoryLocationRepository {
    entries: Mutex<BTreeMap<String, LocationDescriptor>>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(subject: &TrainingSubject) -> String {
        subject.to_string()
    }
}

impl TrainingLocationRepository for InMemoryLocationRepository {
    fn load_location(
        &self,
        subject: &TrainingSubject,
    ) -> LocationRepoResult<Option<LocationDescriptor>> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| LocationRepoError::Persistence(err.to_string()))?;
        Ok(entries.get(&Self::key(subject)).cloned())
    }

    fn store_location(
        &self,
        subject: &TrainingSubject,
        descriptor: &LocationDescriptor,
    ) -> LocationRepoResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| LocationRepoError::Persistence(err.to_string()))?;
        entries.insert(Self::key(subject), descriptor.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryLocationRepository, TrainingLocationRepository};
    use crate::model::subject::{LocationDescriptor, TrainingSubject};
    use uuid::Uuid;

    #[test]
    fn stores_and_loads_per_subject() {
        let repo = InMemoryLocationRepository::new();
        let owner = Uuid::new_v4();
        let general = TrainingSubject::general(owner);
        let topic = TrainingSubject::topic(owner, Uuid::new_v4());

        assert_eq!(repo.load_location(&general).unwrap(), None);

        let descriptor = LocationDescriptor::from_raw("local:///data/a_training.txt");
        repo.store_location(&general, &descriptor).unwrap();

        assert_eq!(repo.load_location(&general).unwrap(), Some(descriptor));
        assert_eq!(repo.load_location(&topic).unwrap(), None);
    }

    #[test]
    fn storing_empty_descriptor_replaces_previous_value() {
        let repo = InMemoryLocationRepository::new();
        let subject = TrainingSubject::general(Uuid::new_v4());

        repo.store_location(&subject, &LocationDescriptor::from_raw("local:///x"))
            .unwrap();
        repo.store_location(&subject, &LocationDescriptor::empty())
            .unwrap();

        let loaded = repo.load_location(&subject).unwrap().unwrap();
        assert!(loaded.is_empty());
    }
}
