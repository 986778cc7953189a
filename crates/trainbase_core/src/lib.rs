//! Core training-content storage for trainbase.
//! This crate is the single source of truth for storage invariants.

pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::subject::{
    LocationDescriptor, OwnerId, TopicId, TrainingCategory, TrainingScope, TrainingSubject,
};
pub use policy::{max_content_chars, GENERAL_MAX_CHARS, TOPIC_MAX_CHARS};
pub use repo::location_repo::{
    InMemoryLocationRepository, LocationRepoError, LocationRepoResult,
    TrainingLocationRepository,
};
pub use service::lifecycle_service::{LifecycleError, TrainingLifecycle};
pub use service::training_service::TrainingStorageService;
pub use storage::{
    BlobBackend, LocalBlobBackend, LocationResolver, RegistryError, StorageError, StorageResult,
    LOCAL_SCHEME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
