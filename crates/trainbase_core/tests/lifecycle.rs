use trainbase_core::{
    InMemoryLocationRepository, LifecycleError, StorageError, TrainingLifecycle,
    TrainingLocationRepository, TrainingStorageService, TrainingSubject, GENERAL_MAX_CHARS,
};
use uuid::Uuid;

fn lifecycle() -> (
    tempfile::TempDir,
    TrainingLifecycle<InMemoryLocationRepository>,
) {
    let dir = tempfile::tempdir().unwrap();
    let storage = TrainingStorageService::local(dir.path()).unwrap();
    (
        dir,
        TrainingLifecycle::new(storage, InMemoryLocationRepository::new()),
    )
}

#[test]
fn replace_persists_descriptor_and_reads_back() {
    let (_dir, lifecycle) = lifecycle();
    let subject = TrainingSubject::general(Uuid::new_v4());

    let descriptor = lifecycle.replace_content(&subject, "persisted").unwrap();
    assert!(!descriptor.is_empty());
    assert_eq!(lifecycle.content_for(&subject).unwrap(), "persisted");
}

#[test]
fn subject_without_descriptor_reads_as_empty() {
    let (_dir, lifecycle) = lifecycle();
    let subject = TrainingSubject::general(Uuid::new_v4());
    assert_eq!(lifecycle.content_for(&subject).unwrap(), "");
}

#[test]
fn clear_resets_the_persisted_descriptor() {
    let (_dir, lifecycle) = lifecycle();
    let subject = TrainingSubject::general(Uuid::new_v4());

    lifecycle.replace_content(&subject, "to be cleared").unwrap();
    lifecycle.clear_content(&subject).unwrap();

    assert_eq!(lifecycle.content_for(&subject).unwrap(), "");
}

#[test]
fn general_and_topic_slots_are_independent() {
    let (_dir, lifecycle) = lifecycle();
    let owner = Uuid::new_v4();
    let general = TrainingSubject::general(owner);
    let topic = TrainingSubject::topic(owner, Uuid::new_v4());

    lifecycle.replace_content(&general, "owner-wide").unwrap();
    lifecycle.replace_content(&topic, "topic-scoped").unwrap();

    assert_eq!(lifecycle.content_for(&general).unwrap(), "owner-wide");
    assert_eq!(lifecycle.content_for(&topic).unwrap(), "topic-scoped");

    lifecycle.clear_content(&topic).unwrap();
    assert_eq!(lifecycle.content_for(&general).unwrap(), "owner-wide");
    assert_eq!(lifecycle.content_for(&topic).unwrap(), "");
}

#[test]
fn rejected_write_does_not_touch_the_persisted_descriptor() {
    let (_dir, lifecycle) = lifecycle();
    let subject = TrainingSubject::general(Uuid::new_v4());

    lifecycle.replace_content(&subject, "original").unwrap();
    let err = lifecycle
        .replace_content(&subject, &"x".repeat(GENERAL_MAX_CHARS + 1))
        .unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Storage(StorageError::ContentTooLarge { .. })
    ));
    assert_eq!(lifecycle.content_for(&subject).unwrap(), "original");
}

struct FailingRepository;

impl TrainingLocationRepository for FailingRepository {
    fn load_location(
        &self,
        _subject: &TrainingSubject,
    ) -> trainbase_core::LocationRepoResult<Option<trainbase_core::LocationDescriptor>> {
        Err(trainbase_core::LocationRepoError::Persistence(
            "connection lost".to_string(),
        ))
    }

    fn store_location(
        &self,
        subject: &TrainingSubject,
        _descriptor: &trainbase_core::LocationDescriptor,
    ) -> trainbase_core::LocationRepoResult<()> {
        Err(trainbase_core::LocationRepoError::OwnerNotFound(
            subject.owner_id(),
        ))
    }
}

#[test]
fn repository_failures_surface_as_lifecycle_errors() {
    let dir = tempfile::tempdir().unwrap();
    let storage = TrainingStorageService::local(dir.path()).unwrap();
    let lifecycle = TrainingLifecycle::new(storage, FailingRepository);
    let subject = TrainingSubject::general(Uuid::new_v4());

    let store_err = lifecycle.replace_content(&subject, "content").unwrap_err();
    assert!(matches!(store_err, LifecycleError::Repository(_)));

    let load_err = lifecycle.content_for(&subject).unwrap_err();
    assert!(matches!(load_err, LifecycleError::Repository(_)));
}
