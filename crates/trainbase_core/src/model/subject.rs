//! Training subject and location descriptor types.
//!
//! # Responsibility
//! - Identify what a piece of training content belongs to (owner + scope).
//! - Represent stored-content locations as opaque `scheme://path` strings.
//!
//! # Invariants
//! - `owner_id` is stable and never reused for another owner.
//! - `Topic` scope always carries a topic id; `General` never does.
//! - Only the storage subsystem constructs non-empty descriptors; every
//!   other layer treats them as opaque pointers.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of the entity owning training content.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type OwnerId = Uuid;

/// Stable identifier of a topic scoping topic-level training content.
pub type TopicId = Uuid;

/// Category discriminator used by content policy and path construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCategory {
    /// Owner-wide training content, one per owner.
    General,
    /// Topic-scoped training content, one per owner and topic pair.
    Topic,
}

impl TrainingCategory {
    /// Returns the lowercase tag embedded in backend paths.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Topic => "topic",
        }
    }
}

impl Display for TrainingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Scope of one unit of training content within an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingScope {
    /// One owner-wide slot.
    General,
    /// One slot per topic of the owner.
    Topic(TopicId),
}

/// Key identifying one unit of stored training content.
///
/// The same subject always resolves to the same storage location, which is
/// what makes replacement overwrite in place instead of accumulating blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSubject {
    owner_id: OwnerId,
    scope: TrainingScope,
}

impl TrainingSubject {
    /// Creates the owner-wide (general) subject for one owner.
    pub fn general(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            scope: TrainingScope::General,
        }
    }

    /// Creates the topic-scoped subject for one owner and topic.
    pub fn topic(owner_id: OwnerId, topic_id: TopicId) -> Self {
        Self {
            owner_id,
            scope: TrainingScope::Topic(topic_id),
        }
    }

    /// Returns the owning entity id.
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the topic id for topic-scoped subjects.
    pub fn topic_id(&self) -> Option<TopicId> {
        match self.scope {
            TrainingScope::General => None,
            TrainingScope::Topic(topic_id) => Some(topic_id),
        }
    }

    /// Returns the category discriminator used by policy and path lookups.
    pub fn category(&self) -> TrainingCategory {
        match self.scope {
            TrainingScope::General => TrainingCategory::General,
            TrainingScope::Topic(_) => TrainingCategory::Topic,
        }
    }
}

impl Display for TrainingSubject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.scope {
            TrainingScope::General => write!(f, "{}/general", self.owner_id),
            TrainingScope::Topic(topic_id) => {
                write!(f, "{}/topic/{topic_id}", self.owner_id)
            }
        }
    }
}

/// Opaque `scheme://path` pointer to stored training content.
///
/// The empty descriptor denotes "no content stored" and is the value
/// persisted on the owning entity after a clear. Callers outside the
/// storage subsystem never inspect the inner string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationDescriptor(String);

impl LocationDescriptor {
    /// Returns the "no content stored" descriptor.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps a raw descriptor string.
    ///
    /// Exists for backends and for rehydrating the value persisted on the
    /// owning entity record; format validation happens at dispatch time.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns whether this descriptor denotes "no content stored".
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the raw descriptor string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocationDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LocationDescriptor, TrainingCategory, TrainingSubject};
    use uuid::Uuid;

    #[test]
    fn general_subject_has_no_topic() {
        let owner = Uuid::new_v4();
        let subject = TrainingSubject::general(owner);
        assert_eq!(subject.owner_id(), owner);
        assert_eq!(subject.topic_id(), None);
        assert_eq!(subject.category(), TrainingCategory::General);
    }

    #[test]
    fn topic_subject_carries_topic_id() {
        let owner = Uuid::new_v4();
        let topic = Uuid::new_v4();
        let subject = TrainingSubject::topic(owner, topic);
        assert_eq!(subject.topic_id(), Some(topic));
        assert_eq!(subject.category(), TrainingCategory::Topic);
    }

    #[test]
    fn empty_descriptor_is_empty_even_when_blank() {
        assert!(LocationDescriptor::empty().is_empty());
        assert!(LocationDescriptor::from_raw("   ").is_empty());
        assert!(!LocationDescriptor::from_raw("local:///tmp/a.txt").is_empty());
    }

    #[test]
    fn descriptor_serializes_as_plain_string() {
        let descriptor = LocationDescriptor::from_raw("local:///data/x_training.txt");
        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(json, "\"local:///data/x_training.txt\"");

        let back: LocationDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }

    #[test]
    fn subject_round_trips_through_serde() {
        let subject = TrainingSubject::topic(Uuid::new_v4(), Uuid::new_v4());
        let json = serde_json::to_string(&subject).unwrap();
        let back: TrainingSubject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subject);
    }
}
