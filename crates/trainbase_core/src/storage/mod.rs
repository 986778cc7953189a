//! Blob storage contracts and error kinds.
//!
//! # Responsibility
//! - Define the capability interface every storage backend implements.
//! - Define the error kinds shared across the storage subsystem.
//!
//! # Invariants
//! - "Missing blob" is never an error on read or delete; reads of absent
//!   paths return empty content and deletes of absent paths are no-ops.
//! - Writes are full overwrites and are not atomic; a crash mid-write can
//!   leave partial content.

use crate::model::subject::{LocationDescriptor, TrainingCategory, TrainingSubject};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod local;
pub mod resolver;

pub use local::{LocalBlobBackend, LOCAL_SCHEME};
pub use resolver::{LocationResolver, RegistryError};

pub type StorageResult<T> = Result<T, StorageError>;

/// Error kinds raised by the training-content storage subsystem.
#[derive(Debug)]
pub enum StorageError {
    /// Content exceeds the category's policy maximum. Caller-correctable.
    ContentTooLarge {
        category: TrainingCategory,
        limit: usize,
        actual: usize,
    },
    /// Descriptor string does not parse as `scheme://path`.
    /// Caller-correctable; indicates a corrupted or hand-built pointer.
    InvalidLocationFormat(String),
    /// Well-formed descriptor names a scheme with no registered backend.
    /// Signals a missing capability rather than a data error.
    UnsupportedScheme(String),
    /// The backend's underlying read/write/delete failed for an
    /// environmental reason. Logged in full internally; not shown verbatim
    /// to end users.
    Io {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StorageError {
    /// Returns whether the caller can correct this failure by changing its
    /// input (validation-class) as opposed to retrying or surfacing a
    /// generic message (technical-class).
    pub fn is_caller_correctable(&self) -> bool {
        matches!(
            self,
            Self::ContentTooLarge { .. } | Self::InvalidLocationFormat(_)
        )
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentTooLarge {
                category,
                limit,
                actual,
            } => write!(
                f,
                "{category} training content is too large: {actual} chars exceeds limit {limit}"
            ),
            Self::InvalidLocationFormat(descriptor) => {
                write!(f, "location descriptor is not `scheme://path`: `{descriptor}`")
            }
            Self::UnsupportedScheme(scheme) => {
                write!(f, "no storage backend registered for scheme `{scheme}`")
            }
            Self::Io {
                operation,
                path,
                source,
            } => write!(
                f,
                "storage {operation} failed at `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Capability interface implemented by every storage backend.
///
/// Backends register in the [`LocationResolver`] under their scheme name;
/// adding a backend is a registration, not a dispatcher edit. Only `local`
/// ships today; remote object stores are anticipated registration points.
pub trait BlobBackend: Send + Sync {
    /// Scheme name this backend registers under (lowercase).
    fn scheme(&self) -> &str;

    /// Builds the canonical descriptor for one subject under this backend.
    ///
    /// Must be deterministic: the same subject always yields the same
    /// descriptor, which is what makes replacement overwrite in place.
    fn locate(&self, subject: &TrainingSubject) -> LocationDescriptor;

    /// Reads the full content at `path`. Absent paths read as `""`.
    fn read(&self, path: &str) -> StorageResult<String>;

    /// Overwrites `path` with `content`, creating parent directories.
    fn write(&self, path: &str, content: &str) -> StorageResult<()>;

    /// Removes the blob at `path`. Absent paths are a successful no-op.
    fn delete(&self, path: &str) -> StorageResult<()>;
}
