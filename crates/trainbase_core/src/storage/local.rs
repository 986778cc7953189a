//! Local-filesystem blob backend.
//!
//! # Responsibility
//! - Durable byte storage under one configured base directory.
//! - Deterministic file naming derived from the training subject.
//!
//! # Invariants
//! - The base directory is resolved and created once at construction, never
//!   lazily on first write.
//! - Descriptors are `local://` + absolute path with forward slashes; this
//!   exact textual form round-trips through the owning entity record.
//! - Writes are full overwrites and are not atomic.

use crate::model::subject::{LocationDescriptor, TrainingSubject};
use crate::storage::{BlobBackend, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Scheme the local backend registers under.
pub const LOCAL_SCHEME: &str = "local";

/// Fixed suffix of every training content file.
const TRAINING_FILE_SUFFIX: &str = "_training.txt";

/// Filesystem-backed blob storage rooted at one base directory.
pub struct LocalBlobBackend {
    base_dir: PathBuf,
}

impl LocalBlobBackend {
    /// Creates a backend rooted at `base_dir`.
    ///
    /// The directory is created if absent and resolved to its canonical
    /// absolute form, so descriptors built later are stable regardless of
    /// the process working directory.
    ///
    /// # Errors
    /// - `StorageError::Io` when the directory cannot be created or
    ///   resolved.
    pub fn new(base_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|source| StorageError::Io {
            operation: "create base directory",
            path: base_dir.clone(),
            source,
        })?;
        let base_dir = base_dir
            .canonicalize()
            .map_err(|source| StorageError::Io {
                operation: "resolve base directory",
                path: base_dir.clone(),
                source,
            })?;
        Ok(Self { base_dir })
    }

    /// Returns the resolved base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the deterministic absolute path for one subject.
    fn path_for(&self, subject: &TrainingSubject) -> PathBuf {
        let file_name = match subject.topic_id() {
            None => format!("{}_general{TRAINING_FILE_SUFFIX}", subject.owner_id()),
            Some(topic_id) => format!(
                "{}_topic_{topic_id}{TRAINING_FILE_SUFFIX}",
                subject.owner_id()
            ),
        };
        self.base_dir.join(file_name)
    }
}

impl BlobBackend for LocalBlobBackend {
    fn scheme(&self) -> &str {
        LOCAL_SCHEME
    }

    fn locate(&self, subject: &TrainingSubject) -> LocationDescriptor {
        // Scope is encoded in the file name, so general and topic content
        // of one owner never collide.
        let path = normalize_slashes(&self.path_for(subject));
        LocationDescriptor::from_raw(format!("{LOCAL_SCHEME}://{path}"))
    }

    fn read(&self, path: &str) -> StorageResult<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            // Missing and empty both read as empty content.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(StorageError::Io {
                operation: "read",
                path: PathBuf::from(path),
                source,
            }),
        }
    }

    fn write(&self, path: &str, content: &str) -> StorageResult<()> {
        let target = PathBuf::from(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                operation: "create parent directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target, content).map_err(|source| StorageError::Io {
            operation: "write",
            path: target,
            source,
        })
    }

    fn delete(&self, path: &str) -> StorageResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                operation: "delete",
                path: PathBuf::from(path),
                source,
            }),
        }
    }
}

/// Normalizes a filesystem path into the descriptor's textual form.
fn normalize_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
