//! Scheme-keyed backend registry and descriptor dispatch.
//!
//! # Responsibility
//! - Translate a training subject into its canonical location descriptor.
//! - Route descriptor operations to the backend registered for the
//!   descriptor's scheme.
//!
//! # Invariants
//! - Exactly one primary backend exists; it serves descriptor construction.
//! - Adding a backend is a registration under a new scheme, never a
//!   dispatcher edit.

use crate::model::subject::{LocationDescriptor, TrainingSubject};
use crate::storage::{BlobBackend, StorageError, StorageResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

static DESCRIPTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9+.-]*)://(.+)$").expect("valid descriptor regex"));

/// Backend registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidScheme(String),
    DuplicateScheme(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheme(value) => write!(f, "backend scheme is invalid: `{value}`"),
            Self::DuplicateScheme(value) => {
                write!(f, "backend scheme already registered: `{value}`")
            }
        }
    }
}

impl Error for RegistryError {}

/// Runtime registry of storage backends keyed by scheme.
pub struct LocationResolver {
    backends: BTreeMap<String, Arc<dyn BlobBackend>>,
    primary_scheme: String,
}

impl LocationResolver {
    /// Creates a resolver whose `primary` backend serves descriptor
    /// construction for new writes.
    ///
    /// # Errors
    /// - `RegistryError::InvalidScheme` when the primary backend reports a
    ///   malformed scheme name.
    pub fn with_primary(primary: Arc<dyn BlobBackend>) -> Result<Self, RegistryError> {
        let scheme = normalized_scheme(primary.as_ref())?;
        let mut backends: BTreeMap<String, Arc<dyn BlobBackend>> = BTreeMap::new();
        backends.insert(scheme.clone(), primary);
        Ok(Self {
            backends,
            primary_scheme: scheme,
        })
    }

    /// Registers one additional backend under its scheme.
    pub fn register(&mut self, backend: Arc<dyn BlobBackend>) -> Result<(), RegistryError> {
        let scheme = normalized_scheme(backend.as_ref())?;
        if self.backends.contains_key(scheme.as_str()) {
            return Err(RegistryError::DuplicateScheme(scheme));
        }
        self.backends.insert(scheme, backend);
        Ok(())
    }

    /// Returns sorted registered scheme names.
    pub fn schemes(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }

    /// Returns the scheme descriptors are built under.
    pub fn primary_scheme(&self) -> &str {
        &self.primary_scheme
    }

    /// Builds the canonical descriptor for one subject.
    ///
    /// Deterministic: the same subject always yields the same descriptor.
    pub fn descriptor_for(&self, subject: &TrainingSubject) -> LocationDescriptor {
        self.backends[self.primary_scheme.as_str()].locate(subject)
    }

    /// Parses a descriptor and returns the matching backend plus the path
    /// portion the backend operates on.
    ///
    /// # Errors
    /// - `StorageError::InvalidLocationFormat` when the descriptor is not a
    ///   well-formed `scheme://path` string.
    /// - `StorageError::UnsupportedScheme` when no backend is registered
    ///   for the parsed scheme.
    pub fn dispatch(
        &self,
        descriptor: &LocationDescriptor,
    ) -> StorageResult<(Arc<dyn BlobBackend>, String)> {
        let (scheme, path) = parse_descriptor(descriptor.as_str())?;
        match self.backends.get(scheme.as_str()) {
            Some(backend) => Ok((Arc::clone(backend), path)),
            None => Err(StorageError::UnsupportedScheme(scheme)),
        }
    }
}

/// Splits a descriptor into its scheme and path components.
pub fn parse_descriptor(raw: &str) -> StorageResult<(String, String)> {
    let trimmed = raw.trim();
    let captures = DESCRIPTOR_RE
        .captures(trimmed)
        .ok_or_else(|| StorageError::InvalidLocationFormat(trimmed.to_string()))?;
    Ok((captures[1].to_string(), captures[2].to_string()))
}

fn normalized_scheme(backend: &dyn BlobBackend) -> Result<String, RegistryError> {
    let scheme = backend.scheme().trim().to_string();
    if !is_valid_scheme(&scheme) {
        return Err(RegistryError::InvalidScheme(scheme));
    }
    Ok(scheme)
}

fn is_valid_scheme(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '-'))
}
