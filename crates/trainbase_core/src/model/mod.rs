//! Domain model for training-content storage.
//!
//! # Responsibility
//! - Define the subject key addressing one unit of stored training content.
//! - Define the opaque location descriptor persisted on owning entities.
//!
//! # Invariants
//! - A fixed `TrainingSubject` always maps to the same non-empty descriptor.
//! - An empty `LocationDescriptor` means "no content stored".

pub mod subject;
