//! Boundary contracts toward the owning-entity repository.
//!
//! # Responsibility
//! - Define how the storage subsystem hands location descriptors to the
//!   external entity repository for persistence.
//!
//! # Invariants
//! - The core never performs entity persistence itself; it only calls
//!   through this boundary.

pub mod location_repo;
