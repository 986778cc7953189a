//! Use-case services over the storage subsystem.
//!
//! # Responsibility
//! - Orchestrate policy, resolver and backend calls into the public
//!   set/get/delete contract.
//! - Integrate with the external entity repository for descriptor
//!   persistence.
//!
//! # Invariants
//! - Failed validation leaves a subject's stored state unchanged.
//! - No retries happen inside the subsystem.

pub mod lifecycle_service;
pub mod training_service;
