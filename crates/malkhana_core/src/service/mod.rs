//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Every collaborator (storage, clock) is injected at construction; the
//!   service layer holds no ambient state.

pub mod clock;
pub mod registry_service;
