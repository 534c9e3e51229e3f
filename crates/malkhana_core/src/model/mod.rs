//! Domain model for the Malkhana evidence registry.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep registry-number semantics (Black Ink vs Red Ink) in one place.
//!
//! # Invariants
//! - Every evidence item is identified by a stable `ItemId`.
//! - A mother number is assigned exactly once and never changes afterwards.
//! - Deletion of custody records is represented by the `Disposed` status,
//!   never by hard delete.

pub mod item;
pub mod shelf;
