//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for items and shelves.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model validation before persistence.
//! - Repository APIs return semantic errors (`ItemNotFound`,
//!   `MotherNumberConflict`, ...) in addition to DB transport errors.
//! - Multi-row writes (disposal renumbering, year transition) commit inside
//!   one immediate transaction or not at all.

pub mod item_repo;
pub mod shelf_repo;
