//! Core domain logic for the Malkhana evidence registry.
//! This crate is the single source of truth for registry-numbering
//! invariants: mother-number assignment, Red Ink compaction on disposal,
//! and the Black→Red year transition.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{
    DisposalDetails, EvidenceItem, ItemId, ItemStatus, MotherNumber, RegistryType, RenumberEvent,
    UnitScope, ValidationError,
};
pub use model::shelf::{Shelf, ShelfId};
pub use repo::item_repo::{
    ErrorKind, ItemListQuery, ItemRepository, RegistryStats, RepoError, RepoResult,
    SqliteItemRepository,
};
pub use repo::shelf_repo::{ShelfRepository, SqliteShelfRepository};
pub use search::substring::{search_items, ItemSearchQuery, SearchError, SearchResult};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::registry_service::{
    CreateItemRequest, CreateShelfRequest, RegistryService, UpdateItemRequest,
    YearTransitionSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
