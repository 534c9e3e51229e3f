//! Shelf reference entity.
//!
//! The registry validates shelf-to-unit ownership but deliberately keeps the
//! shelf surface minimal; shelves are a directory the store room maintains,
//! not a workflow of their own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a physical shelf.
pub type ShelfId = Uuid;

/// A physical storage location inside one unit's store room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// Stable shelf ID.
    pub id: ShelfId,
    /// Owning unit; items may only be filed on shelves of their own unit.
    pub unit_id: String,
    /// Short label painted on the shelf ("A-3", "Armory rack 2", ...).
    pub name: String,
    /// Optional free-form location hint.
    pub location: Option<String>,
    /// Epoch milliseconds, assigned by storage on insert.
    pub created_at: i64,
}

impl Shelf {
    /// Creates a new shelf with a generated stable ID.
    pub fn new(unit_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            unit_id: unit_id.into(),
            name: name.into(),
            location: None,
            created_at: 0,
        }
    }
}
