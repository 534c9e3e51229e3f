//! Evidence item domain model.
//!
//! # Responsibility
//! - Define the canonical custody record shared by both physical registers.
//! - Own mother-number formatting/parsing so the two numeric components are
//!   the single source of truth and the `"{year}-{seq:05}"` string is derived.
//!
//! # Invariants
//! - `mother_number` is immutable once an item is persisted.
//! - `registry_number` is stable for Black Ink items; for Red Ink items it is
//!   a dense rank that is compacted when a disposal frees a slot.
//! - `Disposed` is the only terminal status; a disposed item's registry
//!   number is frozen at the moment of disposal.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

use crate::model::shelf::ShelfId;

/// Stable identifier for every evidence item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Physical register an item is currently filed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryType {
    /// Current-year active register; registry number stable once assigned.
    BlackInk,
    /// Historical/overflow register; registry number is a dense rank.
    RedInk,
}

/// Custody lifecycle state of an evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// In custody and visible in the live register.
    Active,
    /// Destroyed, auctioned or otherwise written off. Terminal.
    Disposed,
    /// Handed over to another unit or court.
    Transferred,
    /// Returned to its owner.
    Released,
}

impl ItemStatus {
    /// Returns whether this status ends the item lifecycle.
    ///
    /// Only `Disposed` is terminal; `Transferred` and `Released` items can
    /// still be corrected through generic updates.
    pub fn is_terminal(self) -> bool {
        self == Self::Disposed
    }
}

/// Permanent identifier of an evidence item, assigned once at creation.
///
/// Stored as its two numeric components; the canonical string form
/// `"{year}-{sequence:05}"` exists only at presentation boundaries. Keeping
/// the components numeric makes every max/ordering query numeric by
/// construction and removes the lexicographic-sort failure mode entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MotherNumber {
    /// Four-digit filing year embedded in the number. Never changes.
    pub year: i32,
    /// 1-based sequence within the year. Never changes.
    pub sequence: u32,
}

impl MotherNumber {
    /// Creates a mother number, rejecting out-of-range components.
    pub fn new(year: i32, sequence: u32) -> Result<Self, ValidationError> {
        if !(MIN_REGISTRY_YEAR..=MAX_REGISTRY_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }
        if sequence == 0 {
            return Err(ValidationError::ZeroMotherSequence);
        }
        Ok(Self { year, sequence })
    }
}

impl Display for MotherNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:05}", self.year, self.sequence)
    }
}

impl FromStr for MotherNumber {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedMotherNumber(value.to_string());
        let (year_text, sequence_text) = value.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year_text.parse().map_err(|_| malformed())?;
        let sequence: u32 = sequence_text.parse().map_err(|_| malformed())?;
        Self::new(year, sequence)
    }
}

/// Lower bound for year components; the register format carries four digits.
pub const MIN_REGISTRY_YEAR: i32 = 1000;
/// Upper bound for year components.
pub const MAX_REGISTRY_YEAR: i32 = 9999;

/// Acting-unit context for every registry operation.
///
/// The administrator ("unrestricted") view is a first-class variant instead
/// of a null unit id, so bypass paths are type-checked and cannot be confused
/// with "no unit assigned", which is a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitScope {
    /// Caller acts for exactly one unit; reads and writes are fenced to it.
    Scoped(String),
    /// Administrator context: reads are global, ownership checks bypassed.
    Unrestricted,
}

impl UnitScope {
    /// Convenience constructor for the scoped variant.
    pub fn scoped(unit_id: impl Into<String>) -> Self {
        Self::Scoped(unit_id.into())
    }

    /// Returns the fenced unit id, or `None` for the unrestricted view.
    pub fn unit_id(&self) -> Option<&str> {
        match self {
            Self::Scoped(unit_id) => Some(unit_id),
            Self::Unrestricted => None,
        }
    }

    /// Returns whether this scope may touch records owned by `unit_id`.
    pub fn can_access(&self, unit_id: &str) -> bool {
        match self {
            Self::Scoped(own) => own == unit_id,
            Self::Unrestricted => true,
        }
    }
}

/// Canonical custody record for one piece of evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Stable global ID used for linking and auditing.
    pub id: ItemId,
    /// Permanent register identity; see [`MotherNumber`].
    pub mother_number: MotherNumber,
    /// Current filing position. Meaning depends on `registry_type`.
    pub registry_number: u32,
    /// Register this item is currently filed in.
    pub registry_type: RegistryType,
    /// Filing year associated with the current registry number. Distinct
    /// from `mother_number.year`, which never changes.
    pub registry_year: i32,
    /// Owning unit. All registry-number scoping happens inside this unit.
    pub unit_id: String,
    /// Custody lifecycle state.
    pub status: ItemStatus,
    /// Optional physical location reference, owned by the same unit.
    pub shelf_id: Option<ShelfId>,
    /// FIR/case reference this item belongs to.
    pub case_number: Option<String>,
    /// Free-form item category (weapon, vehicle, cash, ...).
    pub category: Option<String>,
    /// Free-form item description.
    pub description: Option<String>,
    /// Person or agency the item was received from.
    pub received_from: Option<String>,
    /// Disposal timestamp in epoch milliseconds. Set on disposal only.
    pub disposal_date: Option<i64>,
    /// Reason recorded at disposal.
    pub disposal_reason: Option<String>,
    /// Officer who approved the disposal.
    pub disposal_approved_by: Option<String>,
    /// User who created the record.
    pub created_by: String,
    /// Epoch milliseconds, assigned by storage on insert.
    pub created_at: i64,
    /// Epoch milliseconds, maintained by storage on every write.
    pub updated_at: i64,
}

impl EvidenceItem {
    /// Creates a new active item with a generated stable ID.
    ///
    /// # Invariants
    /// - Descriptive and disposal fields start as `None`.
    /// - Timestamps start at zero and are assigned by storage on insert.
    pub fn new(
        mother_number: MotherNumber,
        registry_type: RegistryType,
        registry_number: u32,
        registry_year: i32,
        unit_id: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mother_number,
            registry_number,
            registry_type,
            registry_year,
            unit_id: unit_id.into(),
            status: ItemStatus::Active,
            shelf_id: None,
            case_number: None,
            category: None,
            description: None,
            received_from: None,
            disposal_date: None,
            disposal_reason: None,
            disposal_approved_by: None,
            created_by: created_by.into(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Checks field-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.unit_id.trim().is_empty() {
            return Err(ValidationError::EmptyUnitId);
        }
        if self.created_by.trim().is_empty() {
            return Err(ValidationError::EmptyCreatedBy);
        }
        if self.registry_number == 0 {
            return Err(ValidationError::ZeroRegistryNumber);
        }
        if !(MIN_REGISTRY_YEAR..=MAX_REGISTRY_YEAR).contains(&self.registry_year) {
            return Err(ValidationError::YearOutOfRange(self.registry_year));
        }
        // Re-checked here because serde can construct the components directly.
        let _ = MotherNumber::new(self.mother_number.year, self.mother_number.sequence)?;
        Ok(())
    }
}

/// Disposal metadata recorded when an item leaves custody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalDetails {
    /// Disposal timestamp in epoch milliseconds.
    pub disposal_date: i64,
    /// Reason for disposal (court order, auction, destruction, ...).
    pub reason: String,
    /// Officer who approved the disposal.
    pub approved_by: Option<String>,
}

/// Audit record of a registry number an item held before renumbering.
///
/// Created only when a Red Ink disposal shifts the item, or when a
/// year-transition re-files an item that already carried a Red Ink number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenumberEvent {
    /// Owning evidence item.
    pub item_id: ItemId,
    /// Calendar year the snapshot was taken.
    pub year: i32,
    /// Registry number held immediately before the renumbering.
    pub red_ink_id: u32,
    /// Epoch milliseconds, assigned by storage on insert.
    pub created_at: i64,
}

/// Field-level validation failure raised before any persistence happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUnitId,
    EmptyCreatedBy,
    EmptyShelfName,
    ZeroRegistryNumber,
    ZeroMotherSequence,
    YearOutOfRange(i32),
    MalformedMotherNumber(String),
    MissingMotherSequence,
    MissingRegistryYear,
    FutureTransitionYear { transition_year: i32, current_year: i32 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUnitId => write!(f, "unit id must not be empty"),
            Self::EmptyCreatedBy => write!(f, "created_by must not be empty"),
            Self::EmptyShelfName => write!(f, "shelf name must not be empty"),
            Self::ZeroRegistryNumber => write!(f, "registry number must be >= 1"),
            Self::ZeroMotherSequence => write!(f, "mother number sequence must be >= 1"),
            Self::YearOutOfRange(year) => {
                write!(
                    f,
                    "year {year} is outside the supported range {MIN_REGISTRY_YEAR}..={MAX_REGISTRY_YEAR}"
                )
            }
            Self::MalformedMotherNumber(value) => {
                write!(f, "malformed mother number `{value}`; expected `YYYY-NNNNN`")
            }
            Self::MissingMotherSequence => {
                write!(f, "red ink items require a caller-supplied mother number")
            }
            Self::MissingRegistryYear => {
                write!(f, "red ink items require a caller-supplied registry year")
            }
            Self::FutureTransitionYear {
                transition_year,
                current_year,
            } => write!(
                f,
                "cannot close out year {transition_year}: it is later than the current year {current_year}"
            ),
        }
    }
}

impl Error for ValidationError {}
