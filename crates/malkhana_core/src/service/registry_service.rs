//! Evidence registry use-case service.
//!
//! # Responsibility
//! - Provide the registry operations: creation with mother-number
//!   assignment, disposal with Red Ink renumbering, the Black→Red year
//!   transition, queries, generic updates and shelf assignment.
//! - Resolve the acting unit from the caller's scope and fence every
//!   cross-unit access.
//!
//! # Invariants
//! - A mother number is computed exactly once, at creation, and no service
//!   path ever rewrites it.
//! - After any disposal completes, active Red Ink registry numbers in the
//!   affected unit form a dense `1..=k` sequence.
//! - Disposal is only reachable through [`RegistryService::dispose_item`];
//!   the generic update path rejects `Disposed`.

use crate::model::item::{
    DisposalDetails, EvidenceItem, ItemId, ItemStatus, MotherNumber, RegistryType, RenumberEvent,
    UnitScope, ValidationError,
};
use crate::model::shelf::{Shelf, ShelfId};
use crate::repo::item_repo::{
    ItemListQuery, ItemRepository, RegistryStats, RenumberAssignment, RepoError, RepoResult,
    YearTransitionAssignment,
};
use crate::repo::shelf_repo::ShelfRepository;
use crate::search::substring::ItemSearchQuery;
use crate::service::clock::{Clock, SystemClock};
use log::info;
use serde::{Deserialize, Serialize};

const STATS_WINDOW_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Use-case service for the evidence registry.
///
/// All collaborators are injected at construction; the service holds no
/// ambient state and re-reads current storage state on every operation.
pub struct RegistryService<R, S, C = SystemClock> {
    items: R,
    shelves: S,
    clock: C,
}

/// Request model for creating an evidence item.
///
/// `registry_type` defaults to Black Ink when absent. The Red Ink branch
/// back-files manually and requires `mother_sequence` + `registry_year`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Owning unit; consulted only when the caller's scope is unrestricted.
    pub unit_id: Option<String>,
    pub registry_type: Option<RegistryType>,
    /// Mother-number sequence for Red Ink back-filing.
    pub mother_sequence: Option<u32>,
    /// Filing year for Red Ink back-filing.
    pub registry_year: Option<i32>,
    pub shelf_id: Option<ShelfId>,
    pub case_number: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub received_from: Option<String>,
}

/// Request model for the generic field update.
///
/// `None` fields are left unchanged; this path cannot clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub case_number: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub received_from: Option<String>,
    /// New lifecycle status. `Disposed` is rejected here; disposal must go
    /// through [`RegistryService::dispose_item`] so renumbering always fires.
    pub status: Option<ItemStatus>,
}

/// Request model for creating a shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShelfRequest {
    /// Owning unit; consulted only when the caller's scope is unrestricted.
    pub unit_id: Option<String>,
    pub name: String,
    pub location: Option<String>,
}

/// Outcome summary of one year-transition run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTransitionSummary {
    pub success: bool,
    pub message: String,
    pub items_transitioned: u32,
    pub previous_year: i32,
    pub new_year: i32,
}

impl<R: ItemRepository, S: ShelfRepository> RegistryService<R, S, SystemClock> {
    /// Creates a service on the wall clock.
    pub fn new(items: R, shelves: S) -> Self {
        Self::with_clock(items, shelves, SystemClock)
    }
}

impl<R: ItemRepository, S: ShelfRepository, C: Clock> RegistryService<R, S, C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(items: R, shelves: S, clock: C) -> Self {
        Self {
            items,
            shelves,
            clock,
        }
    }

    /// Creates an evidence item and assigns its permanent mother number.
    ///
    /// Black Ink items receive the next free sequence for the acting unit
    /// and current calendar year. Red Ink items are back-filed with the
    /// caller-supplied number and fail on a global mother-number conflict.
    pub fn create_item(
        &self,
        request: &CreateItemRequest,
        scope: &UnitScope,
        user_id: &str,
    ) -> RepoResult<EvidenceItem> {
        let unit_id = effective_unit(scope, request.unit_id.as_deref())?;
        let registry_type = request.registry_type.unwrap_or(RegistryType::BlackInk);

        let (mother_number, registry_number, registry_year) = match registry_type {
            RegistryType::RedInk => {
                let sequence = request
                    .mother_sequence
                    .ok_or(RepoError::Validation(ValidationError::MissingMotherSequence))?;
                let year = request
                    .registry_year
                    .ok_or(RepoError::Validation(ValidationError::MissingRegistryYear))?;
                let mother_number = MotherNumber::new(year, sequence)?;
                if self.items.find_by_mother_number(mother_number)?.is_some() {
                    return Err(RepoError::MotherNumberConflict(mother_number));
                }
                (mother_number, sequence, year)
            }
            RegistryType::BlackInk => {
                let year = self.clock.current_year();
                let next = self
                    .items
                    .max_mother_sequence(&unit_id, year)?
                    .unwrap_or(0)
                    .saturating_add(1);
                (MotherNumber::new(year, next)?, next, year)
            }
        };

        if let Some(shelf_id) = request.shelf_id {
            self.ensure_shelf_usable(shelf_id, &unit_id, scope)?;
        }

        let mut item = EvidenceItem::new(
            mother_number,
            registry_type,
            registry_number,
            registry_year,
            unit_id,
            user_id,
        );
        item.shelf_id = request.shelf_id;
        item.case_number = request.case_number.clone();
        item.category = request.category.clone();
        item.description = request.description.clone();
        item.received_from = request.received_from.clone();

        self.items.create_item(&item)?;
        info!(
            "event=item_created module=registry status=ok unit={} mother={} registry_number={} user={user_id}",
            item.unit_id, item.mother_number, item.registry_number
        );

        self.require_item(item.id)
    }

    /// Disposes an item; for Red Ink items this also compacts the register.
    ///
    /// Every active Red Ink item of the same unit whose registry number is
    /// higher than the disposed one shifts down by one to close the gap,
    /// with the vacated number recorded as history before any reassignment.
    /// Items keep their relative order; nothing outside the gap is touched.
    pub fn dispose_item(
        &self,
        id: ItemId,
        disposal: &DisposalDetails,
        scope: &UnitScope,
        user_id: &str,
    ) -> RepoResult<EvidenceItem> {
        let item = self.require_item(id)?;
        ensure_scope(scope, &item.unit_id)?;
        if item.status == ItemStatus::Disposed {
            return Err(RepoError::BusinessRule(
                "item is already disposed".to_string(),
            ));
        }

        let plan = if item.registry_type == RegistryType::RedInk {
            let shifted = self.items.list_items(&ItemListQuery {
                unit_id: Some(item.unit_id.clone()),
                registry_type: Some(RegistryType::RedInk),
                status: Some(ItemStatus::Active),
                registry_number_above: Some(item.registry_number),
                ..ItemListQuery::default()
            })?;
            plan_disposal_renumbering(&shifted, item.registry_number, self.clock.current_year())
        } else {
            Vec::new()
        };

        self.items.dispose_and_renumber(id, disposal, &plan)?;
        info!(
            "event=item_disposed module=registry status=ok unit={} mother={} shifted={} user={user_id}",
            item.unit_id,
            item.mother_number,
            plan.len()
        );

        self.require_item(id)
    }

    /// Carries a closed year's Black Ink items over into the Red Ink
    /// register.
    ///
    /// The year being closed is `new_year - 1`; closing a future year is a
    /// validation error, and a year with nothing to carry over is a
    /// successful no-op. Items are re-filed in ascending registry-number
    /// order (creation order breaking ties) and numbered sequentially after
    /// the unit's highest existing Red Ink number.
    pub fn perform_year_transition(
        &self,
        unit_id: &str,
        new_year: i32,
        user_id: &str,
    ) -> RepoResult<YearTransitionSummary> {
        let transition_year = new_year - 1;
        let current_year = self.clock.current_year();
        if transition_year > current_year {
            return Err(RepoError::Validation(ValidationError::FutureTransitionYear {
                transition_year,
                current_year,
            }));
        }

        let eligible = self.items.list_items(&ItemListQuery {
            unit_id: Some(unit_id.to_string()),
            registry_type: Some(RegistryType::BlackInk),
            registry_year: Some(transition_year),
            status: Some(ItemStatus::Active),
            ..ItemListQuery::default()
        })?;

        if eligible.is_empty() {
            return Ok(YearTransitionSummary {
                success: true,
                message: format!("no black ink items to carry over from {transition_year}"),
                items_transitioned: 0,
                previous_year: transition_year,
                new_year,
            });
        }

        let first_number = self
            .items
            .max_red_ink_number(unit_id)?
            .unwrap_or(0)
            .saturating_add(1);
        let assignments = plan_year_transition(&eligible, first_number, current_year);
        self.items.apply_year_transition(&assignments)?;

        let count = assignments.len() as u32;
        info!(
            "event=year_transition module=registry status=ok unit={unit_id} previous_year={transition_year} new_year={new_year} items={count} user={user_id}"
        );

        Ok(YearTransitionSummary {
            success: true,
            message: format!(
                "{count} item(s) carried over from {transition_year} into the red ink register"
            ),
            items_transitioned: count,
            previous_year: transition_year,
            new_year,
        })
    }

    /// Lists the live Black Ink register: active items filed under the
    /// current calendar year, ordered by registry number.
    pub fn black_ink_items(&self, scope: &UnitScope) -> RepoResult<Vec<EvidenceItem>> {
        self.items.list_items(&ItemListQuery {
            unit_id: scope.unit_id().map(str::to_string),
            registry_type: Some(RegistryType::BlackInk),
            registry_year: Some(self.clock.current_year()),
            status: Some(ItemStatus::Active),
            ..ItemListQuery::default()
        })
    }

    /// Lists the live Red Ink register, ordered by registry number.
    pub fn red_ink_items(&self, scope: &UnitScope) -> RepoResult<Vec<EvidenceItem>> {
        self.items.list_items(&ItemListQuery {
            unit_id: scope.unit_id().map(str::to_string),
            registry_type: Some(RegistryType::RedInk),
            status: Some(ItemStatus::Active),
            ..ItemListQuery::default()
        })
    }

    /// Point lookup by stable ID, fenced to the caller's scope.
    pub fn item_by_id(&self, id: ItemId, scope: &UnitScope) -> RepoResult<EvidenceItem> {
        let item = self.require_item(id)?;
        ensure_scope(scope, &item.unit_id)?;
        Ok(item)
    }

    /// Point lookup by mother number. The lookup itself is global (mother
    /// numbers are unique store-wide); visibility is still fenced, so a hit
    /// in a foreign unit is a forbidden error, not a not-found.
    pub fn find_by_mother_number(
        &self,
        number: MotherNumber,
        scope: &UnitScope,
    ) -> RepoResult<EvidenceItem> {
        let item = self
            .items
            .find_by_mother_number(number)?
            .ok_or(RepoError::MotherNumberNotFound(number))?;
        ensure_scope(scope, &item.unit_id)?;
        Ok(item)
    }

    /// Case-insensitive substring search over the scoped register.
    pub fn search_items(&self, text: &str, scope: &UnitScope) -> RepoResult<Vec<EvidenceItem>> {
        let mut query = ItemSearchQuery::new(text);
        query.unit_id = scope.unit_id().map(str::to_string);
        self.items.search_items(&query)
    }

    /// Aggregate register counters for dashboards.
    pub fn registry_stats(&self, scope: &UnitScope) -> RepoResult<RegistryStats> {
        let window_start = self.clock.now_epoch_ms().saturating_sub(STATS_WINDOW_MS);
        self.items
            .registry_stats(scope.unit_id(), self.clock.current_year(), window_start)
    }

    /// Ordered history of every registry number an item has held.
    pub fn renumber_history(
        &self,
        item_id: ItemId,
        scope: &UnitScope,
    ) -> RepoResult<Vec<RenumberEvent>> {
        let item = self.require_item(item_id)?;
        ensure_scope(scope, &item.unit_id)?;
        self.items.list_renumber_events(item_id)
    }

    /// Generic field update for a non-terminal item.
    pub fn update_item(
        &self,
        id: ItemId,
        changes: &UpdateItemRequest,
        scope: &UnitScope,
    ) -> RepoResult<EvidenceItem> {
        let mut item = self.require_item(id)?;
        ensure_scope(scope, &item.unit_id)?;
        if item.status.is_terminal() {
            return Err(RepoError::BusinessRule(
                "disposed items cannot be updated".to_string(),
            ));
        }
        if changes.status == Some(ItemStatus::Disposed) {
            return Err(RepoError::BusinessRule(
                "disposal must go through the disposal operation".to_string(),
            ));
        }

        if let Some(case_number) = &changes.case_number {
            item.case_number = Some(case_number.clone());
        }
        if let Some(category) = &changes.category {
            item.category = Some(category.clone());
        }
        if let Some(description) = &changes.description {
            item.description = Some(description.clone());
        }
        if let Some(received_from) = &changes.received_from {
            item.received_from = Some(received_from.clone());
        }
        if let Some(status) = changes.status {
            item.status = status;
        }

        self.items.update_item(&item)?;
        self.require_item(id)
    }

    /// (Re)assigns an item to a shelf, or clears the assignment with `None`.
    pub fn assign_shelf(
        &self,
        item_id: ItemId,
        shelf_id: Option<ShelfId>,
        scope: &UnitScope,
    ) -> RepoResult<EvidenceItem> {
        let mut item = self.require_item(item_id)?;
        ensure_scope(scope, &item.unit_id)?;

        if let Some(shelf_id) = shelf_id {
            self.ensure_shelf_usable(shelf_id, &item.unit_id, scope)?;
        }

        item.shelf_id = shelf_id;
        self.items.update_item(&item)?;
        self.require_item(item_id)
    }

    /// Creates a shelf in the acting unit's directory.
    pub fn create_shelf(
        &self,
        request: &CreateShelfRequest,
        scope: &UnitScope,
    ) -> RepoResult<Shelf> {
        let unit_id = effective_unit(scope, request.unit_id.as_deref())?;
        let mut shelf = Shelf::new(unit_id, request.name.clone());
        shelf.location = request.location.clone();
        self.shelves.create_shelf(&shelf)?;
        self.shelves
            .get_shelf(shelf.id)?
            .ok_or_else(|| RepoError::InvalidData("created shelf not readable back".to_string()))
    }

    /// Lists the scoped shelf directory.
    pub fn shelves(&self, scope: &UnitScope) -> RepoResult<Vec<Shelf>> {
        self.shelves.list_shelves(scope.unit_id())
    }

    fn require_item(&self, id: ItemId) -> RepoResult<EvidenceItem> {
        self.items.get_item(id)?.ok_or(RepoError::ItemNotFound(id))
    }

    fn ensure_shelf_usable(
        &self,
        shelf_id: ShelfId,
        unit_id: &str,
        scope: &UnitScope,
    ) -> RepoResult<()> {
        let shelf = self
            .shelves
            .get_shelf(shelf_id)?
            .ok_or(RepoError::ShelfNotFound(shelf_id))?;
        if matches!(scope, UnitScope::Unrestricted) {
            return Ok(());
        }
        if shelf.unit_id != unit_id {
            return Err(RepoError::Forbidden {
                unit_id: shelf.unit_id,
            });
        }
        Ok(())
    }
}

/// Resolves the unit an operation acts for.
///
/// A scoped caller always acts for its own unit; an unrestricted caller must
/// name the unit in the submitted data. No unit at all is a validation error,
/// never an implicit global write.
fn effective_unit(scope: &UnitScope, submitted: Option<&str>) -> RepoResult<String> {
    let candidate = match scope {
        UnitScope::Scoped(unit_id) => Some(unit_id.as_str()),
        UnitScope::Unrestricted => submitted,
    };

    match candidate.map(str::trim).filter(|unit| !unit.is_empty()) {
        Some(unit) => Ok(unit.to_string()),
        None => Err(RepoError::Validation(ValidationError::EmptyUnitId)),
    }
}

fn ensure_scope(scope: &UnitScope, unit_id: &str) -> RepoResult<()> {
    if scope.can_access(unit_id) {
        return Ok(());
    }
    Err(RepoError::Forbidden {
        unit_id: unit_id.to_string(),
    })
}

/// Computes the renumbering cycle for one Red Ink disposal.
///
/// `shifted_items` must be the active Red Ink items with registry numbers
/// strictly greater than the freed one, ascending. Each slides down into the
/// slot before it, starting at the freed number; relative order is preserved
/// and the unit's highest number comes free at the top.
fn plan_disposal_renumbering(
    shifted_items: &[EvidenceItem],
    freed_number: u32,
    event_year: i32,
) -> Vec<RenumberAssignment> {
    shifted_items
        .iter()
        .enumerate()
        .map(|(offset, item)| RenumberAssignment {
            item_id: item.id,
            previous_number: item.registry_number,
            new_number: freed_number + offset as u32,
            year: event_year,
        })
        .collect()
}

/// Computes the re-filing batch for one year transition.
///
/// Items that somehow already carry a Red Ink number (legacy data) get that
/// number snapshotted into history before reassignment.
fn plan_year_transition(
    items: &[EvidenceItem],
    first_number: u32,
    event_year: i32,
) -> Vec<YearTransitionAssignment> {
    items
        .iter()
        .enumerate()
        .map(|(offset, item)| YearTransitionAssignment {
            item_id: item.id,
            new_number: first_number + offset as u32,
            previous_red_ink_number: (item.registry_type == RegistryType::RedInk)
                .then_some(item.registry_number),
            year: event_year,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{effective_unit, plan_disposal_renumbering, plan_year_transition};
    use crate::model::item::{
        EvidenceItem, MotherNumber, RegistryType, UnitScope, ValidationError,
    };
    use crate::repo::item_repo::RepoError;

    fn red_ink_item(registry_number: u32) -> EvidenceItem {
        let mother = MotherNumber::new(2024, registry_number).unwrap();
        EvidenceItem::new(
            mother,
            RegistryType::RedInk,
            registry_number,
            2024,
            "unit-a",
            "officer-1",
        )
    }

    fn black_ink_item(registry_number: u32) -> EvidenceItem {
        let mother = MotherNumber::new(2024, registry_number).unwrap();
        EvidenceItem::new(
            mother,
            RegistryType::BlackInk,
            registry_number,
            2024,
            "unit-a",
            "officer-1",
        )
    }

    #[test]
    fn disposal_plan_slides_each_item_down_one_slot() {
        let items = [red_ink_item(3), red_ink_item(4)];
        let plan = plan_disposal_renumbering(&items, 2, 2025);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].previous_number, 3);
        assert_eq!(plan[0].new_number, 2);
        assert_eq!(plan[1].previous_number, 4);
        assert_eq!(plan[1].new_number, 3);
        assert!(plan.iter().all(|assignment| assignment.year == 2025));
    }

    #[test]
    fn disposal_plan_for_highest_slot_is_empty() {
        assert!(plan_disposal_renumbering(&[], 7, 2025).is_empty());
    }

    #[test]
    fn year_transition_plan_numbers_sequentially_from_first_free_slot() {
        let items = [black_ink_item(1), black_ink_item(2), black_ink_item(3)];
        let plan = plan_year_transition(&items, 6, 2025);

        assert_eq!(
            plan.iter()
                .map(|assignment| assignment.new_number)
                .collect::<Vec<_>>(),
            vec![6, 7, 8]
        );
        assert!(plan
            .iter()
            .all(|assignment| assignment.previous_red_ink_number.is_none()));
    }

    #[test]
    fn year_transition_plan_snapshots_legacy_red_ink_numbers() {
        let plan = plan_year_transition(&[red_ink_item(9)], 10, 2025);
        assert_eq!(plan[0].previous_red_ink_number, Some(9));
        assert_eq!(plan[0].new_number, 10);
        assert_eq!(plan[0].year, 2025);
    }

    #[test]
    fn effective_unit_prefers_the_scoped_unit() {
        let unit = effective_unit(&UnitScope::scoped("unit-a"), Some("unit-b")).unwrap();
        assert_eq!(unit, "unit-a");
    }

    #[test]
    fn effective_unit_requires_submitted_unit_for_admins() {
        let unit = effective_unit(&UnitScope::Unrestricted, Some("unit-b")).unwrap();
        assert_eq!(unit, "unit-b");

        let err = effective_unit(&UnitScope::Unrestricted, None).unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::EmptyUnitId)
        ));

        let err = effective_unit(&UnitScope::Unrestricted, Some("   ")).unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::EmptyUnitId)
        ));
    }
}
