use malkhana_core::db::open_db_in_memory;
use malkhana_core::{
    CreateItemRequest, DisposalDetails, ErrorKind, EvidenceItem, FixedClock, ItemStatus,
    RegistryService, RegistryType, RepoError, SqliteItemRepository, SqliteShelfRepository,
    UnitScope, UpdateItemRequest,
};
use rusqlite::Connection;
use uuid::Uuid;

type Registry<'conn> =
    RegistryService<SqliteItemRepository<'conn>, SqliteShelfRepository<'conn>, FixedClock>;

fn service(conn: &Connection, year: i32) -> Registry<'_> {
    RegistryService::with_clock(
        SqliteItemRepository::try_new(conn).unwrap(),
        SqliteShelfRepository::try_new(conn).unwrap(),
        FixedClock::for_year(year),
    )
}

fn disposal() -> DisposalDetails {
    DisposalDetails {
        disposal_date: 1_750_000_000_000,
        reason: "destruction order".to_string(),
        approved_by: Some("SP".to_string()),
    }
}

/// Back-files `count` Red Ink items numbered 1..=count for 2024.
fn seed_red_register(registry: &Registry<'_>, scope: &UnitScope, count: u32) -> Vec<EvidenceItem> {
    (1..=count)
        .map(|sequence| {
            registry
                .create_item(
                    &CreateItemRequest {
                        registry_type: Some(RegistryType::RedInk),
                        mother_sequence: Some(sequence),
                        registry_year: Some(2024),
                        ..CreateItemRequest::default()
                    },
                    scope,
                    "officer-1",
                )
                .unwrap()
        })
        .collect()
}

fn active_red_numbers(registry: &Registry<'_>, scope: &UnitScope) -> Vec<u32> {
    registry
        .red_ink_items(scope)
        .unwrap()
        .into_iter()
        .map(|item| item.registry_number)
        .collect()
}

fn item_with_number(registry: &Registry<'_>, scope: &UnitScope, number: u32) -> EvidenceItem {
    registry
        .red_ink_items(scope)
        .unwrap()
        .into_iter()
        .find(|item| item.registry_number == number)
        .unwrap()
}

#[test]
fn disposing_middle_item_compacts_the_register() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 4);

    registry
        .dispose_item(seeded[1].id, &disposal(), &scope, "officer-1")
        .unwrap();

    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2, 3]);

    // Items formerly at 3 and 4 now sit at 2 and 3.
    let shifted_to_two = item_with_number(&registry, &scope, 2);
    assert_eq!(shifted_to_two.id, seeded[2].id);
    let shifted_to_three = item_with_number(&registry, &scope, 3);
    assert_eq!(shifted_to_three.id, seeded[3].id);

    // One history row per shifted item, recording the vacated number.
    let history = registry.renumber_history(seeded[2].id, &scope).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].red_ink_id, 3);
    assert_eq!(history[0].year, 2025);

    let history = registry.renumber_history(seeded[3].id, &scope).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].red_ink_id, 4);

    // The untouched item below the gap has no history.
    assert!(registry
        .renumber_history(seeded[0].id, &scope)
        .unwrap()
        .is_empty());
}

#[test]
fn disposing_highest_number_shifts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 4);

    registry
        .dispose_item(seeded[3].id, &disposal(), &scope, "officer-1")
        .unwrap();

    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2, 3]);
    let events: i64 = conn
        .query_row("SELECT COUNT(*) FROM renumber_events;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(events, 0);
}

#[test]
fn black_ink_disposal_triggers_no_renumbering() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");

    let items: Vec<_> = (0..3)
        .map(|_| {
            registry
                .create_item(&CreateItemRequest::default(), &scope, "officer-1")
                .unwrap()
        })
        .collect();

    registry
        .dispose_item(items[1].id, &disposal(), &scope, "officer-1")
        .unwrap();

    let remaining = registry.black_ink_items(&scope).unwrap();
    let numbers: Vec<u32> = remaining.iter().map(|item| item.registry_number).collect();
    assert_eq!(numbers, vec![1, 3]);

    let events: i64 = conn
        .query_row("SELECT COUNT(*) FROM renumber_events;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(events, 0);
}

#[test]
fn second_disposal_fails_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 3);

    let disposed = registry
        .dispose_item(seeded[1].id, &disposal(), &scope, "officer-1")
        .unwrap();
    assert_eq!(disposed.status, ItemStatus::Disposed);

    let err = registry
        .dispose_item(
            seeded[1].id,
            &DisposalDetails {
                disposal_date: 1_760_000_000_000,
                reason: "second attempt".to_string(),
                approved_by: None,
            },
            &scope,
            "officer-1",
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::BusinessRule(_)));
    assert_eq!(err.kind(), ErrorKind::BusinessRule);

    let reloaded = registry.item_by_id(seeded[1].id, &scope).unwrap();
    assert_eq!(reloaded.disposal_reason.as_deref(), Some("destruction order"));
    assert_eq!(reloaded.registry_number, disposed.registry_number);
    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2]);
}

#[test]
fn repeated_disposals_keep_the_register_dense() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 5);

    registry
        .dispose_item(seeded[1].id, &disposal(), &scope, "officer-1")
        .unwrap();
    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2, 3, 4]);

    // seeded[3] started at 4, shifted to 3; dispose it next.
    registry
        .dispose_item(seeded[3].id, &disposal(), &scope, "officer-1")
        .unwrap();
    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2, 3]);

    // seeded[4] has been shifted twice: 5 -> 4, then 4 -> 3.
    let history = registry.renumber_history(seeded[4].id, &scope).unwrap();
    let vacated: Vec<u32> = history.iter().map(|event| event.red_ink_id).collect();
    assert_eq!(vacated, vec![5, 4]);
    assert_eq!(
        registry.item_by_id(seeded[4].id, &scope).unwrap().registry_number,
        3
    );
}

#[test]
fn disposed_items_keep_their_frozen_numbers() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 3);

    registry
        .dispose_item(seeded[1].id, &disposal(), &scope, "officer-1")
        .unwrap();

    // The disposed item stays at 2 even though the active item formerly at 3
    // now holds 2 as well; disposed numbers are frozen, not recycled rows.
    let frozen = registry.item_by_id(seeded[1].id, &scope).unwrap();
    assert_eq!(frozen.status, ItemStatus::Disposed);
    assert_eq!(frozen.registry_number, 2);
    assert!(registry
        .renumber_history(seeded[1].id, &scope)
        .unwrap()
        .is_empty());
}

#[test]
fn cross_unit_disposal_is_forbidden_for_scoped_callers() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let owner = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &owner, 1);

    let err = registry
        .dispose_item(
            seeded[0].id,
            &disposal(),
            &UnitScope::scoped("unit-b"),
            "officer-2",
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::Forbidden { .. }));
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    // Administrators bypass the unit fence.
    registry
        .dispose_item(seeded[0].id, &disposal(), &UnitScope::Unrestricted, "admin")
        .unwrap();
}

#[test]
fn disposing_missing_item_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);

    let err = registry
        .dispose_item(
            Uuid::new_v4(),
            &disposal(),
            &UnitScope::scoped("unit-a"),
            "officer-1",
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::ItemNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn generic_update_cannot_dispose() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 2);

    let err = registry
        .update_item(
            seeded[0].id,
            &UpdateItemRequest {
                status: Some(ItemStatus::Disposed),
                ..UpdateItemRequest::default()
            },
            &scope,
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::BusinessRule(_)));

    // Nothing changed, nothing renumbered.
    assert_eq!(
        registry.item_by_id(seeded[0].id, &scope).unwrap().status,
        ItemStatus::Active
    );
    assert_eq!(active_red_numbers(&registry, &scope), vec![1, 2]);
}

#[test]
fn updates_to_non_terminal_items_still_work() {
    let conn = open_db_in_memory().unwrap();
    let registry = service(&conn, 2025);
    let scope = UnitScope::scoped("unit-a");
    let seeded = seed_red_register(&registry, &scope, 1);

    let updated = registry
        .update_item(
            seeded[0].id,
            &UpdateItemRequest {
                status: Some(ItemStatus::Transferred),
                case_number: Some("FIR-2024-117".to_string()),
                ..UpdateItemRequest::default()
            },
            &scope,
        )
        .unwrap();
    assert_eq!(updated.status, ItemStatus::Transferred);
    assert_eq!(updated.case_number.as_deref(), Some("FIR-2024-117"));

    registry
        .dispose_item(seeded[0].id, &disposal(), &scope, "officer-1")
        .unwrap();
    let err = registry
        .update_item(seeded[0].id, &UpdateItemRequest::default(), &scope)
        .unwrap_err();
    assert!(matches!(err, RepoError::BusinessRule(_)));
}
