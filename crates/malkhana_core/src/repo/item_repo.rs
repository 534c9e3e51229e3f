//! Evidence item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable persistence APIs over the canonical `evidence_items`
//!   storage, including the numeric max-finding queries the numbering rules
//!   depend on.
//! - Own the transactional compound writes: disposal with Red Ink
//!   renumbering, and the year-transition batch.
//!
//! # Invariants
//! - Write paths call `EvidenceItem::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Mother-number components never appear in any UPDATE statement; the
//!   assign-once rule is enforced structurally.

use crate::db::{migrations, DbError};
use crate::model::item::{
    DisposalDetails, EvidenceItem, ItemId, ItemStatus, MotherNumber, RegistryType, RenumberEvent,
    ValidationError,
};
use crate::model::shelf::ShelfId;
use crate::search::substring::{ItemSearchQuery, SearchError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub(crate) const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    mother_year,
    mother_seq,
    registry_number,
    registry_type,
    registry_year,
    unit_id,
    status,
    shelf_id,
    case_number,
    category,
    description,
    received_from,
    disposal_date,
    disposal_reason,
    disposal_approved_by,
    created_by,
    created_at,
    updated_at
FROM evidence_items";

const REQUIRED_TABLES: &[&str] = &["shelves", "evidence_items", "renumber_events"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for registry persistence and business-rule failures.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    ItemNotFound(ItemId),
    ShelfNotFound(ShelfId),
    MotherNumberNotFound(MotherNumber),
    MotherNumberConflict(MotherNumber),
    Forbidden { unit_id: String },
    BusinessRule(String),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

/// Stable classification of a [`RepoError`], for callers that translate
/// errors into transport-level codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Forbidden,
    BusinessRule,
    Storage,
}

impl RepoError {
    /// Maps every variant to its stable kind. Each failure class keeps a
    /// distinct kind so no error is ever silently reclassified.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::MotherNumberConflict(_) => ErrorKind::Conflict,
            Self::ItemNotFound(_) | Self::ShelfNotFound(_) | Self::MotherNumberNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::BusinessRule(_) => ErrorKind::BusinessRule,
            Self::Db(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => ErrorKind::Storage,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::ItemNotFound(id) => write!(f, "evidence item not found: {id}"),
            Self::ShelfNotFound(id) => write!(f, "shelf not found: {id}"),
            Self::MotherNumberNotFound(number) => {
                write!(f, "no evidence item with mother number {number}")
            }
            Self::MotherNumberConflict(number) => {
                write!(f, "mother number {number} is already assigned")
            }
            Self::Forbidden { unit_id } => {
                write!(f, "access denied: record belongs to unit `{unit_id}`")
            }
            Self::BusinessRule(message) => write!(f, "{message}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted registry data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SearchError> for RepoError {
    fn from(value: SearchError) -> Self {
        match value {
            SearchError::Db(err) => Self::Db(err),
            SearchError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

/// Query options for listing evidence items.
#[derive(Debug, Clone, Default)]
pub struct ItemListQuery {
    /// Fence to one unit; `None` lists across all units.
    pub unit_id: Option<String>,
    pub registry_type: Option<RegistryType>,
    pub registry_year: Option<i32>,
    pub status: Option<ItemStatus>,
    /// Only items with `registry_number` strictly greater than this value.
    pub registry_number_above: Option<u32>,
}

/// One registry-number reassignment inside a disposal renumbering cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberAssignment {
    pub item_id: ItemId,
    /// Number held before the shift; recorded as `red_ink_id` history.
    pub previous_number: u32,
    pub new_number: u32,
    /// Calendar year stamped onto the history row.
    pub year: i32,
}

/// One re-filing inside a year-transition batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTransitionAssignment {
    pub item_id: ItemId,
    pub new_number: u32,
    /// Set when the item already carried a Red Ink number (legacy data);
    /// that number is snapshotted into history before reassignment.
    pub previous_red_ink_number: Option<u32>,
    /// Calendar year stamped onto the history row, when one is written.
    pub year: i32,
}

/// Aggregate counters for one unit's register (or the whole store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Active Black Ink items filed under the current calendar year.
    pub black_ink_current_year: u32,
    /// Active Red Ink items, all years.
    pub red_ink_total: u32,
    /// Disposed items regardless of registry type.
    pub disposed_total: u32,
    /// Items created inside the trailing 30-day window, any status.
    pub created_last_30_days: u32,
}

/// Repository interface for evidence item persistence.
pub trait ItemRepository {
    fn create_item(&self, item: &EvidenceItem) -> RepoResult<ItemId>;
    /// Updates the mutable surface of an item: status, shelf and descriptive
    /// fields. Registry identity (mother number, registry number/type/year)
    /// never changes through this path.
    fn update_item(&self, item: &EvidenceItem) -> RepoResult<()>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<EvidenceItem>>;
    /// Global lookup: mother numbers are unique across all units.
    fn find_by_mother_number(&self, number: MotherNumber) -> RepoResult<Option<EvidenceItem>>;
    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<EvidenceItem>>;
    /// Highest mother-number sequence used in one unit for one year, over
    /// every status and registry type. Numeric by construction.
    fn max_mother_sequence(&self, unit_id: &str, year: i32) -> RepoResult<Option<u32>>;
    /// Highest Red Ink registry number in one unit, over every status.
    fn max_red_ink_number(&self, unit_id: &str) -> RepoResult<Option<u32>>;
    fn list_renumber_events(&self, item_id: ItemId) -> RepoResult<Vec<RenumberEvent>>;
    fn registry_stats(
        &self,
        unit_id: Option<&str>,
        current_year: i32,
        window_start_ms: i64,
    ) -> RepoResult<RegistryStats>;
    fn search_items(&self, query: &ItemSearchQuery) -> RepoResult<Vec<EvidenceItem>>;
    /// Marks one item disposed and applies the renumbering plan, all inside
    /// one immediate transaction. History rows are written before any
    /// registry number changes.
    fn dispose_and_renumber(
        &self,
        id: ItemId,
        disposal: &DisposalDetails,
        plan: &[RenumberAssignment],
    ) -> RepoResult<()>;
    /// Applies a year-transition batch inside one immediate transaction.
    fn apply_year_transition(&self, assignments: &[YearTransitionAssignment]) -> RepoResult<()>;
}

/// SQLite-backed evidence item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &EvidenceItem) -> RepoResult<ItemId> {
        item.validate()?;

        self.conn
            .execute(
                "INSERT INTO evidence_items (
                    uuid,
                    mother_year,
                    mother_seq,
                    registry_number,
                    registry_type,
                    registry_year,
                    unit_id,
                    status,
                    shelf_id,
                    case_number,
                    category,
                    description,
                    received_from,
                    disposal_date,
                    disposal_reason,
                    disposal_approved_by,
                    created_by
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17);",
                params![
                    item.id.to_string(),
                    item.mother_number.year,
                    i64::from(item.mother_number.sequence),
                    i64::from(item.registry_number),
                    registry_type_to_db(item.registry_type),
                    item.registry_year,
                    item.unit_id.as_str(),
                    status_to_db(item.status),
                    item.shelf_id.map(|id| id.to_string()),
                    item.case_number.as_deref(),
                    item.category.as_deref(),
                    item.description.as_deref(),
                    item.received_from.as_deref(),
                    item.disposal_date,
                    item.disposal_reason.as_deref(),
                    item.disposal_approved_by.as_deref(),
                    item.created_by.as_str(),
                ],
            )
            .map_err(|err| map_item_insert_error(err, item.mother_number))?;

        Ok(item.id)
    }

    fn update_item(&self, item: &EvidenceItem) -> RepoResult<()> {
        item.validate()?;

        let changed = self.conn.execute(
            "UPDATE evidence_items
             SET
                status = ?2,
                shelf_id = ?3,
                case_number = ?4,
                category = ?5,
                description = ?6,
                received_from = ?7,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![
                item.id.to_string(),
                status_to_db(item.status),
                item.shelf_id.map(|id| id.to_string()),
                item.case_number.as_deref(),
                item.category.as_deref(),
                item.description.as_deref(),
                item.received_from.as_deref(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::ItemNotFound(item.id));
        }

        Ok(())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<EvidenceItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn find_by_mother_number(&self, number: MotherNumber) -> RepoResult<Option<EvidenceItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE mother_year = ?1 AND mother_seq = ?2;"
        ))?;

        let mut rows = stmt.query(params![number.year, i64::from(number.sequence)])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<EvidenceItem>> {
        let mut sql = format!("{ITEM_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(unit_id) = query.unit_id.as_deref() {
            sql.push_str(" AND unit_id = ?");
            bind_values.push(Value::Text(unit_id.to_string()));
        }

        if let Some(registry_type) = query.registry_type {
            sql.push_str(" AND registry_type = ?");
            bind_values.push(Value::Text(registry_type_to_db(registry_type).to_string()));
        }

        if let Some(registry_year) = query.registry_year {
            sql.push_str(" AND registry_year = ?");
            bind_values.push(Value::Integer(i64::from(registry_year)));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status_to_db(status).to_string()));
        }

        if let Some(above) = query.registry_number_above {
            sql.push_str(" AND registry_number > ?");
            bind_values.push(Value::Integer(i64::from(above)));
        }

        sql.push_str(" ORDER BY registry_number ASC, created_at ASC, uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn max_mother_sequence(&self, unit_id: &str, year: i32) -> RepoResult<Option<u32>> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(mother_seq)
             FROM evidence_items
             WHERE unit_id = ?1 AND mother_year = ?2;",
            params![unit_id, year],
            |row| row.get(0),
        )?;

        match max {
            Some(value) => Ok(Some(u32_from_db(value, "mother_seq")?)),
            None => Ok(None),
        }
    }

    fn max_red_ink_number(&self, unit_id: &str) -> RepoResult<Option<u32>> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(registry_number)
             FROM evidence_items
             WHERE unit_id = ?1 AND registry_type = 'red_ink';",
            [unit_id],
            |row| row.get(0),
        )?;

        match max {
            Some(value) => Ok(Some(u32_from_db(value, "registry_number")?)),
            None => Ok(None),
        }
    }

    fn list_renumber_events(&self, item_id: ItemId) -> RepoResult<Vec<RenumberEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT item_uuid, year, red_ink_id, created_at
             FROM renumber_events
             WHERE item_uuid = ?1
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([item_id.to_string()])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("item_uuid")?;
            events.push(RenumberEvent {
                item_id: parse_uuid(&uuid_text, "renumber_events.item_uuid")?,
                year: row.get("year")?,
                red_ink_id: u32_from_db(row.get("red_ink_id")?, "red_ink_id")?,
                created_at: row.get("created_at")?,
            });
        }

        Ok(events)
    }

    fn registry_stats(
        &self,
        unit_id: Option<&str>,
        current_year: i32,
        window_start_ms: i64,
    ) -> RepoResult<RegistryStats> {
        let mut sql = String::from(
            "SELECT
                COALESCE(SUM(CASE WHEN registry_type = 'black_ink'
                                   AND status = 'active'
                                   AND registry_year = ? THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN registry_type = 'red_ink'
                                   AND status = 'active' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN status = 'disposed' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN created_at >= ? THEN 1 ELSE 0 END), 0)
             FROM evidence_items",
        );
        let mut bind_values: Vec<Value> = vec![
            Value::Integer(i64::from(current_year)),
            Value::Integer(window_start_ms),
        ];

        if let Some(unit_id) = unit_id {
            sql.push_str(" WHERE unit_id = ?");
            bind_values.push(Value::Text(unit_id.to_string()));
        }

        let counts: (i64, i64, i64, i64) =
            self.conn
                .query_row(&sql, params_from_iter(bind_values), |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                })?;

        Ok(RegistryStats {
            black_ink_current_year: u32_from_db(counts.0, "black ink count")?,
            red_ink_total: u32_from_db(counts.1, "red ink count")?,
            disposed_total: u32_from_db(counts.2, "disposed count")?,
            created_last_30_days: u32_from_db(counts.3, "recent count")?,
        })
    }

    fn search_items(&self, query: &ItemSearchQuery) -> RepoResult<Vec<EvidenceItem>> {
        crate::search::substring::search_items(self.conn, query).map_err(RepoError::from)
    }

    fn dispose_and_renumber(
        &self,
        id: ItemId,
        disposal: &DisposalDetails,
        plan: &[RenumberAssignment],
    ) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let changed = tx.execute(
            "UPDATE evidence_items
             SET
                status = 'disposed',
                disposal_date = ?2,
                disposal_reason = ?3,
                disposal_approved_by = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1
               AND status != 'disposed';",
            params![
                id.to_string(),
                disposal.disposal_date,
                disposal.reason.as_str(),
                disposal.approved_by.as_deref(),
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::BusinessRule(
                "item is already disposed".to_string(),
            ));
        }

        // History rows first: every vacated number is on record before any
        // registry number changes.
        for assignment in plan {
            append_renumber_event(
                &tx,
                assignment.item_id,
                assignment.year,
                assignment.previous_number,
            )?;
        }

        for assignment in plan {
            let shifted = tx.execute(
                "UPDATE evidence_items
                 SET registry_number = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE uuid = ?1;",
                params![
                    assignment.item_id.to_string(),
                    i64::from(assignment.new_number),
                ],
            )?;
            if shifted == 0 {
                return Err(RepoError::ItemNotFound(assignment.item_id));
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn apply_year_transition(&self, assignments: &[YearTransitionAssignment]) -> RepoResult<()> {
        if assignments.is_empty() {
            return Ok(());
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        for assignment in assignments {
            if let Some(previous) = assignment.previous_red_ink_number {
                append_renumber_event(&tx, assignment.item_id, assignment.year, previous)?;
            }

            let changed = tx.execute(
                "UPDATE evidence_items
                 SET registry_type = 'red_ink',
                     registry_number = ?2,
                     updated_at = (strftime('%s', 'now') * 1000)
                 WHERE uuid = ?1;",
                params![
                    assignment.item_id.to_string(),
                    i64::from(assignment.new_number),
                ],
            )?;
            if changed == 0 {
                return Err(RepoError::ItemNotFound(assignment.item_id));
            }
        }

        tx.commit()?;
        Ok(())
    }
}

fn append_renumber_event(
    tx: &Transaction<'_>,
    item_id: ItemId,
    year: i32,
    vacated_number: u32,
) -> RepoResult<()> {
    tx.execute(
        "INSERT INTO renumber_events (item_uuid, year, red_ink_id)
         VALUES (?1, ?2, ?3);",
        params![item_id.to_string(), year, i64::from(vacated_number)],
    )?;
    Ok(())
}

fn map_item_insert_error(err: rusqlite::Error, number: MotherNumber) -> RepoError {
    if let rusqlite::Error::SqliteFailure(code, Some(message)) = &err {
        if code.code == rusqlite::ErrorCode::ConstraintViolation && message.contains("mother_") {
            return RepoError::MotherNumberConflict(number);
        }
    }
    RepoError::Db(DbError::Sqlite(err))
}

pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &table in REQUIRED_TABLES {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

pub(crate) fn parse_item_row(row: &Row<'_>) -> RepoResult<EvidenceItem> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "evidence_items.uuid")?;

    let mother_number = MotherNumber::new(
        row.get("mother_year")?,
        u32_from_db(row.get("mother_seq")?, "mother_seq")?,
    )?;

    let type_text: String = row.get("registry_type")?;
    let registry_type = parse_registry_type(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid registry type `{type_text}` in evidence_items.registry_type"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in evidence_items.status"
        ))
    })?;

    let shelf_id = match row.get::<_, Option<String>>("shelf_id")? {
        Some(text) => Some(parse_uuid(&text, "evidence_items.shelf_id")?),
        None => None,
    };

    let item = EvidenceItem {
        id,
        mother_number,
        registry_number: u32_from_db(row.get("registry_number")?, "registry_number")?,
        registry_type,
        registry_year: row.get("registry_year")?,
        unit_id: row.get("unit_id")?,
        status,
        shelf_id,
        case_number: row.get("case_number")?,
        category: row.get("category")?,
        description: row.get("description")?,
        received_from: row.get("received_from")?,
        disposal_date: row.get("disposal_date")?,
        disposal_reason: row.get("disposal_reason")?,
        disposal_approved_by: row.get("disposal_approved_by")?,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    item.validate()?;
    Ok(item)
}

pub(crate) fn parse_uuid(text: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

fn u32_from_db(value: i64, field: &str) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("out-of-range {field} value `{value}`")))
}

fn registry_type_to_db(registry_type: RegistryType) -> &'static str {
    match registry_type {
        RegistryType::BlackInk => "black_ink",
        RegistryType::RedInk => "red_ink",
    }
}

fn parse_registry_type(value: &str) -> Option<RegistryType> {
    match value {
        "black_ink" => Some(RegistryType::BlackInk),
        "red_ink" => Some(RegistryType::RedInk),
        _ => None,
    }
}

fn status_to_db(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Active => "active",
        ItemStatus::Disposed => "disposed",
        ItemStatus::Transferred => "transferred",
        ItemStatus::Released => "released",
    }
}

fn parse_status(value: &str) -> Option<ItemStatus> {
    match value {
        "active" => Some(ItemStatus::Active),
        "disposed" => Some(ItemStatus::Disposed),
        "transferred" => Some(ItemStatus::Transferred),
        "released" => Some(ItemStatus::Released),
        _ => None,
    }
}
