//! Shelf repository contracts and SQLite implementation.
//!
//! The registry only needs the collaborator surface: create shelves, look
//! one up for ownership validation, list a unit's directory.

use crate::model::item::ValidationError;
use crate::model::shelf::{Shelf, ShelfId};
use crate::repo::item_repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const SHELF_SELECT_SQL: &str = "SELECT uuid, unit_id, name, location, created_at FROM shelves";

/// Repository interface for the shelf directory.
pub trait ShelfRepository {
    fn create_shelf(&self, shelf: &Shelf) -> RepoResult<ShelfId>;
    fn get_shelf(&self, id: ShelfId) -> RepoResult<Option<Shelf>>;
    /// Lists shelves for one unit, or every shelf when `unit_id` is `None`.
    fn list_shelves(&self, unit_id: Option<&str>) -> RepoResult<Vec<Shelf>>;
}

/// SQLite-backed shelf repository.
pub struct SqliteShelfRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteShelfRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ShelfRepository for SqliteShelfRepository<'_> {
    fn create_shelf(&self, shelf: &Shelf) -> RepoResult<ShelfId> {
        if shelf.unit_id.trim().is_empty() {
            return Err(RepoError::Validation(ValidationError::EmptyUnitId));
        }
        if shelf.name.trim().is_empty() {
            return Err(RepoError::Validation(ValidationError::EmptyShelfName));
        }

        self.conn.execute(
            "INSERT INTO shelves (uuid, unit_id, name, location)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                shelf.id.to_string(),
                shelf.unit_id.as_str(),
                shelf.name.as_str(),
                shelf.location.as_deref(),
            ],
        )?;

        Ok(shelf.id)
    }

    fn get_shelf(&self, id: ShelfId) -> RepoResult<Option<Shelf>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SHELF_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_shelf_row(row)?));
        }

        Ok(None)
    }

    fn list_shelves(&self, unit_id: Option<&str>) -> RepoResult<Vec<Shelf>> {
        let mut sql = format!("{SHELF_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<String> = Vec::new();

        if let Some(unit_id) = unit_id {
            sql.push_str(" AND unit_id = ?");
            bind_values.push(unit_id.to_string());
        }

        sql.push_str(" ORDER BY name ASC, uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(bind_values))?;
        let mut shelves = Vec::new();

        while let Some(row) = rows.next()? {
            shelves.push(parse_shelf_row(row)?);
        }

        Ok(shelves)
    }
}

fn parse_shelf_row(row: &Row<'_>) -> RepoResult<Shelf> {
    let uuid_text: String = row.get("uuid")?;
    Ok(Shelf {
        id: parse_uuid(&uuid_text, "shelves.uuid")?,
        unit_id: row.get("unit_id")?,
        name: row.get("name")?,
        location: row.get("location")?,
        created_at: row.get("created_at")?,
    })
}
