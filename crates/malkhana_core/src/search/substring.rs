//! Case-insensitive substring search over evidence items.
//!
//! # Responsibility
//! - Match a free-text query against mother number, case number,
//!   description, category and received-from fields.
//! - Return full custody records in deterministic order.
//!
//! # Invariants
//! - Matching is plain substring (`LIKE`), never tokenized: mother numbers
//!   are formatted identifiers a word-based index would split apart.
//! - `%`, `_` and `\` in the query match themselves, not as wildcards.

use crate::db::DbError;
use crate::model::item::EvidenceItem;
use crate::repo::item_repo::{parse_item_row, RepoError, ITEM_SELECT_SQL};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for DB interaction and result decoding.
#[derive(Debug)]
pub enum SearchError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Search options for substring matching.
#[derive(Debug, Clone)]
pub struct ItemSearchQuery {
    /// User query text, matched as a substring of each searchable field.
    pub text: String,
    /// Optional unit fence; `None` searches across all units.
    pub unit_id: Option<String>,
    /// Maximum number of rows to return.
    pub limit: u32,
}

impl ItemSearchQuery {
    /// Creates a query with default pagination and no unit fence.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unit_id: None,
            limit: 50,
        }
    }
}

/// Searches evidence items by substring and returns matching records
/// ordered by mother number.
///
/// Returns an empty list for blank queries.
pub fn search_items(
    conn: &Connection,
    query: &ItemSearchQuery,
) -> SearchResult<Vec<EvidenceItem>> {
    let text = query.text.trim();
    if text.is_empty() || query.limit == 0 {
        return Ok(Vec::new());
    }

    let pattern = format!("%{}%", escape_like(text));

    let mut sql = format!(
        "{ITEM_SELECT_SQL}
         WHERE (
            CAST(mother_year AS TEXT) || '-' || printf('%05d', mother_seq) LIKE ? ESCAPE '\\'
            OR case_number LIKE ? ESCAPE '\\'
            OR description LIKE ? ESCAPE '\\'
            OR category LIKE ? ESCAPE '\\'
            OR received_from LIKE ? ESCAPE '\\'
         )"
    );
    let mut bind_values: Vec<Value> = std::iter::repeat(Value::Text(pattern))
        .take(5)
        .collect();

    if let Some(unit_id) = query.unit_id.as_deref() {
        sql.push_str(" AND unit_id = ?");
        bind_values.push(Value::Text(unit_id.to_string()));
    }

    sql.push_str(" ORDER BY mother_year ASC, mother_seq ASC LIMIT ?");
    bind_values.push(Value::Integer(i64::from(query.limit)));

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row).map_err(repo_error_to_search)?);
    }

    Ok(items)
}

fn repo_error_to_search(err: RepoError) -> SearchError {
    match err {
        RepoError::Db(db) => SearchError::Db(db),
        RepoError::InvalidData(message) => SearchError::InvalidData(message),
        other => SearchError::InvalidData(other.to_string()),
    }
}

fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::{escape_like, search_items, ItemSearchQuery};
    use crate::db::open_db_in_memory;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_pure"), "100\\%\\_pure");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn blank_query_returns_empty_without_touching_storage() {
        let conn = open_db_in_memory().unwrap();
        let hits = search_items(&conn, &ItemSearchQuery::new("   ")).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn zero_limit_returns_empty() {
        let conn = open_db_in_memory().unwrap();
        let mut query = ItemSearchQuery::new("anything");
        query.limit = 0;
        assert!(search_items(&conn, &query).unwrap().is_empty());
    }
}
