//! SQLite-backed game record store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, ErrorCode, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{GameDraft, GameFilter, GamePatch, GameRecord, GameStore, StoreError};

const SELECT_COLUMNS: &str = "SELECT id, name, released, rating, description, developer,
        platforms, genres, cover_image_url FROM games";

/// SQLite-backed game store.
pub struct SqliteGameStore {
    conn: Mutex<Connection>,
}

impl SqliteGameStore {
    /// Create a new SQLite store, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                released TEXT,
                rating REAL,
                description TEXT,
                developer TEXT,
                platforms TEXT NOT NULL DEFAULT '[]',
                genres TEXT NOT NULL DEFAULT '[]',
                cover_image_url TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_games_rating ON games(rating);
            "#,
        )
        .map_err(db_err)?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Internal("game store lock poisoned".to_string()))
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<GameRecord> {
        Ok(GameRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            released: row.get(2)?,
            rating: row.get(3)?,
            description: row.get(4)?,
            developer: row.get(5)?,
            platforms: json_column(row, 6)?,
            genres: json_column(row, 7)?,
            cover_image_url: row.get(8)?,
        })
    }

    fn load(conn: &Connection, id: i64) -> Result<GameRecord, StoreError> {
        conn.query_row(
            &format!("{} WHERE id = ?", SELECT_COLUMNS),
            params![id],
            Self::row_to_record,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(id),
            _ => db_err(e),
        })
    }

    fn load_by_name(conn: &Connection, name: &str) -> Result<Option<GameRecord>, StoreError> {
        conn.query_row(
            &format!("{} WHERE name = ?", SELECT_COLUMNS),
            params![name],
            Self::row_to_record,
        )
        .optional()
        .map_err(db_err)
    }

    fn query_records(
        conn: &Connection,
        sql: &str,
        values: &[Value],
    ) -> Result<Vec<GameRecord>, StoreError> {
        let mut stmt = conn.prepare(sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), Self::row_to_record)
            .map_err(db_err)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(db_err)?);
        }
        Ok(records)
    }
}

impl GameStore for SqliteGameStore {
    fn list(&self) -> Result<Vec<GameRecord>, StoreError> {
        let conn = self.lock()?;
        Self::query_records(&conn, &format!("{} ORDER BY id", SELECT_COLUMNS), &[])
    }

    fn get(&self, id: i64) -> Result<GameRecord, StoreError> {
        let conn = self.lock()?;
        Self::load(&conn, id)
    }

    fn get_by_name(&self, name: &str) -> Result<Option<GameRecord>, StoreError> {
        let conn = self.lock()?;
        Self::load_by_name(&conn, name)
    }

    fn create(&self, draft: GameDraft) -> Result<GameRecord, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(db_err)?;

        if Self::load_by_name(&tx, &draft.name)?.is_some() {
            return Err(StoreError::Conflict(draft.name));
        }

        tx.execute(
            "INSERT INTO games (name, released, rating, description, developer, platforms, genres, cover_image_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                &draft.name,
                &draft.released,
                draft.rating,
                &draft.description,
                &draft.developer,
                to_json(&draft.platforms)?,
                to_json(&draft.genres)?,
                &draft.cover_image_url,
            ],
        )
        .map_err(|e| write_err(e, &draft.name))?;

        let id = tx.last_insert_rowid();
        tx.commit().map_err(db_err)?;

        Ok(draft.into_record(id))
    }

    fn update(&self, id: i64, patch: GamePatch) -> Result<GameRecord, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(db_err)?;

        let mut record = Self::load(&tx, id)?;

        if let Some(new_name) = &patch.name {
            if *new_name != record.name {
                if let Some(other) = Self::load_by_name(&tx, new_name)? {
                    return Err(StoreError::Conflict(other.name));
                }
            }
        }

        patch.apply_to(&mut record);

        tx.execute(
            "UPDATE games SET name = ?2, released = ?3, rating = ?4, description = ?5,
                developer = ?6, platforms = ?7, genres = ?8, cover_image_url = ?9
             WHERE id = ?1",
            params![
                id,
                &record.name,
                &record.released,
                record.rating,
                &record.description,
                &record.developer,
                to_json(&record.platforms)?,
                to_json(&record.genres)?,
                &record.cover_image_url,
            ],
        )
        .map_err(|e| write_err(e, &record.name))?;

        tx.commit().map_err(db_err)?;

        Ok(record)
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.lock()?;

        let rows_affected = conn
            .execute("DELETE FROM games WHERE id = ?", params![id])
            .map_err(db_err)?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn search(&self, filter: &GameFilter) -> Result<Vec<GameRecord>, StoreError> {
        let conn = self.lock()?;

        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(min) = filter.min_rating {
            clauses.push("rating >= ?");
            values.push(Value::Real(min));
        }
        if let Some(max) = filter.max_rating {
            clauses.push("rating <= ?");
            values.push(Value::Real(max));
        }

        let mut sql = SELECT_COLUMNS.to_string();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let records = Self::query_records(&conn, &sql, &values)?;

        // SQLite LIKE only folds ASCII case, so the name match runs here.
        Ok(match &filter.name_contains {
            Some(text) => {
                let needle = text.to_lowercase();
                records
                    .into_iter()
                    .filter(|r| r.name.to_lowercase().contains(&needle))
                    .collect()
            }
            None => records,
        })
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

/// Map a write failure, turning a uniqueness violation into a conflict.
fn write_err(e: rusqlite::Error, name: &str) -> StoreError {
    match e {
        rusqlite::Error::SqliteFailure(ref err, _)
            if err.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::Conflict(name.to_string())
        }
        _ => db_err(e),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Internal(e.to_string()))
}

/// Decode a JSON list column; NULL reads as an empty list.
fn json_column<T: DeserializeOwned>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Vec<T>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
    }
}
