use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chatpyy_api::db::migrations::MIGRATIONS;
use chatpyy_api::{EventResponse, NoteResponse};

/// Shared database state
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }
}

/// Initialize the database: open connection, enable WAL, run migrations
pub fn init_db(data_dir: &Path) -> Result<Db> {
    std::fs::create_dir_all(data_dir)?;
    let db_path = data_dir.join("chatpyy.db");
    let conn = Connection::open(&db_path).context("opening SQLite database")?;

    // Enable WAL mode for better concurrent read performance
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    run_migrations(&conn)?;

    Ok(Db {
        conn: Arc::new(Mutex::new(conn)),
    })
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    for (name, sql) in MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .unwrap_or(false);

        if !already_applied {
            conn.execute_batch(sql)
                .with_context(|| format!("running migration {name}"))?;
            conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])?;
            tracing::info!("Applied migration: {name}");
        }
    }

    Ok(())
}

/// Convert `sea_query::Values` into rusqlite bind parameters.
///
/// The variants the query builders actually produce are text, integers,
/// booleans, and NULL; anything else degrades to NULL.
pub fn bind_values(values: sea_query::Values) -> Vec<rusqlite::types::Value> {
    use rusqlite::types::Value as SqlValue;

    values
        .0
        .into_iter()
        .map(|v| match v {
            sea_query::Value::Bool(Some(b)) => SqlValue::Integer(b as i64),
            sea_query::Value::TinyInt(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::SmallInt(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::Int(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::BigInt(Some(i)) => SqlValue::Integer(i),
            sea_query::Value::TinyUnsigned(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::SmallUnsigned(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::Unsigned(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::BigUnsigned(Some(i)) => SqlValue::Integer(i as i64),
            sea_query::Value::Float(Some(f)) => SqlValue::Real(f as f64),
            sea_query::Value::Double(Some(f)) => SqlValue::Real(f),
            sea_query::Value::String(Some(s)) => SqlValue::Text(*s),
            sea_query::Value::Char(Some(c)) => SqlValue::Text(c.to_string()),
            sea_query::Value::Bytes(Some(b)) => SqlValue::Blob(*b),
            _ => SqlValue::Null,
        })
        .collect()
}

/// Map a SELECT row (column order from `db::events::event_columns`) to a response.
pub fn event_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EventResponse> {
    Ok(EventResponse {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
    })
}

/// Map a SELECT row (column order from `db::notes::note_columns`) to a response.
pub fn note_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<NoteResponse> {
    Ok(NoteResponse {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        image_url: row.get(3)?,
        is_private: row.get(4)?,
        shared_with: row.get(5)?,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
pub(crate) fn test_db() -> (tempfile::TempDir, Db) {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let db = init_db(dir.path()).expect("init test db");
    (dir, db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let _ = init_db(dir.path()).expect("first init");
        let db = init_db(dir.path()).expect("second init must not re-run migrations");

        let applied: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .expect("count migrations");
        assert_eq!(applied, MIGRATIONS.len() as i64);
    }

    #[test]
    fn init_creates_both_tables() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        for table in ["events", "notes"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .expect("query sqlite_master");
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[test]
    fn bind_values_maps_null_bool_and_text() {
        use rusqlite::types::Value as SqlValue;
        use sea_query::Value;

        let params = bind_values(sea_query::Values(vec![
            Value::String(Some(Box::new("judul".to_string()))),
            Value::String(None),
            Value::Bool(Some(true)),
            Value::BigInt(Some(42)),
        ]));

        assert_eq!(
            params,
            vec![
                SqlValue::Text("judul".to_string()),
                SqlValue::Null,
                SqlValue::Integer(1),
                SqlValue::Integer(42),
            ]
        );
    }
}
