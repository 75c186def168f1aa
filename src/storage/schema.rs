//! Schema bootstrap for the embedded ticket store.

use sqlx::SqlitePool;

use crate::error::Result;

/// DDL for the ticket store. `IF NOT EXISTS` keeps the bootstrap
/// idempotent; the `CHECK` constraint re-states the status invariant at the
/// storage boundary.
const SCHEMA: &[&str] = &[
    "
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        issue_title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL
            CHECK (status IN ('New', 'In-Progress', 'Resolved', 'Closed')),
        category_id INTEGER NOT NULL REFERENCES categories(id),
        assigned_employee_id INTEGER REFERENCES employees(id),
        resolution_notes TEXT,
        created_at TEXT NOT NULL
    )
    ",
];

/// Creates the ticket store tables when they do not exist yet.
pub async fn init(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
