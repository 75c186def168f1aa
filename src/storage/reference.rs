//! Category and employee reference data.
//!
//! The core treats both as read-only; the insert functions exist so the
//! host application (or a test) can seed its reference tables.

use sqlx::SqliteExecutor;

use crate::core::{Category, Employee};
use crate::error::Result;

/// Lists every category, ordered by name for selection controls.
pub async fn list_categories(db: impl SqliteExecutor<'_>) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(db)
            .await?;

    Ok(categories)
}

/// Lists every employee, ordered by full name for selection controls.
pub async fn list_employees(db: impl SqliteExecutor<'_>) -> Result<Vec<Employee>> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT id, full_name FROM employees ORDER BY full_name")
            .fetch_all(db)
            .await?;

    Ok(employees)
}

/// Inserts a category and returns its generated id.
pub async fn insert_category(db: impl SqliteExecutor<'_>, name: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO categories (name) VALUES (?1)")
        .bind(name)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Inserts an employee and returns their generated id.
pub async fn insert_employee(db: impl SqliteExecutor<'_>, full_name: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO employees (full_name) VALUES (?1)")
        .bind(full_name)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}
