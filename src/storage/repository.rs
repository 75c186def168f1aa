//! Ticket table access.
//!
//! Functions here stage reads and writes against whatever executor the
//! caller hands in (a pool for reads, a transaction for writes);
//! committing is the service layer's call.

use chrono::Utc;
use sqlx::SqliteExecutor;

use crate::core::{Ticket, TicketDraft, TicketFilter, TicketId, TicketRow};
use crate::error::Result;

/// Lists tickets joined with category and assignee names.
///
/// Each criterion in `filter` constrains only when present; all present
/// criteria must hold at once. The keyword is a case-insensitive substring
/// match over the issue title and the assignee full name, so a ticket with
/// no assignee matches only through its title. Rows come back in id order,
/// the storage default.
pub async fn list(db: impl SqliteExecutor<'_>, filter: &TicketFilter) -> Result<Vec<TicketRow>> {
    let rows = sqlx::query_as::<_, TicketRow>(
        "
        SELECT t.id, t.issue_title, t.description, t.status,
               t.category_id, c.name AS category_name,
               t.assigned_employee_id, e.full_name AS assignee_name,
               t.resolution_notes, t.created_at
        FROM tickets t
        JOIN categories c ON c.id = t.category_id
        LEFT JOIN employees e ON e.id = t.assigned_employee_id
        WHERE (?1 IS NULL OR t.status = ?1)
          AND (?2 IS NULL OR t.category_id = ?2)
          AND (?3 IS NULL
               OR t.issue_title LIKE '%' || ?3 || '%'
               OR e.full_name LIKE '%' || ?3 || '%')
        ORDER BY t.id
        ",
    )
    .bind(filter.status.map(|s| s.as_str()))
    .bind(filter.category_id)
    .bind(filter.keyword.as_deref())
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Fetches a single ticket by id, or `None` when no row matches.
pub async fn find(db: impl SqliteExecutor<'_>, id: TicketId) -> Result<Option<Ticket>> {
    let ticket = sqlx::query_as::<_, Ticket>(
        "
        SELECT id, issue_title, description, status, category_id,
               assigned_employee_id, resolution_notes, created_at
        FROM tickets
        WHERE id = ?1
        ",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(ticket)
}

/// Stages a new ticket row and returns the identifier the store generated.
pub async fn insert(db: impl SqliteExecutor<'_>, draft: &TicketDraft) -> Result<TicketId> {
    let result = sqlx::query(
        "
        INSERT INTO tickets (issue_title, description, status, category_id,
                             assigned_employee_id, resolution_notes, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ",
    )
    .bind(&draft.issue_title)
    .bind(&draft.description)
    .bind(draft.status.as_str())
    .bind(draft.category_id)
    .bind(draft.assigned_employee_id)
    .bind(draft.resolution_notes.as_deref())
    .bind(Utc::now())
    .execute(db)
    .await?;

    Ok(TicketId::new(result.last_insert_rowid()))
}

/// Stages a full replace of the editable fields of the ticket keyed by
/// `ticket.id`. `created_at` is not editable.
///
/// Returns the affected-row count; zero means the identifier matched no
/// row and nothing changed.
pub async fn update(db: impl SqliteExecutor<'_>, ticket: &Ticket) -> Result<u64> {
    let result = sqlx::query(
        "
        UPDATE tickets
        SET issue_title = ?1,
            description = ?2,
            status = ?3,
            category_id = ?4,
            assigned_employee_id = ?5,
            resolution_notes = ?6
        WHERE id = ?7
        ",
    )
    .bind(&ticket.issue_title)
    .bind(&ticket.description)
    .bind(ticket.status.as_str())
    .bind(ticket.category_id)
    .bind(ticket.assigned_employee_id)
    .bind(ticket.resolution_notes.as_deref())
    .bind(ticket.id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Stages removal of one ticket. Returns the affected-row count.
pub async fn delete(db: impl SqliteExecutor<'_>, id: TicketId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tickets WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

/// Stages removal of every ticket. Returns the affected-row count.
pub async fn delete_all(db: impl SqliteExecutor<'_>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tickets").execute(db).await?;

    Ok(result.rows_affected())
}
