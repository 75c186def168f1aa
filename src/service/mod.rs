//! Ticket operations as the presentation layer sees them.
//!
//! The service owns the transaction boundary: repository functions stage
//! changes, the service begins and commits. Mutations report through
//! [`Outcome`] rather than raising, so a storage failure reaches the
//! presentation layer as a message instead of an exception.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::core::{Category, Employee, Ticket, TicketDraft, TicketFilter, TicketId, TicketRow};
use crate::error::{HelpDeskError, Result};
use crate::storage::{reference, repository};

/// Uniform success/message pair returned by every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub is_ok: bool,
    pub message: String,
}

impl Outcome {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            is_ok: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_ok: false,
            message: message.into(),
        }
    }
}

/// Stateless request/response facade over the ticket store.
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct TicketService {
    pool: SqlitePool,
}

impl TicketService {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists tickets matching `filter`, joined with category and assignee
    /// names for display.
    pub async fn tickets(&self, filter: &TicketFilter) -> Result<Vec<TicketRow>> {
        repository::list(&self.pool, filter).await
    }

    /// Fetches one ticket by id, for populating an edit form.
    pub async fn ticket(&self, id: TicketId) -> Result<Option<Ticket>> {
        repository::find(&self.pool, id).await
    }

    /// Read-only category list for selection controls.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        reference::list_categories(&self.pool).await
    }

    /// Read-only employee list for selection controls.
    pub async fn employees(&self) -> Result<Vec<Employee>> {
        reference::list_employees(&self.pool).await
    }

    /// Creates a new ticket from `draft`.
    pub async fn add(&self, draft: TicketDraft) -> Outcome {
        if let Err(e) = draft.validate() {
            return Outcome::failure(e.user_message());
        }

        match self.add_in_tx(&draft).await {
            Ok(id) => {
                debug!(%id, "ticket created");
                Outcome::ok(format!("Ticket #{id} created."))
            },
            Err(e) => {
                error!(error = %e, "failed to create ticket");
                Outcome::failure(e.user_message())
            },
        }
    }

    /// Replaces all editable fields of the ticket keyed by `ticket.id`.
    pub async fn update(&self, ticket: Ticket) -> Outcome {
        if let Err(e) = ticket.validate() {
            return Outcome::failure(e.user_message());
        }

        match self.update_in_tx(&ticket).await {
            Ok(()) => {
                debug!(id = %ticket.id, "ticket updated");
                Outcome::ok(format!("Ticket #{} updated.", ticket.id))
            },
            Err(e) => {
                error!(error = %e, id = %ticket.id, "failed to update ticket");
                Outcome::failure(e.user_message())
            },
        }
    }

    /// Removes one ticket by id.
    pub async fn delete(&self, id: TicketId) -> Outcome {
        match self.delete_in_tx(id).await {
            Ok(()) => {
                debug!(%id, "ticket deleted");
                Outcome::ok(format!("Ticket #{id} deleted."))
            },
            Err(e) => {
                error!(error = %e, %id, "failed to delete ticket");
                Outcome::failure(e.user_message())
            },
        }
    }

    /// Removes every ticket. Clearing an empty store succeeds with a count
    /// of zero.
    pub async fn clear_all(&self) -> Outcome {
        match self.clear_all_in_tx().await {
            Ok(affected) => {
                debug!(affected, "ticket store cleared");
                Outcome::ok(format!("Removed {affected} ticket(s)."))
            },
            Err(e) => {
                error!(error = %e, "failed to clear tickets");
                Outcome::failure(e.user_message())
            },
        }
    }

    async fn add_in_tx(&self, draft: &TicketDraft) -> Result<TicketId> {
        let mut tx = self.pool.begin().await?;
        let id = repository::insert(&mut *tx, draft).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn update_in_tx(&self, ticket: &Ticket) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let affected = repository::update(&mut *tx, ticket).await?;
        if affected == 0 {
            // Dropping the transaction abandons the staged (empty) change.
            return Err(HelpDeskError::TicketNotFound {
                id: ticket.id.value(),
            });
        }
        tx.commit().await?;
        Ok(())
    }

    async fn delete_in_tx(&self, id: TicketId) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let affected = repository::delete(&mut *tx, id).await?;
        if affected == 0 {
            return Err(HelpDeskError::TicketNotFound { id: id.value() });
        }
        tx.commit().await?;
        Ok(())
    }

    async fn clear_all_in_tx(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let affected = repository::delete_all(&mut *tx).await?;
        tx.commit().await?;
        Ok(affected)
    }
}
