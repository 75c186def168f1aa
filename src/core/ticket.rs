use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Status;
use crate::error::{HelpDeskError, Result};

/// Identifier of a persisted ticket, generated by the store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(transparent)]
pub struct TicketId(i64);

impl TicketId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for TicketId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted help-desk ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    pub id: TicketId,
    pub issue_title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: Status,
    pub category_id: i64,
    pub assigned_employee_id: Option<i64>,
    pub resolution_notes: Option<String>,
    /// Set once at insert; not editable afterwards.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Checks the invariants the service enforces before staging an update.
    pub fn validate(&self) -> Result<()> {
        if self.issue_title.trim().is_empty() {
            return Err(HelpDeskError::InvalidInput(
                "Issue title is required.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Field values for a ticket that has not been persisted yet.
///
/// Usually assembled with [`super::TicketBuilder`] from harvested form
/// values. The status is whatever the caller supplied; no default is
/// imposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub issue_title: String,
    pub description: String,
    pub status: Status,
    pub category_id: i64,
    pub assigned_employee_id: Option<i64>,
    pub resolution_notes: Option<String>,
}

impl TicketDraft {
    /// Checks the invariants the service enforces before staging an insert.
    pub fn validate(&self) -> Result<()> {
        if self.issue_title.trim().is_empty() {
            return Err(HelpDeskError::InvalidInput(
                "Issue title is required.".to_string(),
            ));
        }
        Ok(())
    }
}

/// A ticket joined with its category and assignee names for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TicketRow {
    pub id: TicketId,
    pub issue_title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: Status,
    pub category_id: i64,
    pub category_name: String,
    pub assigned_employee_id: Option<i64>,
    pub assignee_name: Option<String>,
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Optional listing criteria; absent criteria do not constrain.
///
/// All present criteria must hold at once. The keyword matches
/// case-insensitively as a substring of the issue title or the assignee
/// full name (SQLite `LIKE` semantics), so a ticket without an assignee can
/// only match through its title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub status: Option<Status>,
    pub category_id: Option<i64>,
    pub keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_with_title_is_valid() {
        let draft = TicketDraft {
            issue_title: "Printer jam".to_string(),
            description: String::new(),
            status: Status::New,
            category_id: 1,
            assigned_employee_id: None,
            resolution_notes: None,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let draft = TicketDraft {
            issue_title: "   ".to_string(),
            description: String::new(),
            status: Status::New,
            category_id: 1,
            assigned_employee_id: None,
            resolution_notes: None,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.user_message(), "Issue title is required.");
    }

    #[test]
    fn test_ticket_id_display_and_value() {
        let id = TicketId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.value(), 7);
        assert_eq!(TicketId::from(7), id);
    }
}
