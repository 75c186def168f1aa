use super::{Status, TicketDraft};

/// Builder for assembling a [`TicketDraft`] from form values.
#[derive(Default)]
pub struct TicketBuilder {
    issue_title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    category_id: Option<i64>,
    assigned_employee_id: Option<i64>,
    resolution_notes: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issue title
    #[must_use]
    pub fn issue_title(mut self, issue_title: impl Into<String>) -> Self {
        self.issue_title = Some(issue_title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the category reference
    #[must_use]
    pub const fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Assign an employee
    #[must_use]
    pub const fn assigned_employee(mut self, employee_id: i64) -> Self {
        self.assigned_employee_id = Some(employee_id);
        self
    }

    /// Set resolution notes
    #[must_use]
    pub fn resolution_notes(mut self, notes: impl Into<String>) -> Self {
        self.resolution_notes = Some(notes.into());
        self
    }

    /// Build the draft
    pub fn build(self) -> TicketDraft {
        TicketDraft {
            issue_title: self.issue_title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
            assigned_employee_id: self.assigned_employee_id,
            resolution_notes: self.resolution_notes,
        }
    }
}
