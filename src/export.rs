//! Export of ticket view rows for the host application.
//!
//! Produces a string the host can write wherever its save-as dialog
//! points; the crate itself does no file I/O here.

use crate::core::TicketRow;
use crate::error::{HelpDeskError, Result};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension conventionally used for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Renders `rows` in this format.
    pub fn export(self, rows: &[TicketRow]) -> Result<String> {
        match self {
            Self::Json => export_json(rows),
            Self::Csv => export_csv(rows),
        }
    }
}

/// Exports rows as pretty-printed JSON.
pub fn export_json(rows: &[TicketRow]) -> Result<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| HelpDeskError::SerializationError(format!("Failed to serialize to JSON: {e}")))
}

/// Exports rows as CSV with a header record.
pub fn export_csv(rows: &[TicketRow]) -> Result<String> {
    use csv::Writer;
    let mut writer = Writer::from_writer(vec![]);

    writer
        .write_record([
            "id",
            "issue_title",
            "description",
            "status",
            "category",
            "assigned_employee",
            "resolution_notes",
            "created_at",
        ])
        .map_err(|e| HelpDeskError::SerializationError(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        writer
            .write_record([
                row.id.to_string(),
                row.issue_title.clone(),
                row.description.clone(),
                row.status.to_string(),
                row.category_name.clone(),
                row.assignee_name.clone().unwrap_or_default(),
                row.resolution_notes.clone().unwrap_or_default(),
                row.created_at.to_rfc3339(),
            ])
            .map_err(|e| {
                HelpDeskError::SerializationError(format!("Failed to write CSV record: {e}"))
            })?;
    }

    writer
        .flush()
        .map_err(|e| HelpDeskError::SerializationError(format!("Failed to flush CSV: {e}")))?;

    String::from_utf8(
        writer
            .into_inner()
            .map_err(|e| HelpDeskError::SerializationError(format!("Failed to get CSV data: {e}")))?,
    )
    .map_err(|e| HelpDeskError::SerializationError(format!("Invalid UTF-8 in CSV: {e}")))
}
