//! Error types for the help-desk core.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelpDeskError>;

/// All failures the help-desk core can report.
#[derive(Debug, Error)]
pub enum HelpDeskError {
    /// No ticket exists with the given identifier.
    #[error("ticket #{id} not found")]
    TicketNotFound { id: i64 },

    /// A status string outside the four recognized values.
    #[error("invalid ticket status: '{value}'")]
    InvalidStatus { value: String },

    /// Input rejected before any mutation was attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Export or serialization failure.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Failure reported by the SQLite store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure while loading configuration.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors without a dedicated variant.
    #[error("{0}")]
    Custom(String),
}

impl HelpDeskError {
    /// Creates a custom error with the given message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Renders a message suitable for showing to the operator.
    ///
    /// The service layer uses this to build failure outcomes; storage
    /// details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TicketNotFound { id } => format!("Ticket #{id} was not found."),
            Self::InvalidStatus { value } => {
                format!("'{value}' is not a recognized ticket status.")
            },
            Self::InvalidInput(message) | Self::Custom(message) => message.clone(),
            Self::SerializationError(message) => format!("Export failed: {message}"),
            Self::Database(_) | Self::Io(_) => {
                "The ticket store could not complete the operation.".to_string()
            },
            Self::Config(_) => "The configuration could not be loaded.".to_string(),
        }
    }

    /// Whether this error came from the storage collaborator.
    #[must_use]
    pub const fn is_storage_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Io(_))
    }
}
