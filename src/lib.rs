//! helpdesk - ticket management core for a small desktop help-desk tool
//!
//! This crate implements the data side of a single-user help-desk
//! application: tickets with a category, an optional assignee, and a
//! four-state lifecycle, persisted in an embedded SQLite store. The
//! presentation layer (a desktop form, a TUI, whatever the host ships) is
//! an external collaborator: it harvests field values into a
//! [`core::TicketDraft`], calls [`service::TicketService`], and renders
//! whatever comes back.
//!
//! # Layering
//!
//! - [`core`] - the domain model: tickets, statuses, filters, reference data
//! - [`storage`] - staging-only SQL over a caller-supplied executor
//! - [`service`] - transaction ownership, minimal validation, and the
//!   uniform `{ is_ok, message }` outcome mutations report through
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::config::Config;
//! use helpdesk::core::{Status, TicketBuilder, TicketFilter};
//! use helpdesk::service::TicketService;
//!
//! let config = Config::load_or_default();
//! let pool = helpdesk::storage::connect(&config.database).await?;
//! let service = TicketService::new(pool);
//!
//! let draft = TicketBuilder::new()
//!     .issue_title("Printer jam")
//!     .status(Status::New)
//!     .category(1)
//!     .build();
//! let outcome = service.add(draft).await;
//! assert!(outcome.is_ok);
//!
//! let open = service
//!     .tickets(&TicketFilter {
//!         status: Some(Status::New),
//!         ..TicketFilter::default()
//!     })
//!     .await?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod service;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpDeskError, Result};
pub use service::{Outcome, TicketService};
