//! Test fixtures shared across the crate's unit tests.

#![cfg(test)]

use sqlx::SqlitePool;

use crate::core::{Status, TicketBuilder, TicketDraft};
use crate::service::TicketService;
use crate::storage::{self, reference};

/// An in-memory ticket store with seeded reference data.
pub struct TestStore {
    pub pool: SqlitePool,
    pub service: TicketService,
    pub hardware_category: i64,
    pub network_category: i64,
    pub sam: i64,
    pub priya: i64,
}

impl TestStore {
    /// Fresh store: two categories, two employees, no tickets.
    pub async fn new() -> Self {
        let pool = storage::connect_in_memory()
            .await
            .expect("Failed to open in-memory store");

        let hardware_category = reference::insert_category(&pool, "Hardware")
            .await
            .expect("Failed to seed category");
        let network_category = reference::insert_category(&pool, "Network")
            .await
            .expect("Failed to seed category");
        let sam = reference::insert_employee(&pool, "Sam Lee")
            .await
            .expect("Failed to seed employee");
        let priya = reference::insert_employee(&pool, "Priya Nair")
            .await
            .expect("Failed to seed employee");

        let service = TicketService::new(pool.clone());

        Self {
            pool,
            service,
            hardware_category,
            network_category,
            sam,
            priya,
        }
    }

    /// Store seeded with the two canonical sample tickets: an unassigned
    /// new hardware issue and a resolved network issue assigned to Sam.
    pub async fn with_sample_tickets() -> Self {
        let store = Self::new().await;

        let printer = TicketBuilder::new()
            .issue_title("Printer jam")
            .status(Status::New)
            .category(store.hardware_category)
            .build();
        let vpn = TicketBuilder::new()
            .issue_title("VPN down")
            .status(Status::Resolved)
            .category(store.network_category)
            .assigned_employee(store.sam)
            .build();

        for draft in [printer, vpn] {
            let outcome = store.service.add(draft).await;
            assert!(outcome.is_ok, "Failed to seed ticket: {}", outcome.message);
        }

        store
    }

    /// A valid draft in the hardware category with default status.
    pub fn draft(&self, title: &str) -> TicketDraft {
        TicketBuilder::new()
            .issue_title(title)
            .description(format!("Description for {title}"))
            .status(Status::New)
            .category(self.hardware_category)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketFilter;

    #[tokio::test]
    async fn test_store_creation() {
        let store = TestStore::new().await;
        let rows = store
            .service
            .tickets(&TicketFilter::default())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_store_with_sample_tickets() {
        let store = TestStore::with_sample_tickets().await;
        let rows = store
            .service
            .tickets(&TicketFilter::default())
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }
}
