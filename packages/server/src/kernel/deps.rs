//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to all
//! domain actions. Storage goes through trait abstractions so tests can run
//! against an in-memory store.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::availability::models::PostgresAvailabilityRegistry;
use crate::domains::help::models::PostgresHelpLedger;
use crate::kernel::{BaseAvailabilityRegistry, BaseHelpLedger};

#[derive(Clone)]
pub struct ServerDeps {
    pub help_ledger: Arc<dyn BaseHelpLedger>,
    pub availability: Arc<dyn BaseAvailabilityRegistry>,
}

impl ServerDeps {
    pub fn new(
        help_ledger: Arc<dyn BaseHelpLedger>,
        availability: Arc<dyn BaseAvailabilityRegistry>,
    ) -> Self {
        Self {
            help_ledger,
            availability,
        }
    }

    /// Production wiring: both stores backed by the same Postgres pool.
    pub fn postgres(db_pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresHelpLedger::new(db_pool.clone())),
            Arc::new(PostgresAvailabilityRegistry::new(db_pool)),
        )
    }
}
