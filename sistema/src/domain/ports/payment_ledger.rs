//! Driven port for the remote payment service.
//!
//! The ledger exposes no filtered queries, so relational lookups (payments by
//! course, payments by user) are fetch-all-then-filter inside the engine.
//! That costs O(total payments) per enrichment call; a server-side filter
//! would be the first extension to make here once the payment service grows
//! one.

use async_trait::async_trait;

use super::outcome::{FetchOutcome, ListOutcome};
use crate::domain::payment::Payment;

/// Entity client for payments, keyed by numeric identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Fetch one payment by id.
    async fn fetch_by_id(&self, id: i64) -> FetchOutcome<Payment>;

    /// Fetch every payment the service holds.
    async fn fetch_all(&self) -> ListOutcome<Payment>;
}

/// Fixture implementation holding no payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePaymentLedger;

#[async_trait]
impl PaymentLedger for FixturePaymentLedger {
    async fn fetch_by_id(&self, _id: i64) -> FetchOutcome<Payment> {
        FetchOutcome::Missing
    }

    async fn fetch_all(&self) -> ListOutcome<Payment> {
        ListOutcome::Listed(Vec::new())
    }
}
