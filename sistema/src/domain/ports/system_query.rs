//! Driving port: the aggregation façade called by the HTTP adapter.

use async_trait::async_trait;

use crate::domain::enriched::{EnrichedCourse, EnrichedPayment, EnrichedUser};
use crate::domain::error::Error;

/// Read-only enrichment entry points.
///
/// "Base entity not found" is the only structural outcome callers branch on
/// (`None`); every downstream enrichment failure is absorbed and surfaced as
/// degraded but present data. The sole error is a malformed user rut, which
/// indicates a caller or data defect rather than a remote condition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemQuery: Send + Sync {
    /// Enrich every payment, in ledger order.
    async fn enriched_payments(&self) -> Vec<EnrichedPayment>;

    /// Enrich one payment by id; `None` when no such payment exists.
    async fn enriched_payment(&self, id: i64) -> Option<EnrichedPayment>;

    /// Enrich every course, in catalogue order.
    async fn enriched_courses(&self) -> Vec<EnrichedCourse>;

    /// Enrich one course by id; `None` when no such course exists.
    async fn enriched_course(&self, id: i64) -> Option<EnrichedCourse>;

    /// Enrich every user, in directory order.
    async fn enriched_users(&self) -> Result<Vec<EnrichedUser>, Error>;

    /// Enrich one user by rut; `Ok(None)` when no such user exists.
    async fn enriched_user(&self, rut: &str) -> Result<Option<EnrichedUser>, Error>;
}

/// Fixture implementation answering as an empty system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSystemQuery;

#[async_trait]
impl SystemQuery for FixtureSystemQuery {
    async fn enriched_payments(&self) -> Vec<EnrichedPayment> {
        Vec::new()
    }

    async fn enriched_payment(&self, _id: i64) -> Option<EnrichedPayment> {
        None
    }

    async fn enriched_courses(&self) -> Vec<EnrichedCourse> {
        Vec::new()
    }

    async fn enriched_course(&self, _id: i64) -> Option<EnrichedCourse> {
        None
    }

    async fn enriched_users(&self) -> Result<Vec<EnrichedUser>, Error> {
        Ok(Vec::new())
    }

    async fn enriched_user(&self, _rut: &str) -> Result<Option<EnrichedUser>, Error> {
        Ok(None)
    }
}
