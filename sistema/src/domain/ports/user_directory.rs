//! Driven port for the remote user service.

use async_trait::async_trait;

use super::outcome::{FetchOutcome, ListOutcome};
use crate::domain::user::User;

/// Entity client for users, keyed by rut.
///
/// Implementations never raise for "not found", "remote unreachable", or
/// "malformed response"; those collapse into the outcome variants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch one user by rut.
    async fn fetch_by_rut(&self, rut: &str) -> FetchOutcome<User>;

    /// Fetch every user the service holds.
    async fn fetch_all(&self) -> ListOutcome<User>;
}

/// Fixture implementation holding no users.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn fetch_by_rut(&self, _rut: &str) -> FetchOutcome<User> {
        FetchOutcome::Missing
    }

    async fn fetch_all(&self) -> ListOutcome<User> {
        ListOutcome::Listed(Vec::new())
    }
}
