//! Driven port for the remote course service.

use async_trait::async_trait;

use super::outcome::{FetchOutcome, ListOutcome};
use crate::domain::course::Course;

/// Entity client for courses, keyed by numeric identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Fetch one course by id.
    async fn fetch_by_id(&self, id: i64) -> FetchOutcome<Course>;

    /// Fetch every course the service holds.
    async fn fetch_all(&self) -> ListOutcome<Course>;
}

/// Fixture implementation holding no courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCourseCatalogue;

#[async_trait]
impl CourseCatalogue for FixtureCourseCatalogue {
    async fn fetch_by_id(&self, _id: i64) -> FetchOutcome<Course> {
        FetchOutcome::Missing
    }

    async fn fetch_all(&self) -> ListOutcome<Course> {
        ListOutcome::Listed(Vec::new())
    }
}
