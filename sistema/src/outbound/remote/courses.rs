//! HTTP adapter for the course service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::RemoteService;
use crate::domain::Course;
use crate::domain::ports::{CourseCatalogue, FetchOutcome, ListOutcome};

/// [`CourseCatalogue`] backed by the remote course service.
pub struct HttpCourseCatalogue {
    remote: RemoteService,
}

impl HttpCourseCatalogue {
    /// Build an adapter against the given collection URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            remote: RemoteService::new("curso", base, timeout)?,
        })
    }
}

#[async_trait]
impl CourseCatalogue for HttpCourseCatalogue {
    async fn fetch_by_id(&self, id: i64) -> FetchOutcome<Course> {
        self.remote.fetch_item(&id.to_string()).await
    }

    async fn fetch_all(&self) -> ListOutcome<Course> {
        self.remote.fetch_collection().await
    }
}
