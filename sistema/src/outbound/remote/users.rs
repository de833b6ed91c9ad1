//! HTTP adapter for the user service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::RemoteService;
use crate::domain::User;
use crate::domain::ports::{FetchOutcome, ListOutcome, UserDirectory};

/// [`UserDirectory`] backed by the remote user service.
pub struct HttpUserDirectory {
    remote: RemoteService,
}

impl HttpUserDirectory {
    /// Build an adapter against the given collection URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            remote: RemoteService::new("usuario", base, timeout)?,
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_by_rut(&self, rut: &str) -> FetchOutcome<User> {
        self.remote.fetch_item(rut).await
    }

    async fn fetch_all(&self) -> ListOutcome<User> {
        self.remote.fetch_collection().await
    }
}
