//! HTTP adapter for the payment service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::RemoteService;
use crate::domain::Payment;
use crate::domain::ports::{FetchOutcome, ListOutcome, PaymentLedger};

/// [`PaymentLedger`] backed by the remote payment service.
pub struct HttpPaymentLedger {
    remote: RemoteService,
}

impl HttpPaymentLedger {
    /// Build an adapter against the given collection URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            remote: RemoteService::new("pago", base, timeout)?,
        })
    }
}

#[async_trait]
impl PaymentLedger for HttpPaymentLedger {
    async fn fetch_by_id(&self, id: i64) -> FetchOutcome<Payment> {
        self.remote.fetch_item(&id.to_string()).await
    }

    async fn fetch_all(&self) -> ListOutcome<Payment> {
        self.remote.fetch_collection().await
    }
}
