//! Reqwest-backed entity clients for the remote record services.
//!
//! These adapters own transport details only: request dispatch, timeout and
//! HTTP error mapping, and JSON decoding into domain entities. Every failure
//! mode is mapped into the port outcome variants before it reaches the
//! engine; a 404 is `Missing`, everything else hostile is `Unavailable`.

mod courses;
mod payments;
mod users;

pub use courses::HttpCourseCatalogue;
pub use payments::HttpPaymentLedger;
pub use users::HttpUserDirectory;

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::{FetchOutcome, ListOutcome};

const USER_AGENT: &str = "sistema-aggregator/0.1";

/// Why one remote call failed, before collapsing into a port outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum RemoteCallError {
    #[error("transport failed: {message}")]
    Transport { message: String },
    #[error("call timed out: {message}")]
    Timeout { message: String },
    #[error("status {status}: {preview}")]
    Status { status: u16, preview: String },
    #[error("payload decode failed: {message}")]
    Decode { message: String },
    #[error("request url invalid: {message}")]
    InvalidUrl { message: String },
}

impl RemoteCallError {
    fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: 404,
                ..
            }
        )
    }
}

/// One remote record service endpoint plus the client used to reach it.
///
/// `base` is the collection URL (e.g. `http://host/api/pagos`); item URLs
/// append one path segment for the key.
struct RemoteService {
    client: Client,
    base: Url,
    name: &'static str,
}

impl RemoteService {
    /// Build a client with an explicit per-request timeout.
    fn new(name: &'static str, base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base, name })
    }

    fn item_url(&self, key: &str) -> Result<Url, RemoteCallError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteCallError::InvalidUrl {
                message: format!("{} base url cannot take a key segment", self.base),
            })?
            .push(key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RemoteCallError> {
        let started = Instant::now();
        let result = self.dispatch(url).await;
        let elapsed_ms = started.elapsed().as_millis();
        match &result {
            Ok(_) => debug!(service = self.name, url = %url, elapsed_ms, "remote call succeeded"),
            Err(error) => {
                warn!(service = self.name, url = %url, elapsed_ms, error = %error, "remote call failed");
            }
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RemoteCallError> {
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| RemoteCallError::Decode {
            message: error.to_string(),
        })
    }

    /// Fetch one record by key, collapsing failures per the port contract.
    async fn fetch_item<T: DeserializeOwned>(&self, key: &str) -> FetchOutcome<T> {
        let url = match self.item_url(key) {
            Ok(url) => url,
            Err(error) => {
                warn!(service = self.name, key, error = %error, "key cannot form a request url");
                return FetchOutcome::Missing;
            }
        };
        match self.get_json(&url).await {
            Ok(record) => FetchOutcome::Found(record),
            Err(error) if error.is_not_found() => FetchOutcome::Missing,
            Err(_) => FetchOutcome::Unavailable,
        }
    }

    /// Fetch the whole collection, collapsing failures per the port contract.
    async fn fetch_collection<T: DeserializeOwned>(&self) -> ListOutcome<T> {
        match self.get_json(&self.base).await {
            Ok(records) => ListOutcome::Listed(records),
            Err(_) => ListOutcome::Unavailable,
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> RemoteCallError {
    if error.is_timeout() {
        RemoteCallError::Timeout {
            message: error.to_string(),
        }
    } else {
        RemoteCallError::Transport {
            message: error.to_string(),
        }
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> RemoteCallError {
    RemoteCallError::Status {
        status: status.as_u16(),
        preview: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn service() -> RemoteService {
        RemoteService::new(
            "curso",
            Url::parse("http://localhost:8084/api/curso").expect("base url"),
            Duration::from_secs(1),
        )
        .expect("client builds")
    }

    #[test]
    fn item_url_appends_one_encoded_segment() {
        let url = service().item_url("11 111").expect("item url");
        assert_eq!(url.as_str(), "http://localhost:8084/api/curso/11%20111");
    }

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND, true)]
    #[case::bad_request(StatusCode::BAD_REQUEST, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY, false)]
    fn only_http_404_counts_as_not_found(#[case] status: StatusCode, #[case] expected: bool) {
        let error = status_error(status, b"{\"error\":\"detail\"}");
        assert_eq!(error.is_not_found(), expected);
    }

    #[test]
    fn status_error_includes_compact_preview() {
        let error = status_error(StatusCode::BAD_GATEWAY, b"upstream\n  exploded");
        assert_eq!(
            error.to_string(),
            "status 502: upstream exploded"
        );
    }

    #[test]
    fn body_preview_truncates_long_payloads() {
        let long = "x".repeat(400);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
