//! Request transport abstraction
//!
//! A transport performs one JSON `GET` and reports exactly one terminal
//! outcome: the parsed body, a timeout, or a transport error. There are no
//! retries and no partial deliveries. Each user action issues one request.
//!
//! # Implementations
//!
//! - [`HttpTransport`]: reqwest client with a whole-request deadline
//! - [`mock::MockTransport`]: scripted outcomes for tests

pub mod mock;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default request deadline
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Failure that is neither a success nor a timeout
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// The single terminal outcome of a request
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Success(T),
    Timeout,
    TransportError(TransportError),
}

impl<T> FetchOutcome<T> {
    /// Transform the success payload, keeping timeout and error untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            Self::Success(value) => FetchOutcome::Success(f(value)),
            Self::Timeout => FetchOutcome::Timeout,
            Self::TransportError(e) => FetchOutcome::TransportError(e),
        }
    }

    /// Like `map`, but the transform may itself fail with a transport error
    pub fn and_then<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> Result<U, TransportError>,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => FetchOutcome::Success(mapped),
                Err(e) => FetchOutcome::TransportError(e),
            },
            Self::Timeout => FetchOutcome::Timeout,
            Self::TransportError(e) => FetchOutcome::TransportError(e),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// JSON request transport
///
/// Implementations must resolve every call to exactly one outcome and must
/// not retry on their own.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue a `GET` for `url` and parse the body as JSON
    async fn get_json(&self, url: &Url) -> FetchOutcome<Value>;
}

/// HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send(&self, url: &Url) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| TransportError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> FetchOutcome<Value> {
        debug!("GET {} (timeout {:?})", url, self.timeout);

        match tokio::time::timeout(self.timeout, self.send(url)).await {
            Ok(Ok(value)) => FetchOutcome::Success(value),
            Ok(Err(e)) => {
                warn!("{}", e);
                FetchOutcome::TransportError(e)
            }
            Err(_) => {
                warn!("Request to {} timed out after {:?}", url, self.timeout);
                FetchOutcome::Timeout
            }
        }
    }
}
