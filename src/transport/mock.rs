//! Mock transport for testing
//!
//! Replays scripted outcomes in order and records every URL it was asked
//! for, so client behaviour can be checked without a network.
//!
//! # Example
//!
//! ```
//! use bob_client::transport::{FetchOutcome, Transport};
//! use bob_client::transport::mock::MockTransport;
//! use reqwest::Url;
//!
//! let transport = MockTransport::new();
//! transport.push_json(serde_json::json!([]));
//!
//! let url = Url::parse("http://localhost/rest/beacons").unwrap();
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let outcome = runtime.block_on(transport.get_json(&url));
//! assert!(matches!(outcome, FetchOutcome::Success(_)));
//! assert_eq!(transport.requested_urls(), vec!["http://localhost/rest/beacons".to_string()]);
//! ```

use super::{FetchOutcome, Transport, TransportError};
use reqwest::Url;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted outcome for one request
#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Timeout,
    Error(String),
}

#[derive(Clone, Default)]
pub struct MockTransport {
    /// Outcomes to return, front first
    scripted: Arc<Mutex<VecDeque<Scripted>>>,

    /// Every URL requested, in order
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body
    pub fn push_json(&self, body: Value) {
        self.push(Scripted::Json(body));
    }

    /// Queue a timeout
    pub fn push_timeout(&self) {
        self.push(Scripted::Timeout);
    }

    /// Queue a transport failure
    pub fn push_error(&self, message: &str) {
        self.push(Scripted::Error(message.to_string()));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn push(&self, outcome: Scripted) {
        if let Ok(mut scripted) = self.scripted.lock() {
            scripted.push_back(outcome);
        }
    }
}

impl Transport for MockTransport {
    async fn get_json(&self, url: &Url) -> FetchOutcome<Value> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }

        let next = self.scripted.lock().ok().and_then(|mut s| s.pop_front());
        match next {
            Some(Scripted::Json(body)) => FetchOutcome::Success(body),
            Some(Scripted::Timeout) => FetchOutcome::Timeout,
            Some(Scripted::Error(message)) => FetchOutcome::TransportError(TransportError::Request {
                url: url.to_string(),
                message,
            }),
            None => FetchOutcome::TransportError(TransportError::Request {
                url: url.to_string(),
                message: "no scripted outcome".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("http://localhost/rest/beacons").unwrap()
    }

    #[tokio::test]
    async fn test_outcomes_replay_in_order() {
        let transport = MockTransport::new();
        transport.push_json(json!([1]));
        transport.push_timeout();
        transport.push_error("connection reset");

        assert!(matches!(transport.get_json(&url()).await, FetchOutcome::Success(_)));
        assert!(transport.get_json(&url()).await.is_timeout());
        assert!(matches!(
            transport.get_json(&url()).await,
            FetchOutcome::TransportError(TransportError::Request { .. })
        ));
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_script_is_error() {
        let transport = MockTransport::new();
        assert!(matches!(transport.get_json(&url()).await, FetchOutcome::TransportError(_)));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let transport = MockTransport::new();
        let observer = transport.clone();
        transport.push_json(json!([]));
        let _ = transport.get_json(&url()).await;
        assert_eq!(observer.requested_urls().len(), 1);
    }
}
