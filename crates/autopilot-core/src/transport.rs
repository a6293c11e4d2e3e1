//! HTTP seam for delivering leads
//!
//! The browser implements this with `fetch`; tests use in-memory fakes.

use crate::error::Result;

/// What came back from the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Response text, kept for diagnostics only
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx counts as accepted
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a JSON body with `POST` and `Content-Type: application/json`.
///
/// Implementations return `Ok` for any HTTP response, whatever its status,
/// and reserve `Err` for transport failures (offline, CORS, aborted).
#[trait_variant::make(LeadTransport: Send)]
pub trait LocalLeadTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse>;
}
