// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport seam for relaying events to an external server

use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, TransportCall};

/// Content type of relayed requests
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Errors from transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {uri} failed: {message}")]
    Request { uri: String, message: String },
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("transport task failed: {0}")]
    Join(String),
}

/// Posts form-encoded fields to a URI
///
/// Any HTTP status is a successful `HttpResponse`; only failures to complete
/// the exchange are errors.
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}
