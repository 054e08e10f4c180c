// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced transport wrapper for consistent observability

use async_trait::async_trait;
use pj_core::{HttpResponse, Transport, TransportError};
use tracing::Instrument;

/// Wrapper that adds tracing to any Transport
#[derive(Clone)]
pub struct TracedTransport<T> {
    inner: T,
}

impl<T> TracedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for TracedTransport<T> {
    async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let span = tracing::info_span!("transport.post_form", uri);
        async {
            tracing::info!(field_count = fields.len(), "posting");

            // Precondition: only http(s) targets
            if !(uri.starts_with("http://") || uri.starts_with("https://")) {
                tracing::error!("unsupported uri scheme");
                return Err(TransportError::Request {
                    uri: uri.to_string(),
                    message: "unsupported uri scheme".to_string(),
                });
            }

            let start = std::time::Instant::now();
            let result = self.inner.post_form(uri, fields).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(response) => tracing::info!(
                    status = response.status,
                    body_len = response.body.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "response received"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "post failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
