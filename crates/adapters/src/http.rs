// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport

use async_trait::async_trait;
use pj_core::{HttpResponse, Transport, TransportError, FORM_CONTENT_TYPE};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking ureq agent run on tokio's blocking pool
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            // Error statuses are replies, not failures
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let uri = uri.to_string();
        let body = encode_form(fields);

        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .post(&uri)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .send(body)
                .map_err(|e| TransportError::Request {
                    uri: uri.clone(),
                    message: e.to_string(),
                })?;

            let status = response.status().as_u16();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(HttpResponse::new(status, body))
        })
        .await
        .map_err(|e| TransportError::Join(e.to_string()))?
    }
}

/// Encode fields as an `application/x-www-form-urlencoded` body
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
