// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transport for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HttpResponse, Transport, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCall {
    pub uri: String,
    pub fields: Vec<(String, String)>,
}

impl TransportCall {
    /// Value of a form field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct FakeState {
    calls: Vec<TransportCall>,
    responses: VecDeque<Result<HttpResponse, String>>,
}

/// Fake transport that records requests and replays queued responses
///
/// With no queued response, requests answer `200` with an empty JSON object.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next request
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure for the next request
    pub fn fail(&self, message: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .responses
            .push_back(Err(message.into()));
    }

    /// Get all recorded requests
    pub fn calls(&self) -> Vec<TransportCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(TransportCall {
            uri: uri.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Request {
                uri: uri.to_string(),
                message,
            }),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
