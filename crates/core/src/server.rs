// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Relay between the hub and an external server
//!
//! A `Server` is an asserted object that forwards events it receives to a URI
//! as a form post (`type=<event type>&value=<json>`), then sends the reply
//! back into the hub under its own contract:
//! - `200` with `{"type": t, "value": v}` sends `t` with `v`
//! - `200` with a truthy `error` sends `<type>-error` with `{status, text}`
//! - any other status, or an unreadable body, sends `<type>-error` with the raw body

use crate::asserted::Asserted;
use crate::assertion::EventType;
use crate::error::Error;
use crate::listener::{Event, Listener};
use crate::transport::{HttpResponse, Transport};
use serde_json::{json, Value};

/// Asserted object that relays events through a transport
#[derive(Clone)]
pub struct Server<T> {
    object: Asserted,
    uri: Option<String>,
    transport: T,
}

impl<T: Transport> Server<T> {
    pub fn new(object: Asserted, transport: T) -> Self {
        Self {
            object,
            uri: None,
            transport,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn asserted(&self) -> &Asserted {
        &self.object
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Post one event and send the reply into the hub
    ///
    /// Returns the reply type and payload that were sent.
    pub async fn ajax(&self, event_type: &str, event: &Event) -> Result<(String, Event), Error> {
        let uri = self.uri.as_deref().ok_or(Error::MissingUri)?;
        let event_type = EventType::parse(event_type)?;
        let value = event.to_string();

        let response = self
            .transport
            .post_form(uri, &[("type", event_type.as_str()), ("value", &value)])
            .await?;
        tracing::debug!(
            server = self.object.name(),
            event_type = %event_type,
            status = response.status,
            "relay response"
        );

        let (reply_type, payload) = interpret(&event_type, response);
        self.object.send(&reply_type, payload.clone())?;
        Ok((reply_type, payload))
    }

    /// Forward every `event_type` event this server hears to its URI
    ///
    /// Requires a `receives` assertion for `event_type` and a tokio runtime.
    /// Returns the relay listener so it can be disconnected later. The
    /// listener holds the hub weakly, so it does not keep the hub alive.
    pub fn connect(&self, event_type: &str) -> Result<Listener, Error> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let object = self.object.downgrade();
        let uri = self.uri.clone();
        let transport = self.transport.clone();
        let relayed = event_type.to_string();

        let listener = Listener::new(move |event| {
            let Some(object) = object.upgrade() else {
                return;
            };
            let server = Server {
                object,
                uri: uri.clone(),
                transport: transport.clone(),
            };
            let relayed = relayed.clone();
            let event = event.clone();
            handle.spawn(async move {
                if let Err(e) = server.ajax(&relayed, &event).await {
                    tracing::warn!(
                        server = server.object.name(),
                        event_type = %relayed,
                        error = %e,
                        "relay failed"
                    );
                }
            });
        });

        self.object.receive(event_type, listener.clone())?;
        Ok(listener)
    }
}

/// Decide which event a server reply becomes
fn interpret(event_type: &EventType, response: HttpResponse) -> (String, Event) {
    let error_type = event_type.error_companion();
    let ok = response.is_ok();
    let HttpResponse { status, body } = response;
    if !ok {
        return (error_type, error_payload(status, Value::String(body)));
    }

    let Ok(parsed) = serde_json::from_str::<Value>(&body) else {
        return (error_type, error_payload(status, Value::String(body)));
    };

    if let Some(error) = parsed.get("error").filter(|e| is_truthy(e)) {
        return (error_type, error_payload(status, error.clone()));
    }

    match parsed.get("type").and_then(Value::as_str) {
        Some(reply_type) => {
            let value = parsed.get("value").cloned().unwrap_or(Value::Null);
            (reply_type.to_string(), value)
        }
        // A reply without a type cannot be routed
        None => (error_type, error_payload(status, Value::String(body))),
    }
}

fn error_payload(status: u16, text: Value) -> Event {
    json!({ "status": status, "text": text })
}

/// Loose truthiness of a JSON value, as scripting clients read `error`
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
