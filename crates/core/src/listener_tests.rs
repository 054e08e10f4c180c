// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use std::sync::Mutex;

/// Listener that records every event it sees under a tag
fn recorder(tag: &'static str, seen: &Arc<Mutex<Vec<String>>>) -> Listener {
    let seen = Arc::clone(seen);
    Listener::new(move |event| {
        seen.lock().unwrap().push(format!("{}:{}", tag, event));
    })
}

#[test]
fn listeners_called_in_registration_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut listeners = Listeners::new();

    listeners.on("click", recorder("a", &seen));
    listeners.on("click", recorder("b", &seen));
    listeners.on("close", recorder("c", &seen));

    let called = listeners.update_view("click", &json!(1));

    assert_eq!(called, 2);
    assert_eq!(*seen.lock().unwrap(), vec!["a:1", "b:1"]);
}

#[test]
fn update_view_for_unknown_type_is_noop() {
    let listeners = Listeners::new();
    assert_eq!(listeners.update_view("nothing", &json!(null)), 0);
}

#[test]
fn listener_identity_follows_clones() {
    let a = Listener::new(|_| {});
    let b = Listener::new(|_| {});

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn off_removes_only_first_occurrence() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let listener = recorder("x", &seen);
    let mut listeners = Listeners::new();

    listeners.on("click", listener.clone());
    listeners.on("click", listener.clone());
    assert_eq!(listeners.len("click"), 2);

    assert!(listeners.off("click", &listener));
    assert_eq!(listeners.len("click"), 1);

    listeners.update_view("click", &json!("e"));
    assert_eq!(*seen.lock().unwrap(), vec!["x:\"e\""]);
}

#[test]
fn off_unknown_type_or_listener_is_noop() {
    let mut listeners = Listeners::new();
    let registered = Listener::new(|_| {});
    let stranger = Listener::new(|_| {});
    listeners.on("click", registered);

    assert!(!listeners.off("close", &stranger));
    assert!(!listeners.off("click", &stranger));
    assert_eq!(listeners.len("click"), 1);
}

#[test]
fn off_all_removes_listener_from_every_type() {
    let shared = Listener::new(|_| {});
    let other = Listener::new(|_| {});
    let mut listeners = Listeners::new();

    listeners.on("open", shared.clone());
    listeners.on("close", shared.clone());
    listeners.on("close", other);
    listeners.on("resize", Listener::new(|_| {}));

    assert_eq!(listeners.off_all(&shared), 2);
    assert_eq!(listeners.len("open"), 0);
    assert_eq!(listeners.len("close"), 1);
    assert_eq!(listeners.len("resize"), 1);
}

#[test]
fn get_follows_registration_order() {
    let first = Listener::new(|_| {});
    let second = Listener::new(|_| {});
    let mut listeners = Listeners::new();
    listeners.on("tick", first.clone());
    listeners.on("tick", second.clone());

    assert_eq!(listeners.get("tick", 0), Some(first));
    assert_eq!(listeners.get("tick", 1), Some(second));
    assert_eq!(listeners.get("tick", 2), None);
    assert_eq!(listeners.get("tock", 0), None);
}

#[test]
fn empty_after_all_removed() {
    let listener = Listener::new(|_| {});
    let mut listeners = Listeners::new();
    assert!(listeners.is_empty());

    listeners.on("a", listener.clone());
    assert!(!listeners.is_empty());

    listeners.off_all(&listener);
    assert!(listeners.is_empty());
}
