//! `pj post` specs
//!
//! Verify a single event relayed through a server's URI.

use crate::prelude::*;
use crate::prelude::assert_eq;
use std::io::{Read, Write};
use std::net::TcpListener;

/// Answer one request with a canned JSON reply
fn serve_once(body: &'static str) -> (String, std::thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}/events", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request_complete(&request) {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    (uri, handle)
}

/// Headers received and the body as long as Content-Length says
fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..split]
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    request.len() >= split + 4 + length
}

fn contract_with_uri(uri: &str) -> String {
    format!(
        r#"
[objects.backend]
kind = "server"
uri = "{uri}"

[[assert]]
event = "save"
object = "backend"
type = "receives"

[[assert]]
event = "saved"
object = "backend"
type = "sends"
"#
    )
}

#[test]
fn post_prints_reply() {
    let (uri, server) = serve_once(r#"{"type":"saved","value":{"id":7}}"#);
    let project = Project::empty();
    let contract = project.file("relay.toml", &contract_with_uri(&uri));

    let output = pj()
        .args(["post"])
        .arg(&contract)
        .args(["backend", "save", "--value", r#"{"title":"x"}"#])
        .output()
        .unwrap();

    server.join().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "saved\t{\"id\":7}\n");
}

#[test]
fn post_reply_outside_contract_fails() {
    let (uri, server) = serve_once(r#"{"type":"deleted","value":1}"#);
    let project = Project::empty();
    let contract = project.file("relay.toml", &contract_with_uri(&uri));

    let output = pj()
        .arg("post")
        .arg(&contract)
        .args(["backend", "save"])
        .output()
        .unwrap();

    server.join().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("'deleted'"));
}

#[test]
fn post_without_uri_fails() {
    let project = Project::empty();
    let contract = project.file("todo.toml", TODO_CONTRACT);

    let output = pj()
        .arg("post")
        .arg(&contract)
        .args(["backend", "save"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("server 'backend' has no uri"));
}

#[test]
fn post_through_plain_object_fails() {
    let project = Project::empty();
    let contract = project.file("todo.toml", TODO_CONTRACT);

    let output = pj()
        .arg("post")
        .arg(&contract)
        .args(["list", "save"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("object 'list' is not a server"));
}

#[test]
fn post_rejects_invalid_value() {
    let project = Project::empty();
    let contract = project.file("todo.toml", TODO_CONTRACT);

    let output = pj()
        .arg("post")
        .arg(&contract)
        .args(["backend", "save", "--value", "{not json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--value is not valid JSON"));
}
