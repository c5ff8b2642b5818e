//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with one canned response: a status, an optional
//! redirect, an optional Content-Encoding and a fixed body, after an optional
//! delay.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Status code; 0 means 200.
    pub status: u16,
    /// Sleep this long before answering.
    pub delay: Option<Duration>,
    /// Send a `Location` header (use with 301/302).
    pub location: Option<String>,
    /// Send a `Content-Encoding` header (body must already be encoded).
    pub content_encoding: Option<&'static str>,
}

/// Starts a server in a background thread serving `body` with 200 OK.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/data.geojson").
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ServerOptions::default())
}

/// Like `start` but with a custom status, delay, redirect or encoding.
pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/data.geojson", port)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &ServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let method = std::str::from_utf8(&buf[..n])
        .ok()
        .and_then(|r| r.split_whitespace().next())
        .unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }

    let status = if opts.status == 0 { 200 } else { opts.status };
    let mut extra = String::new();
    if let Some(loc) = &opts.location {
        extra.push_str(&format!("Location: {}\r\n", loc));
    }
    if let Some(enc) = opts.content_encoding {
        extra.push_str(&format!("Content-Encoding: {}\r\n", enc));
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        reason(status),
        body.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
