//! Minimal HTTP/1.1 server standing in for the cutout service in integration tests.
//!
//! Serves a single static body for any GET, answers HEAD with headers only,
//! and records every request line so tests can assert on the query sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CutoutServerOptions {
    /// Status for every response that is not a redirect.
    pub status: u16,
    /// When set, any request whose target differs from this value gets a
    /// `302 Found` pointing at it.
    pub redirect_to: Option<String>,
    /// Read the request, then never answer.
    pub stall: bool,
    /// Advertise the full body length but send only the first half, then close.
    pub truncate_body: bool,
}

impl Default for CutoutServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirect_to: None,
            stall: false,
            truncate_body: false,
        }
    }
}

pub struct CutoutServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CutoutServer {
    /// Request lines received so far, e.g. `"GET /viewer/jpeg-cutout/?ra=... HTTP/1.1"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `body`. Runs until the process exits.
pub fn start(body: Vec<u8>) -> CutoutServer {
    start_with_options(body, CutoutServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: CutoutServerOptions) -> CutoutServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let log = Arc::clone(&log);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &log));
        }
    });
    CutoutServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Returns the URL of a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, body: &[u8], opts: &CutoutServerOptions, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let request_line = request.lines().next().unwrap_or("").trim().to_string();
    log.lock().unwrap().push(request_line.clone());

    if opts.stall {
        thread::sleep(Duration::from_secs(5));
        return;
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");

    if let Some(location) = opts.redirect_to.as_deref() {
        if target != location {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(response.as_bytes());
            return;
        }
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let payload: &[u8] = if opts.status == 200 { body } else { b"cutout unavailable" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    if !method.eq_ignore_ascii_case("HEAD") {
        let sent = if opts.truncate_body { &payload[..payload.len() / 2] } else { payload };
        let _ = stream.write_all(sent);
    }
}
