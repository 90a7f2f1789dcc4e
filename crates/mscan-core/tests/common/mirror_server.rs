//! Minimal HTTP/1.1 server standing in for both mirrors in integration tests.
//!
//! Answers each path with a scripted status (404 for unknown paths), can delay
//! a response to trigger client timeouts, and records every request it sees.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub status: u16,
    /// Sleep this long before answering (simulates a hung mirror).
    pub delay: Option<Duration>,
}

impl Route {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            delay: None,
        }
    }

    pub fn hang(delay: Duration) -> Self {
        Self {
            status: 200,
            delay: Some(delay),
        }
    }
}

/// One request as received by the server.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
}

impl Seen {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub struct MirrorServer {
    /// e.g. "http://127.0.0.1:12345"
    pub base: String,
    log: Arc<Mutex<Vec<Seen>>>,
}

impl MirrorServer {
    pub fn requests(&self) -> Vec<Seen> {
        self.log.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: &[(&str, Route)]) -> MirrorServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .iter()
            .map(|(p, r)| (p.to_string(), *r))
            .collect(),
    );
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_srv = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log_srv);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    MirrorServer {
        base: format!("http://127.0.0.1:{}", port),
        log,
    }
}

/// A base URL nothing listens on (connection refused).
pub fn dead_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, log: &Mutex<Vec<Seen>>) {
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
    let seen = parse_request(request);
    let route = routes
        .get(&seen.path)
        .copied()
        .unwrap_or(Route::status(404));
    let is_head = seen.method.eq_ignore_ascii_case("HEAD");
    log.lock().unwrap().push(seen);

    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }

    let body = "{}";
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    if !is_head {
        let _ = stream.write_all(body.as_bytes());
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

fn parse_request(request: &str) -> Seen {
    let mut lines = request.lines();
    let mut parts = lines.next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }
    Seen {
        method,
        path,
        headers,
    }
}
