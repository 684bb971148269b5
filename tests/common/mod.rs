#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned response for one request target (path plus query string)
#[derive(Clone)]
pub struct Route {
    pub target: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(target: &str, body: &str) -> Self {
        Self {
            target: target.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(target: &str, status: u16) -> Self {
        Self {
            target: target.to_string(),
            status,
            body: r#"{"name":"Error","status":0}"#.to_string(),
        }
    }
}

/// Minimal HTTP/1.1 server answering with canned JSON bodies
///
/// Unknown targets get a 404. Every request target is recorded together
/// with its `Accept` header.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl StubServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, &routes, &recorded);
            }
        });

        Self { base_url, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets received so far, in order
    pub fn targets(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(target, _)| target.clone())
            .collect()
    }

    /// Accept headers received so far, in order
    pub fn accept_headers(&self) -> Vec<Option<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, accept)| accept.clone())
            .collect()
    }
}

fn handle(stream: TcpStream, routes: &[Route], recorded: &Mutex<Vec<(String, Option<String>)>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut accept = None;
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("accept") {
                accept = Some(value.trim().to_string());
            }
        }
    }

    recorded.lock().unwrap().push((target.clone(), accept));

    let (status, body) = routes
        .iter()
        .find(|route| route.target == target)
        .map(|route| (route.status, route.body.clone()))
        .unwrap_or((404, r#"{"name":"Not Found","status":404}"#.to_string()));

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
