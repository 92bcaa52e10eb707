//! Minimal HTTP/1.1 server for listing-pipeline integration tests.
//!
//! Serves a single static body to every GET, with options for error status
//! and stalled responses.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ListingServerOptions {
    /// Status code sent on every response.
    pub status: u32,
    /// If true, accept connections but never answer (for timeout tests).
    pub stall: bool,
}

impl Default for ListingServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            stall: false,
        }
    }
}

/// Starts a server in a background thread serving `body` and returns its
/// port. The server runs until the process exits.
pub fn start(body: Vec<u8>) -> u16 {
    start_with_options(body, ListingServerOptions::default())
}

/// Like `start` but with customized behavior (error status, stalling).
pub fn start_with_options(body: Vec<u8>, opts: ListingServerOptions) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    port
}

fn handle(mut stream: TcpStream, body: &[u8], opts: ListingServerOptions) {
    if opts.stall {
        // Keep the connection open without ever responding.
        thread::sleep(Duration::from_secs(60));
        return;
    }
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    // Read and discard the request head; every request gets the same answer.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
