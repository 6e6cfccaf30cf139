#![allow(dead_code)]

use axum::Router;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url_shortener_client::config::ClientConfig;
use url_shortener_client::UrlShortenerClient;

pub const SHORTEN_PATH: &str = "/urlshortener/v1/url";

/// Serves `app` on an ephemeral local port and returns its address.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Returns a local address with nothing listening on it.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn create_test_config(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        api_url: format!("http://{}{}", addr, SHORTEN_PATH),
        ..ClientConfig::default()
    }
}

pub fn create_test_client(addr: SocketAddr) -> UrlShortenerClient {
    UrlShortenerClient::new(&create_test_config(addr)).unwrap()
}

/// Log sink collecting formatted `tracing` output for assertions.
#[derive(Clone, Default)]
pub struct SharedLogBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedLogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            buffer: self.buffer.clone(),
        }
    }
}

pub struct SharedLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.buffer.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
