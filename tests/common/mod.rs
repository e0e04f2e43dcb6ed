//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tlstrip::{Shutdown, StripConfig, StripServer};

/// Start a mock HTTPS origin serving `app`, returning its address.
///
/// The certificate is self-signed for `origin.invalid`; tests dispatch to the
/// origin by IP address, so the presented certificate never matches the
/// addressed host. Which is the point.
pub async fn start_https_origin(app: Router) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let tls = RustlsConfig::from_pem_file(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/certs/origin.pem"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/certs/origin-key.pem"),
    )
    .await
    .unwrap();

    tokio::spawn(async move {
        axum_server::from_tcp_rustls(listener, tls)
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    addr
}

/// Start the strip proxy on an ephemeral port, returning its address.
///
/// The proxy serves until `shutdown` is triggered by the caller.
pub async fn start_proxy(non_transparent: bool, shutdown: &Shutdown) -> SocketAddr {
    let mut config = StripConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.addressing.non_transparent = non_transparent;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = StripServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    addr
}

/// Send a raw HTTP/1.1 request and collect the complete response.
///
/// Returns the status code, the headers in wire order as lowercased
/// (name, value) pairs, and the body bytes. The request should carry
/// `Connection: close` so the response is EOF-delimited.
#[allow(dead_code)]
pub async fn raw_request(addr: SocketAddr, request: &str) -> (u16, Vec<(String, String)>, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();

    let split = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = std::str::from_utf8(&response[..split]).unwrap();
    let body = response[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .expect("malformed status line")
        .parse()
        .unwrap();

    let headers = lines
        .map(|line| {
            let (name, value) = line.split_once(':').expect("malformed header line");
            (name.to_ascii_lowercase(), value.trim().to_string())
        })
        .collect();

    (status, headers, body)
}

/// A `host:port` with nothing listening behind it.
#[allow(dead_code)]
pub fn refused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
