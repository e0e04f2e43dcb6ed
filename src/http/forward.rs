//! Request forwarding: one inbound plaintext exchange replayed over HTTPS.
//!
//! # Responsibilities
//! - Compute the outbound destination per the active addressing mode
//! - Rebuild the request with its headers copied entry-by-entry
//! - Dispatch exactly once over the verification-skipping connector
//! - Remove `Strict-Transport-Security` from the response
//! - Hand the origin body back as a stream, never buffered wholesale
//!
//! # Design Decisions
//! - Header copy uses `append`, so N inbound values stay N outbound values
//!   in their original order
//! - The origin body is wrapped, not collected; dropping the response on any
//!   exit path releases the upstream connection

use axum::body::Body;
use axum::http::header::{HOST, STRICT_TRANSPORT_SECURITY};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request, Response, Uri};
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::AddressingMode;
use crate::error::ForwardError;
use crate::net::tls;

/// Forwards plaintext exchanges to their HTTPS origins.
///
/// Holds only the outbound client handle and the addressing mode, both
/// immutable after construction, so one instance is safely shared across
/// every concurrent handler.
pub struct Forwarder {
    client: Client<hyper_rustls::HttpsConnector<HttpConnector>, Body>,
    mode: AddressingMode,
}

impl Forwarder {
    /// Create a forwarder dispatching under the given addressing mode.
    pub fn new(mode: AddressingMode) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(tls::insecure_https_connector());
        Self { client, mode }
    }

    /// Execute one exchange: rebuild the inbound request against its HTTPS
    /// origin, dispatch it once, and return the response with HSTS removed.
    ///
    /// Errors map to an HTTP 500 at the caller; nothing has been written to
    /// the client when this returns `Err`.
    pub async fn forward(&self, inbound: Request<Body>) -> Result<Response<Body>, ForwardError> {
        let (parts, body) = inbound.into_parts();
        let destination = destination(self.mode, &parts)?;

        tracing::debug!(
            method = %parts.method,
            destination = %destination,
            "Dispatching to origin"
        );

        let mut builder = Request::builder()
            .method(parts.method.clone())
            .uri(destination);
        if let Some(headers) = builder.headers_mut() {
            copy_headers(&parts.headers, headers);
        }
        // The inbound body stream is attached as-is; request payloads flow
        // through without buffering.
        let outbound = builder.body(body)?;

        let response: Response<Incoming> = self.client.request(outbound).await?;

        let (mut parts, body) = response.into_parts();
        strip_hsts(&mut parts.headers);
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

/// Compute the outbound `https://` URI for an inbound request.
///
/// Transparent mode trusts the wire: Host header plus the request's own path
/// and query. Non-transparent mode trusts the request line: the absolute
/// target URL an explicitly-configured client sends to its proxy.
fn destination(mode: AddressingMode, parts: &Parts) -> Result<Uri, ForwardError> {
    let authority = match mode {
        AddressingMode::Transparent => parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ForwardError::Destination("request carries no Host header".into()))?
            .to_string(),
        AddressingMode::NonTransparent => parts
            .uri
            .authority()
            .ok_or_else(|| {
                ForwardError::Destination("request line carries no absolute target URL".into())
            })?
            .to_string(),
    };

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    format!("https://{}{}", authority, path_and_query)
        .parse::<Uri>()
        .map_err(|e| ForwardError::Destination(e.to_string()))
}

/// Copy every header entry from `src` onto `dst`, preserving per-name
/// multiplicity and insertion order.
fn copy_headers(src: &HeaderMap, dst: &mut HeaderMap) {
    // HeaderMap iteration yields one (name, value) pair per value, in
    // insertion order; append keeps it that way on the far side.
    for (name, value) in src.iter() {
        dst.append(name.clone(), value.clone());
    }
}

/// Remove every `Strict-Transport-Security` value from a response header
/// map. Matching is case-insensitive by construction; absence is fine.
fn strip_hsts(headers: &mut HeaderMap) {
    headers.remove(STRICT_TRANSPORT_SECURITY);
}
