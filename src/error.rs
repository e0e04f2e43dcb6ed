//! Error taxonomy for the forwarding path.

use thiserror::Error;

/// Errors produced while forwarding a single exchange.
///
/// Every variant is recovered locally: the caller receives an HTTP 500 whose
/// body is the error text, and no other in-flight or future request is
/// affected. Failures after response headers have been flushed cannot be
/// represented here; those exchanges simply terminate early.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The destination could not be determined from the inbound request
    /// under the active addressing mode.
    #[error("cannot determine destination: {0}")]
    Destination(String),

    /// The outbound request could not be assembled (malformed method, URI,
    /// or header).
    #[error("failed to build outbound request: {0}")]
    Construction(#[from] axum::http::Error),

    /// Network-level failure reaching or talking to the origin: connection
    /// refused, DNS failure, handshake failure, timeout, abrupt close before
    /// response headers.
    #[error("origin dispatch failed: {0}")]
    Dispatch(#[from] hyper_util::client::legacy::Error),
}
