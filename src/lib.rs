//! tlstrip: an HSTS-stripping HTTP to HTTPS forwarding proxy.
//!
//! Accepts plaintext HTTP, replays each request as HTTPS against the real
//! origin (with certificate verification deliberately disabled), and relays
//! the response with the `Strict-Transport-Security` header removed, so a
//! downgraded client never learns that it should insist on HTTPS.
//!
//! ```text
//!   client ──http──▶ listener ──▶ forwarder ──https (no cert check)──▶ origin
//!   client ◀──http── relay (HSTS stripped) ◀────────────────────────── origin
//! ```
//!
//! Every exchange is independent and stateless; the only shared piece is the
//! immutable configuration and the outbound client handle.
//!
//! Intended for controlled lab networks. Steering traffic to the proxy
//! (ARP/DNS spoofing, gateway setup) is outside this crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::StripConfig;
pub use error::ForwardError;
pub use http::StripServer;
pub use lifecycle::Shutdown;
