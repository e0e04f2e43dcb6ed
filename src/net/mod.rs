//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound exchange
//!     → tls.rs (rustls client config, verification disabled)
//!     → hyper-rustls connector
//!     → shared by every forwarder dispatch
//! ```
//!
//! # Design Decisions
//! - One connector built at startup, immutable afterwards, read-shared
//!   across concurrent exchanges
//! - Certificate verification is skipped on purpose: the proxy must complete
//!   handshakes with the self-signed and mismatched certificates found in
//!   adversarial test networks

pub mod tls;
