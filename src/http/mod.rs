//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, timeout/trace layers)
//!     → forward.rs (destination from addressing mode, header copy,
//!                   single HTTPS dispatch, HSTS removal, streamed relay)
//!     → Send to client
//! ```

pub mod forward;
pub mod server;

pub use forward::Forwarder;
pub use server::StripServer;
