//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Parse CLI → Load config → Bind listener → Serve
//!
//! Shutdown:
//!     Ctrl+C → broadcast signal → server stops accepting → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: bind/config errors at startup are fatal
//! - Shutdown is cooperative; in-flight exchanges are allowed to drain

pub mod shutdown;

pub use shutdown::Shutdown;
