//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level configurable through `RUST_LOG`
//! - Startup logs the bound address and addressing mode; per-request detail
//!   only at debug level

pub mod logging;
