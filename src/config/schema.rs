//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root configuration for the stripping proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StripConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// How the outbound destination is derived from an inbound request.
    pub addressing: AddressingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8181").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8181".to_string(),
        }
    }
}

/// Addressing policy configuration.
///
/// Selected once at startup and applied uniformly to every request.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AddressingConfig {
    /// Proxy connections non-transparently: dispatch to the request-line URL
    /// instead of the wire-level Host header. Default is transparent.
    pub non_transparent: bool,
}

impl AddressingConfig {
    /// The addressing mode this configuration selects.
    pub fn mode(&self) -> AddressingMode {
        if self.non_transparent {
            AddressingMode::NonTransparent
        } else {
            AddressingMode::Transparent
        }
    }
}

/// The two sources an outbound destination can be taken from.
///
/// - `Transparent`: the proxy sits inline as an interception point; the
///   destination is whatever host the client put on the wire (Host header)
///   together with the request's own path and query.
/// - `NonTransparent`: the client addresses the proxy explicitly and places
///   an absolute URL in the request line; that URL's authority and path are
///   the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Transparent,
    NonTransparent,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingMode::Transparent => write!(f, "transparent"),
            AddressingMode::NonTransparent => write!(f, "non-transparent"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for one request/response exchange) in
    /// seconds. Applied by the hosting middleware, not the forwarder itself.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
