//! tlstrip
//!
//! A TLS-stripping proxy built with Tokio and Axum.
//!
//! ```text
//!                       ┌──────────────────────────────────────────┐
//!                       │                 TLSTRIP                  │
//!                       │                                          │
//!   Client (http) ──────┼─▶ listener ──▶ http::server ──┐          │
//!                       │                               ▼          │
//!                       │                        http::forward     │
//!                       │                               │          │
//!                       │                   net::tls (no verify)   │
//!                       │                               │          │
//!   Client (http) ◀─────┼── relay (HSTS removed) ◀──────┼──────────┼──▶ Origin (https)
//!                       │                                          │
//!                       │  cross-cutting: config, cli, lifecycle,  │
//!                       │  observability, error                    │
//!                       └──────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use tlstrip::cli::Cli;
use tlstrip::http::StripServer;
use tlstrip::lifecycle::Shutdown;
use tlstrip::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = cli.into_config()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mode = %config.addressing.mode(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind failure is the one fatal condition: propagate and exit non-zero.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = StripServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
