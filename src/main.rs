//! `tls-greet-svc` — binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured logging.
//! 3. Read the TLS credential files into a [`CredentialBundle`].
//! 4. Build the rustls server configuration.
//! 5. Build the Axum router, bind the listener, and serve TLS connections.

mod config;
mod credentials;
mod error;
mod server;
mod telemetry;

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use tracing::info;

use config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        "tls-greet-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. Credentials
    // -----------------------------------------------------------------------
    let bundle = credentials::load(&cfg.credential_paths())?;

    // -----------------------------------------------------------------------
    // 4. TLS configuration
    // -----------------------------------------------------------------------
    let tls_config = server::tls::build_server_config(&bundle)?;

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(cfg.greeting.clone());
    let router = server::router::build(state);

    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, cfg.port).into();
    let listener = server::bind(addr).await?;
    info!(addr = %addr, "server is running at https://localhost");

    server::serve(listener, tls_config, router).await;

    Ok(())
}
