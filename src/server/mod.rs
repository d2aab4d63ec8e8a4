//! HTTPS server: TLS listener, routing, and middleware.
//!
//! # Responsibilities
//! - Build the rustls server configuration from the loaded credentials.
//! - Define the Axum router with the greeting route and shared middleware.
//! - Bind the TCP listener and drive each connection through a TLS
//!   handshake and hyper's HTTP stack.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tls;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use hyper_util::service::TowerToHyperService;
use rustls::ServerConfig;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tracing::{debug, error, warn};

use crate::error::StartupError;

/// Bind the TCP listener for the HTTPS server.
///
/// # Errors
///
/// Returns [`StartupError::Bind`] if the address is already in use or the
/// process lacks privilege to bind it.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Accept loop: wrap each incoming connection in TLS and serve HTTP on it.
///
/// Runs until the process is killed and never returns. A failed TLS
/// handshake drops that connection only, and listener accept errors are
/// logged and retried.
pub async fn serve(listener: TcpListener, tls_config: Arc<ServerConfig>, router: Router) {
    let acceptor = TlsAcceptor::from(tls_config);

    loop {
        match listener.accept().await {
            Ok((tcp_stream, peer_addr)) => {
                debug!(%peer_addr, "accepted TCP connection");
                let acceptor = acceptor.clone();
                let service = TowerToHyperService::new(router.clone());
                tokio::spawn(async move {
                    let tls_stream = match acceptor.accept(tcp_stream).await {
                        Ok(stream) => stream,
                        Err(e) => {
                            debug!(%peer_addr, error = %e, "TLS handshake failed");
                            return;
                        }
                    };

                    if let Err(e) = ConnectionBuilder::new(TokioExecutor::new())
                        .serve_connection_with_upgrades(TokioIo::new(tls_stream), service)
                        .await
                    {
                        warn!(%peer_addr, error = %e, "connection error");
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "accept error");
            }
        }
    }
}
