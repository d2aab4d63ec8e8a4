//! TLS listener setup using rustls.
//!
//! The certificate, private key, and optional CA bundle are loaded from the
//! filesystem at startup (see [`crate::credentials`]). This module parses
//! them and constructs a `rustls::ServerConfig`.

use std::sync::Arc;

use rustls::ServerConfig;
use tracing::info;

use crate::credentials::CredentialBundle;
use crate::error::StartupError;

/// Build a [`rustls::ServerConfig`] from the loaded credential bundle.
///
/// When a CA bundle is present it is parsed so that a malformed deployment
/// fails at startup, but client certificate verification is not enabled;
/// the server accepts any client.
///
/// # Errors
///
/// Returns an error if the certificate or key cannot be parsed, or if
/// rustls rejects the configuration (e.g. a mismatched key/certificate pair).
pub fn build_server_config(bundle: &CredentialBundle) -> Result<Arc<ServerConfig>, StartupError> {
    let certs = rustls_pemfile::certs(&mut std::io::BufReader::new(bundle.cert_pem.as_slice()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StartupError::CertificateParse(e.to_string()))?;
    if certs.is_empty() {
        return Err(StartupError::NoCertificate);
    }

    let key = rustls_pemfile::private_key(&mut std::io::BufReader::new(bundle.key_pem.as_slice()))
        .map_err(|e| StartupError::KeyParse(e.to_string()))?
        .ok_or(StartupError::NoPrivateKey)?;

    if let Some(ca_pem) = &bundle.ca_pem {
        let ca_certs = rustls_pemfile::certs(&mut std::io::BufReader::new(ca_pem.as_slice()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StartupError::CertificateParse(e.to_string()))?;
        if ca_certs.is_empty() {
            return Err(StartupError::NoCertificate);
        }
        info!(
            ca_certs = ca_certs.len(),
            "CA bundle loaded; client certificate verification is not enabled"
        );
    }

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)?;

    Ok(Arc::new(config))
}
