//! Fatal startup errors.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort startup before the service begins accepting connections.
///
/// There is no recovery path for any variant: the process prints the error
/// and exits non-zero. Request handling itself cannot fail — the single
/// handler returns a constant string.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A credential file could not be read from disk.
    #[error("failed to read credential file {path}: {source}")]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PEM certificate data could not be parsed.
    #[error("failed to parse certificate PEM: {0}")]
    CertificateParse(String),

    /// A PEM file contained no certificates.
    #[error("no certificate found in PEM data")]
    NoCertificate,

    /// PEM private key data could not be parsed.
    #[error("failed to parse private key PEM: {0}")]
    KeyParse(String),

    /// The key file contained no private key.
    #[error("no private key found in PEM data")]
    NoPrivateKey,

    /// rustls rejected the certificate/key combination.
    #[error("TLS configuration rejected: {0}")]
    TlsConfig(#[from] rustls::Error),

    /// The listener could not be bound (address in use, insufficient privilege).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_read_names_the_path() {
        let err = StartupError::CredentialRead {
            path: PathBuf::from("server.key"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("server.key"));
    }

    #[test]
    fn bind_names_the_address() {
        let err = StartupError::Bind {
            addr: ([0, 0, 0, 0], 443).into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:443"), "unexpected message: {msg}");
    }
}
