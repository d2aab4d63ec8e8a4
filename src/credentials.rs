//! Credential loading: reads the TLS key, certificate, and optional CA
//! bundle from disk into memory, once, before the listener starts.
//!
//! No parsing happens here — the bytes are handed to the TLS layer as-is,
//! so a file full of garbage only fails when the rustls configuration is
//! built. A missing or unreadable required file is fatal immediately.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StartupError;

/// Filesystem locations of the credential files.
#[derive(Debug, Clone)]
pub struct CredentialPaths {
    pub key: PathBuf,
    pub cert: PathBuf,
    pub ca: Option<PathBuf>,
}

/// Raw PEM bytes of the loaded credentials.
///
/// Constructed once at startup and never mutated; the TLS layer borrows it
/// to build the server configuration.
#[derive(Debug)]
pub struct CredentialBundle {
    pub key_pem: Vec<u8>,
    pub cert_pem: Vec<u8>,
    pub ca_pem: Option<Vec<u8>>,
}

/// Read every configured credential file into a [`CredentialBundle`].
///
/// The CA file is only read when a path was configured; a configured path
/// that cannot be read is just as fatal as a missing key or certificate.
///
/// # Errors
///
/// Returns [`StartupError::CredentialRead`] naming the failing path.
pub fn load(paths: &CredentialPaths) -> Result<CredentialBundle, StartupError> {
    let key_pem = read_credential(&paths.key)?;
    let cert_pem = read_credential(&paths.cert)?;
    let ca_pem = match &paths.ca {
        Some(path) => Some(read_credential(path)?),
        None => None,
    };

    Ok(CredentialBundle {
        key_pem,
        cert_pem,
        ca_pem,
    })
}

fn read_credential(path: &Path) -> Result<Vec<u8>, StartupError> {
    fs::read(path).map_err(|source| StartupError::CredentialRead {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_key_and_cert_without_ca() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths {
            key: write_file(dir.path(), "server.key", b"key bytes"),
            cert: write_file(dir.path(), "server.crt", b"cert bytes"),
            ca: None,
        };

        let bundle = load(&paths).unwrap();
        assert_eq!(bundle.key_pem, b"key bytes");
        assert_eq!(bundle.cert_pem, b"cert bytes");
        assert!(bundle.ca_pem.is_none());
    }

    #[test]
    fn loads_ca_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths {
            key: write_file(dir.path(), "server.key", b"key"),
            cert: write_file(dir.path(), "server.crt", b"cert"),
            ca: Some(write_file(dir.path(), "ca.crt", b"ca bytes")),
        };

        let bundle = load(&paths).unwrap();
        assert_eq!(bundle.ca_pem.as_deref(), Some(b"ca bytes".as_slice()));
    }

    #[test]
    fn missing_key_fails_and_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths {
            key: dir.path().join("missing.key"),
            cert: write_file(dir.path(), "server.crt", b"cert"),
            ca: None,
        };

        let err = load(&paths).unwrap_err();
        assert!(matches!(err, StartupError::CredentialRead { .. }));
        assert!(err.to_string().contains("missing.key"));
    }

    #[test]
    fn configured_but_missing_ca_fails() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths {
            key: write_file(dir.path(), "server.key", b"key"),
            cert: write_file(dir.path(), "server.crt", b"cert"),
            ca: Some(dir.path().join("missing-ca.crt")),
        };

        assert!(matches!(
            load(&paths).unwrap_err(),
            StartupError::CredentialRead { .. }
        ));
    }
}
