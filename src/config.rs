//! Configuration loading and validation.
//!
//! All values are read from environment variables at startup, with defaults
//! reproducing the classic single-route HTTPS bootstrap: credential files in
//! the working directory and the standard HTTPS port. The process exits with
//! a clear error message if any value is invalid.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::credentials::CredentialPaths;

/// Greeting body served for `GET /` when `GREETING` is unset.
pub const DEFAULT_GREETING: &str = "Welcome to the TLS-backed web service!";

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Filesystem path to the PEM-encoded TLS private key.
    #[serde(default = "default_tls_key_path")]
    pub tls_key_path: String,

    /// Filesystem path to the PEM-encoded TLS certificate chain.
    #[serde(default = "default_tls_cert_path")]
    pub tls_cert_path: String,

    /// Optional path to a PEM-encoded CA bundle. When set, the file must
    /// exist and parse; client certificate verification is still not enabled.
    #[serde(default)]
    pub tls_ca_path: Option<String>,

    /// TCP port the HTTPS listener binds on all interfaces.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Plain-text body returned by `GET /`.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tls_key_path() -> String {
    "server.key".into()
}
fn default_tls_cert_path() -> String {
    "server.crt".into()
}
fn default_port() -> u16 {
    443
}
fn default_greeting() -> String {
    DEFAULT_GREETING.into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The credential file paths the loader should read.
    pub fn credential_paths(&self) -> CredentialPaths {
        CredentialPaths {
            key: PathBuf::from(&self.tls_key_path),
            cert: PathBuf::from(&self.tls_cert_path),
            ca: self.tls_ca_path.as_ref().map(PathBuf::from),
        }
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.tls_key_path, "TLS_KEY_PATH")?;
        ensure_non_empty(&self.tls_cert_path, "TLS_CERT_PATH")?;
        if let Some(ca) = &self.tls_ca_path {
            ensure_non_empty(ca, "TLS_CA_PATH")?;
        }
        if self.greeting.is_empty() {
            anyhow::bail!("GREETING must not be empty");
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} must not be empty");
    }
    Ok(())
}
