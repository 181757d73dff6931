//! HTTP server configuration object and helpers.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Settings loaded from `SPENDWISE_*` environment variables, configuration
/// files, and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPENDWISE")]
pub struct AppSettings {
    /// IP address the listener binds to.
    pub host: Option<String>,
    /// TCP port the listener binds to.
    pub port: Option<u16>,
    /// Start with an empty store instead of the five sample expenses.
    #[ortho_config(default = false)]
    pub skip_seed: bool,
    /// Single browser origin allowed by CORS; every origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl AppSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_data: bool,
    pub(crate) cors_allowed_origin: Option<String>,
}

impl ServerConfig {
    /// Construct a configuration serving the sample data to any origin.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_data: true,
            cors_allowed_origin: None,
        }
    }

    /// Choose whether the store starts with the sample expenses.
    #[must_use]
    pub fn with_seed_data(mut self, seed_data: bool) -> Self {
        self.seed_data = seed_data;
        self
    }

    /// Restrict cross-origin access to `origin`.
    #[must_use]
    pub fn with_cors_allowed_origin(mut self, origin: Option<String>) -> Self {
        self.cors_allowed_origin = origin;
        self
    }

    /// Build the server configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured host is not an IP literal.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AddrParseError> {
        Ok(Self::new(settings.bind_addr()?)
            .with_seed_data(!settings.skip_seed)
            .with_cors_allowed_origin(settings.cors_allowed_origin.clone()))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
