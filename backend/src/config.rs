//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from configuration files, `PETCLINIC_*` environment
//! variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Sample owners are seeded unless seeding is explicitly disabled.
pub const DEFAULT_SEED_EXAMPLES: bool = true;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Startup configuration for the owner service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PETCLINIC")]
pub struct ServerSettings {
    /// Socket address to listen on, for example `127.0.0.1:9966`.
    pub bind_addr: Option<String>,
    /// Pre-populate the owner directory with the sample clinic owners.
    pub seed_examples: Option<bool>,
}

impl ServerSettings {
    /// Parsed listen address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddr`] when the configured value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Whether to seed the sample owners, falling back to
    /// [`DEFAULT_SEED_EXAMPLES`].
    pub fn seed_examples(&self) -> bool {
        self.seed_examples.unwrap_or(DEFAULT_SEED_EXAMPLES)
    }
}
