//! Server settings.
//!
//! Settings come from the environment (a `.env` file is honoured), and the
//! command line may override them.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable for the listen host.
pub const HOST_VAR: &str = "STAY_PRICING_HOST";
/// Environment variable for the listen port.
pub const PORT_VAR: &str = "STAY_PRICING_PORT";
/// Environment variable for the catalog directory.
pub const CATALOG_VAR: &str = "STAY_PRICING_CATALOG";
/// Environment variable for the default log filter.
pub const LOG_VAR: &str = "STAY_PRICING_LOG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CATALOG: &str = "./config/sample_resort";
const DEFAULT_LOG: &str = "info";

/// Settings for the pricing HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to listen on.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the resort catalog.
    pub catalog_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_dir: PathBuf::from(DEFAULT_CATALOG),
            log_level: DEFAULT_LOG.to_string(),
        }
    }
}

impl ServerSettings {
    /// Reads settings from the process environment, after loading `.env`.
    pub fn from_env() -> EngineResult<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| EngineError::InvalidSetting {
                key: PORT_VAR.to_string(),
                message: format!("'{}' is not a valid port ({})", raw, e),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
            catalog_dir: lookup(CATALOG_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_dir),
            log_level: lookup(LOG_VAR).unwrap_or(defaults.log_level),
        })
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| EngineError::InvalidSetting {
            key: HOST_VAR.to_string(),
            message: format!("'{}' is not an IP address", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
