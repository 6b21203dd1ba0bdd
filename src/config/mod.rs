//! Environment-driven configuration
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file during bootstrap). Every variable has a default, so a bare
//! `geolookup` invocation works against `data/GeoLite2-City.mmdb`.

use std::env;

use crate::errors::{GeoLookupError, Result};

pub const DEFAULT_DB_PATH: &str = "data/GeoLite2-City.mmdb";
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// 配置结构体
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to the GeoLite2 City database opened at startup
    pub db_path: String,
    /// Bind address
    pub listen_host: String,
    /// Bind port
    pub listen_port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails only when a variable is present but unusable (e.g. a
    /// non-numeric `LISTEN_PORT`); absence always falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let db_path = env::var("GEOIP_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let listen_host =
            env::var("LISTEN_HOST").unwrap_or_else(|_| DEFAULT_LISTEN_HOST.to_string());
        let listen_port = match env::var("LISTEN_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                GeoLookupError::config(format!("invalid LISTEN_PORT {raw:?}: {e}"))
            })?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Config {
            db_path,
            listen_host,
            listen_port,
        })
    }

    /// `host:port` string for the listening socket
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}
