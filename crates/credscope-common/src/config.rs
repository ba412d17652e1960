//! Server configuration, loaded once at startup.
//!
//! The config file is named by the `CREDSCOPE_CONFIG` environment variable.
//! When the variable is unset every field falls back to its default; a file
//! that is named but unreadable or invalid is a startup error.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{CredscopeError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1"
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Optional TOML file overriding the built-in theme palette
    #[serde(default)]
    pub theme_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            theme_file: None,
        }
    }
}

impl ServerConfig {
    pub const ENV_VAR: &'static str = "CREDSCOPE_CONFIG";

    /// Load from the file named by `CREDSCOPE_CONFIG`, or defaults when the
    /// variable is unset. Reads `.env` first so the variable can live there.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        match std::env::var(Self::ENV_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CredscopeError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            CredscopeError::Config(format!("invalid host address: {}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3001");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_bad_host_rejected() {
        let config = ServerConfig {
            host: "not-an-ip".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.bind_addr().is_err());
    }
}
