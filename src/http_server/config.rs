//! # Listener Settings
//!
//! Where the catalog API listens and which browser origins may call it.
//! Read from the `server` section of the config file; a missing field keeps
//! its default, so `{}` listens on every interface at port 3000.

use std::net::{AddrParseError, SocketAddr};

use serde::{Deserialize, Serialize};

/// `server` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface address, e.g. "127.0.0.1" (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Default: 3000
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults, listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as written in the config, for logs
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }

    /// Address handed to the listener. Host names are not resolved, so the
    /// host must be an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.listen_addr().parse()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}
