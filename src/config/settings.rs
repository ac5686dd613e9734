use crate::error::{ClientError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Process-wide default endpoint, read from the environment on first use.
pub static DEFAULT_CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_env);

pub const IOTA_ENDPOINT_MAX_LEN: usize = 256;

static DEFAULT_NODE_HOST: &str = "localhost";
const DEFAULT_NODE_PORT: u16 = 14265;

const NODE_HOST_KEY: &str = "IOTA_NODE_HOST";
const NODE_PORT_KEY: &str = "IOTA_NODE_PORT";
const NODE_USE_TLS_KEY: &str = "IOTA_NODE_USE_TLS";

/// Client endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// domain name or IP
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: String::from(DEFAULT_NODE_HOST),
            port: DEFAULT_NODE_PORT,
            use_tls: false,
        }
    }
}

impl ClientConfig {
    pub fn new(host: &str, port: u16, use_tls: bool) -> Result<ClientConfig> {
        let config = ClientConfig {
            host: host.to_string(),
            port,
            use_tls,
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `IOTA_NODE_HOST`, `IOTA_NODE_PORT` and
    /// `IOTA_NODE_USE_TLS`. Unparseable values are ignored with a warning.
    pub fn from_env() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.apply_env();
        config
    }

    /// Loads and validates a TOML file. The environment is not consulted.
    pub fn from_toml_file(path: &Path) -> Result<ClientConfig> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `IOTA_NODE_*` overrides on top of `self` and revalidates.
    pub fn with_env_overrides(mut self) -> Result<ClientConfig> {
        self.apply_env();
        self.validate()?;
        Ok(self)
    }

    pub fn from_toml_str(text: &str) -> Result<ClientConfig> {
        let config: ClientConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(host) = env::var(NODE_HOST_KEY) {
            self.host = host;
        }
        if let Ok(port) = env::var(NODE_PORT_KEY) {
            match port.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => log::warn!("Ignoring {NODE_PORT_KEY}={port}: {e}"),
            }
        }
        if let Ok(use_tls) = env::var(NODE_USE_TLS_KEY) {
            match parse_bool(&use_tls) {
                Some(flag) => self.use_tls = flag,
                None => log::warn!("Ignoring {NODE_USE_TLS_KEY}={use_tls}: not a boolean"),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ClientError::Config("host must not be empty".to_string()));
        }
        if self.host.len() > IOTA_ENDPOINT_MAX_LEN {
            return Err(ClientError::Config(format!(
                "host longer than {IOTA_ENDPOINT_MAX_LEN} bytes"
            )));
        }
        if self.port == 0 {
            return Err(ClientError::Config("port must not be zero".to_string()));
        }
        Ok(())
    }

    /// e.g. `https://chrysalis-nodes.iota.org:443`
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
