//! Server startup configuration.
//!
//! Read from `SUBWAY_*` environment variables, each with a default so the
//! server runs out of the box from the crate directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::network::default_network_path;
use crate::planner::{DirectionsConfig, InvalidLineChoice, LineChoice};

/// Environment variable naming the network description file.
pub const NETWORK_FILE_VAR: &str = "SUBWAY_NETWORK_FILE";
/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "SUBWAY_BIND_ADDR";
/// Environment variable naming the static assets directory.
pub const STATIC_DIR_VAR: &str = "SUBWAY_STATIC_DIR";
/// Environment variable selecting the line-selection policy.
pub const LINE_CHOICE_VAR: &str = "SUBWAY_LINE_CHOICE";
/// Environment variable allowing stations that no line serves.
pub const ALLOW_ISOLATED_VAR: &str = "SUBWAY_ALLOW_ISOLATED";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    /// Boolean flag did not parse
    #[error("{var}: expected true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    /// Unknown line-selection policy
    #[error("SUBWAY_LINE_CHOICE: {0}")]
    InvalidLineChoice(#[from] InvalidLineChoice),
}

/// Settings needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Network description to load at startup.
    pub network_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Accept stations that no line serves.
    pub allow_isolated_stations: bool,

    /// Direction compilation settings.
    pub directions: DirectionsConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(NETWORK_FILE_VAR) {
            config.network_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value: addr.clone(),
            })?;
        }

        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(flag) = lookup(ALLOW_ISOLATED_VAR) {
            config.allow_isolated_stations = parse_flag(ALLOW_ISOLATED_VAR, &flag)?;
        }

        if let Some(choice) = lookup(LINE_CHOICE_VAR) {
            config.directions = DirectionsConfig::new(choice.parse::<LineChoice>()?);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: default_network_path(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            allow_isolated_stations: false,
            directions: DirectionsConfig::default(),
        }
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
