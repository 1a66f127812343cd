use std::{env, time::Duration};

use clap::Parser;
use thiserror::Error;

pub const CONFIG_API_ADDRESS: &str = "API_ADDRESS";
pub const CONFIG_BIND: &str = "PORTAL_BIND";
pub const CONFIG_PORT: &str = "PORTAL_PORT";
pub const CONFIG_PUBLIC_PATH: &str = "PORTAL_PUBLIC_PATH";
pub const CONFIG_API_TIMEOUT: &str = "API_TIMEOUT_SECS";
pub const CONFIG_LOG_LEVEL: &str = "LOG_LEVEL";
pub const CONFIG_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PUBLIC_PATH: &str = "./static";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing a value for '{0}'")]
    Missing(&'static str),
    #[error("invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}

/// CLI options. Anything given here wins over the environment.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base address of the collector API, e.g. http://localhost:8081
    #[clap(long)]
    pub api_address: Option<String>,

    /// Port the portal listens on
    #[clap(long)]
    pub port: Option<u16>,

    /// Interface the portal binds to
    #[clap(long)]
    pub bind: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_address: String,
    pub bind_address: String,
    pub port: u16,
    pub public_path: String,
    /// `None` leaves outbound requests without a deadline.
    pub api_timeout: Option<Duration>,
    pub log_level: String,
    pub log_format: String,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_address = get(CONFIG_API_ADDRESS).ok_or(ConfigError::Missing(CONFIG_API_ADDRESS))?;

        let port = match get(CONFIG_PORT) {
            Some(port) => port.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: CONFIG_PORT,
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get(CONFIG_API_TIMEOUT) {
            Some(secs) => secs.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: CONFIG_API_TIMEOUT,
                message: e.to_string(),
            })?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        let log_format = get(CONFIG_LOG_FORMAT).unwrap_or_else(|| "pretty".to_string());
        if log_format != "pretty" && log_format != "json" {
            return Err(ConfigError::Invalid {
                key: CONFIG_LOG_FORMAT,
                message: format!("expected 'pretty' or 'json', got '{log_format}'"),
            });
        }

        Ok(Self {
            api_address: api_address.trim().to_string(),
            bind_address: get(CONFIG_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            public_path: get(CONFIG_PUBLIC_PATH).unwrap_or_else(|| DEFAULT_PUBLIC_PATH.to_string()),
            api_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            log_level: get(CONFIG_LOG_LEVEL).unwrap_or_else(|| "info".to_string()),
            log_format,
        })
    }

    /// Loads from the environment, letting CLI flags fill in or override values.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let api_address = args.api_address.clone();
        let mut config = Self::from_lookup(|key| {
            if key == CONFIG_API_ADDRESS {
                if let Some(address) = &api_address {
                    return Some(address.clone());
                }
            }
            env::var(key).ok()
        })?;
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(address) = &args.api_address {
            self.api_address = address.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(bind) = &args.bind {
            self.bind_address = bind.clone();
        }
    }
}
