//! Configuration for greeter-api.
//!
//! Everything is read from the environment once at startup. `from_lookup`
//! takes the lookup function explicitly so tests never touch process env.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use greeter_solana_client::ClusterUrls;

pub const ENV_BIND_ADDR: &str = "GREETER_BIND_ADDR";
pub const ENV_LOG_FORMAT: &str = "GREETER_LOG_FORMAT";
pub const ENV_RPC_TIMEOUT_MS: &str = "GREETER_RPC_TIMEOUT_MS";
pub const ENV_DEVNET_URL: &str = "GREETER_DEVNET_URL";
pub const ENV_TESTNET_URL: &str = "GREETER_TESTNET_URL";
pub const ENV_MAINNET_URL: &str = "GREETER_MAINNET_URL";
pub const ENV_LOCALNET_URL: &str = "GREETER_LOCALNET_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub rpc_timeout: Duration,
    pub clusters: ClusterUrls,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            log_format: LogFormat::Text,
            rpc_timeout: Duration::from_secs(30),
            clusters: ClusterUrls::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unsupported log format: {other}")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = v.parse().map_err(|e| anyhow!("{ENV_BIND_ADDR}: {e}"))?;
        }
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            cfg.log_format = LogFormat::parse(&v).map_err(|e| anyhow!("{ENV_LOG_FORMAT}: {e}"))?;
        }
        if let Some(v) = lookup(ENV_RPC_TIMEOUT_MS) {
            let ms: u64 = v.parse().map_err(|e| anyhow!("{ENV_RPC_TIMEOUT_MS}: {e}"))?;
            cfg.rpc_timeout = Duration::from_millis(ms);
        }

        let urls = [
            (ENV_DEVNET_URL, &mut cfg.clusters.devnet),
            (ENV_TESTNET_URL, &mut cfg.clusters.testnet),
            (ENV_MAINNET_URL, &mut cfg.clusters.mainnet),
            (ENV_LOCALNET_URL, &mut cfg.clusters.localnet),
        ];
        for (key, slot) in urls {
            if let Some(v) = lookup(key) {
                *slot = v;
            }
        }

        validate_config(&cfg)?;
        Ok(cfg)
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &ApiConfig) -> Result<()> {
    if cfg.rpc_timeout.is_zero() {
        bail!("rpc timeout must be greater than zero");
    }

    let urls = [
        ("devnet", &cfg.clusters.devnet),
        ("testnet", &cfg.clusters.testnet),
        ("mainnet", &cfg.clusters.mainnet),
        ("localnet", &cfg.clusters.localnet),
    ];
    for (name, url) in urls {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("{name} rpc url must be http(s): {url}");
        }
    }

    Ok(())
}
