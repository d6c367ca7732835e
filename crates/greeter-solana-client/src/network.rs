//! Cluster selection and RPC endpoint resolution.
//!
//! Requests name a cluster ("devnet", "mainnet-beta", ...) or pass a full RPC
//! URL. Named clusters resolve through [`ClusterUrls`], which callers may
//! override from configuration.

use std::fmt;

use crate::constants::{DEVNET_URL, LOCALNET_URL, MAINNET_URL, TESTNET_URL};
use crate::errors::{GreeterError, GreeterResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Devnet,
    Testnet,
    Mainnet,
    Localnet,
    /// An explicit `http(s)://` RPC endpoint.
    Custom(String),
}

impl Network {
    pub fn parse(input: &str) -> GreeterResult<Self> {
        let s = input.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Self::Custom(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "localnet" | "localhost" => Ok(Self::Localnet),
            _ => Err(GreeterError::UnknownNetwork(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet-beta",
            Self::Localnet => "localnet",
            Self::Custom(url) => url,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RPC endpoint for each named cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUrls {
    pub devnet: String,
    pub testnet: String,
    pub mainnet: String,
    pub localnet: String,
}

impl Default for ClusterUrls {
    fn default() -> Self {
        Self {
            devnet: DEVNET_URL.to_string(),
            testnet: TESTNET_URL.to_string(),
            mainnet: MAINNET_URL.to_string(),
            localnet: LOCALNET_URL.to_string(),
        }
    }
}

impl ClusterUrls {
    pub fn resolve(&self, network: &Network) -> String {
        match network {
            Network::Devnet => self.devnet.clone(),
            Network::Testnet => self.testnet.clone(),
            Network::Mainnet => self.mainnet.clone(),
            Network::Localnet => self.localnet.clone(),
            Network::Custom(url) => url.clone(),
        }
    }
}
