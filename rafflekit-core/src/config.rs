use crate::error::{RafflekitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Primary-pass size below which fallback type queries are issued.
pub const DEFAULT_MIN_CANDIDATES: usize = 5;

/// Largest page the owned-objects endpoint serves in one call.
pub const MAX_PAGE_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

impl FromStr for Network {
    type Err = RafflekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(RafflekitError::config(format!("Unknown network: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    pub page_limit: u32,
    pub request_timeout: Duration,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            rpc_url: "https://fullnode.testnet.sui.io:443".to_string(),
            page_limit: MAX_PAGE_LIMIT,
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl NetworkConfig {
    pub fn new(network: Network) -> Self {
        let mut config = Self::default();
        config.network = network;

        config.rpc_url = match network {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443".to_string(),
            Network::Testnet => "https://fullnode.testnet.sui.io:443".to_string(),
            Network::Devnet => "https://fullnode.devnet.sui.io:443".to_string(),
            Network::Localnet => "http://127.0.0.1:9000".to_string(),
        };

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(RafflekitError::config("RPC URL cannot be empty"));
        }

        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(RafflekitError::config(format!(
                "RPC URL must be http(s): {}",
                self.rpc_url
            )));
        }

        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            return Err(RafflekitError::config(format!(
                "Page limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(RafflekitError::config("Request timeout must be greater than 0"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub min_candidates: usize,
    pub fallback_patterns: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_candidates: DEFAULT_MIN_CANDIDATES,
            fallback_patterns: default_fallback_patterns(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fallback_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(RafflekitError::config("Fallback patterns cannot be empty"));
        }

        Ok(())
    }
}

/// Common collectible type names queried when the primary pass finds little.
pub fn default_fallback_patterns() -> Vec<String> {
    [
        "0x2::devnet_nft::DevNetNFT",
        "::nft::NFT",
        "::collectible::Collectible",
        "::nft::Nft",
        "::token::Token",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
