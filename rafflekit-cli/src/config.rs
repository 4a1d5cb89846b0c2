use rafflekit_core::config::MAX_PAGE_LIMIT;
use rafflekit_core::{ClassifierConfig, Network, NetworkConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// On-disk CLI settings. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub network: Network,
    pub rpc_url: Option<String>,
    pub page_limit: u32,
    pub timeout_secs: u64,
    pub min_candidates: usize,
    pub fallback_patterns: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let classifier = ClassifierConfig::default();
        Self {
            network: Network::Testnet,
            rpc_url: None,
            page_limit: MAX_PAGE_LIMIT,
            timeout_secs: NetworkConfig::default().request_timeout.as_secs(),
            min_candidates: classifier.min_candidates,
            fallback_patterns: classifier.fallback_patterns,
        }
    }
}

/// Resolved settings handed to command handlers.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub classifier: ClassifierConfig,
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rafflekit")
            .join("config.json")
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn resolve(self, network: Option<Network>, rpc_url: Option<String>) -> Result<AppConfig> {
        let network = network.unwrap_or(self.network);

        let mut network_config = NetworkConfig::new(network);
        if let Some(url) = rpc_url.or(self.rpc_url) {
            network_config.rpc_url = url;
        }
        network_config.page_limit = self.page_limit;
        network_config.request_timeout = Duration::from_secs(self.timeout_secs);
        network_config.validate()?;

        let classifier = ClassifierConfig {
            min_candidates: self.min_candidates,
            fallback_patterns: self.fallback_patterns,
        };
        classifier.validate()?;

        Ok(AppConfig {
            network: network_config,
            classifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = CliConfig::load(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.min_candidates, 5);

        let app = config.resolve(None, None).unwrap();
        assert_eq!(
            app.network.request_timeout,
            NetworkConfig::default().request_timeout
        );
    }

    #[test]
    fn test_partial_file_and_overrides() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "network": "mainnet", "min_candidates": 2, "fallback_patterns": ["::nft::NFT"] }"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.page_limit, MAX_PAGE_LIMIT);

        let app = config
            .resolve(None, Some("http://127.0.0.1:9999".to_string()))
            .unwrap();
        assert_eq!(app.network.network, Network::Mainnet);
        assert_eq!(app.network.rpc_url, "http://127.0.0.1:9999");
        assert_eq!(app.classifier.min_candidates, 2);
        assert_eq!(app.classifier.fallback_patterns, vec!["::nft::NFT"]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        std::fs::write(&path, "not json").unwrap();
        assert!(CliConfig::load(&path).is_err());

        let config = CliConfig {
            timeout_secs: 0,
            ..CliConfig::default()
        };
        assert!(config.resolve(Some(Network::Devnet), None).is_err());
    }
}
