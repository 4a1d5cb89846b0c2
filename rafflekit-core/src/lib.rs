//! RaffleKit SDK - Core library for owned-object queries and collectible detection
//!
//! This library reads the objects an address owns through a chain RPC
//! endpoint and turns the ones that look like collectibles into uniform,
//! display-ready records.

pub mod classifier;
pub mod collection;
pub mod config;
pub mod error;
pub mod rpc;
pub mod types;

pub use classifier::{AssetClassifier, DetectionReport};
pub use collection::{group_by_collection, CollectionGroup};
pub use config::{ClassifierConfig, Network, NetworkConfig};
pub use error::{RafflekitError, Result};
pub use rpc::{ObjectSource, SuiRpcClient};
pub use types::{NormalizedAsset, RawObject, PLACEHOLDER_IMAGE};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_classifier_over_rpc_client_without_network() {
        let client = SuiRpcClient::new(NetworkConfig::new(Network::Localnet)).unwrap();
        let classifier = AssetClassifier::new(client);

        // invalid addresses fail before any request and degrade to no assets
        let report = classifier.detect_with_report("not-an-address").await;
        assert!(report.assets.is_empty());
        assert_eq!(report.scanned, 0);
        assert!(!report.fallback_ran);
    }
}
