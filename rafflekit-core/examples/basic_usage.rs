use rafflekit_core::{group_by_collection, AssetClassifier, Network, NetworkConfig, SuiRpcClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let owner = std::env::args()
        .nth(1)
        .ok_or("usage: basic_usage <owner-address>")?;

    let client = SuiRpcClient::new(NetworkConfig::new(Network::Testnet))?;
    println!("Querying {}", client.rpc_url());

    let classifier = AssetClassifier::new(client);
    let report = classifier.detect_with_report(&owner).await;

    println!("Scanned {} objects", report.scanned);
    println!("Primary candidates: {}", report.primary_candidates);
    for pattern in &report.patterns {
        println!("Fallback {}: {:?}", pattern.pattern, pattern.status);
    }

    for group in group_by_collection(&report.assets) {
        println!("\n{} ({} assets)", group.label, group.assets.len());
        for asset in group.assets {
            println!("  {} - {} [{}]", asset.id, asset.name, asset.image_ref);
        }
    }

    Ok(())
}
