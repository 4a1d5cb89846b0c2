use crate::config::AppConfig;
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use rafflekit_core::rpc::validate_address;
use rafflekit_core::{group_by_collection, AssetClassifier, NormalizedAsset, Result, SuiRpcClient};

#[derive(Subcommand)]
pub enum AssetCommands {
    /// Detect collectibles owned by an address
    Detect {
        /// Owner address (0x...)
        address: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also print per-pattern fallback results
        #[arg(long)]
        report: bool,
    },
    /// Show detected collectibles grouped by collection
    Groups {
        /// Owner address (0x...)
        address: String,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_asset_command(cmd: AssetCommands, config: &AppConfig) -> Result<()> {
    let client = SuiRpcClient::new(config.network.clone())?;
    let classifier = AssetClassifier::with_config(client, config.classifier.clone());

    match cmd {
        AssetCommands::Detect {
            address,
            json,
            report,
        } => {
            validate_address(address.trim())?;
            let detection = classifier.detect_with_report(&address).await;

            if json {
                if report {
                    println!("{}", serde_json::to_string_pretty(&detection)?);
                } else {
                    println!("{}", serde_json::to_string_pretty(&detection.assets)?);
                }
                return Ok(());
            }

            if report {
                println!(
                    "Scanned {} objects, {} primary candidates",
                    detection.scanned, detection.primary_candidates
                );
                for pattern in &detection.patterns {
                    println!("  {}: {:?}", pattern.pattern, pattern.status);
                }
                if detection.duplicates_skipped > 0 {
                    println!("  Duplicates skipped: {}", detection.duplicates_skipped);
                }
                println!();
            }

            if detection.assets.is_empty() {
                println!("No assets found for {}", detection.owner);
                return Ok(());
            }

            println!("{}", asset_table(&detection.assets));
        }

        AssetCommands::Groups { address, json } => {
            validate_address(address.trim())?;
            let assets = classifier.detect(&address).await;
            let groups = group_by_collection(&assets);

            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
                return Ok(());
            }

            if groups.is_empty() {
                println!("No assets found for {}", address.trim());
                return Ok(());
            }

            for group in groups {
                println!("{} ({} assets)", group.label, group.assets.len());
                for asset in &group.assets {
                    println!("  {}  {}", short_id(&asset.id), asset.name);
                }
                println!();
            }
        }
    }

    Ok(())
}

fn asset_table(assets: &[NormalizedAsset]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Collection", "Origin", "Image"]);

    for asset in assets {
        table.add_row(vec![
            short_id(&asset.id),
            asset.name.clone(),
            asset.collection_label.clone().unwrap_or_default(),
            short_id(&asset.origin_tag),
            asset.image_ref.clone(),
        ]);
    }

    table
}

// truncated for display
fn short_id(id: &str) -> String {
    if id.chars().count() <= 16 {
        return id.to_string();
    }
    let head: String = id.chars().take(10).collect();
    let tail: String = id.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("{}..{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0x2"), "0x2");
        assert_eq!(
            short_id("0x1234567890abcdef1234567890abcdef"),
            "0x12345678..cdef"
        );
    }
}
