use crate::types::NormalizedAsset;
use serde::Serialize;

/// Group key for assets with neither a collection label nor an origin tag.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionGroup {
    pub label: String,
    pub assets: Vec<NormalizedAsset>,
}

pub fn group_key(asset: &NormalizedAsset) -> &str {
    asset
        .collection_label
        .as_deref()
        .filter(|label| !label.is_empty())
        .or_else(|| Some(asset.origin_tag.as_str()).filter(|tag| !tag.is_empty()))
        .unwrap_or(UNCATEGORIZED)
}

/// Groups assets for grid display, keeping first-appearance order.
pub fn group_by_collection(assets: &[NormalizedAsset]) -> Vec<CollectionGroup> {
    let mut groups: Vec<CollectionGroup> = Vec::new();

    for asset in assets {
        let key = group_key(asset);
        match groups.iter_mut().find(|group| group.label == key) {
            Some(group) => group.assets.push(asset.clone()),
            None => groups.push(CollectionGroup {
                label: key.to_string(),
                assets: vec![asset.clone()],
            }),
        }
    }

    groups
}
