use crate::error::Result;
use crate::rpc::ObjectSource;
use crate::types::{NormalizedAsset, RawObject};

use serde::Serialize;
use std::collections::HashSet;

/// Result of one secondary type query, with failures already neutralized.
#[derive(Debug)]
pub enum QueryOutcome {
    Found(Vec<RawObject>),
    Empty,
    Failed(String),
}

impl QueryOutcome {
    pub fn from_result(result: Result<Vec<RawObject>>) -> Self {
        match result {
            Ok(objects) if objects.is_empty() => QueryOutcome::Empty,
            Ok(objects) => QueryOutcome::Found(objects),
            Err(e) => QueryOutcome::Failed(e.to_string()),
        }
    }

    pub fn status(&self) -> PatternStatus {
        match self {
            QueryOutcome::Found(objects) => PatternStatus::Found(objects.len()),
            QueryOutcome::Empty => PatternStatus::Empty,
            QueryOutcome::Failed(reason) => PatternStatus::Failed(reason.clone()),
        }
    }

    pub fn into_objects(self) -> Vec<RawObject> {
        match self {
            QueryOutcome::Found(objects) => objects,
            QueryOutcome::Empty | QueryOutcome::Failed(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "detail")]
pub enum PatternStatus {
    Found(usize),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub pattern: String,
    pub status: PatternStatus,
}

pub async fn query_pattern<S>(source: &S, owner: &str, pattern: &str) -> QueryOutcome
where
    S: ObjectSource + ?Sized,
{
    let outcome = QueryOutcome::from_result(source.owned_objects_by_type(owner, pattern).await);

    match &outcome {
        QueryOutcome::Found(objects) => {
            tracing::debug!("Pattern {} matched {} objects", pattern, objects.len())
        }
        QueryOutcome::Empty => tracing::debug!("Pattern {} matched nothing", pattern),
        QueryOutcome::Failed(reason) => {
            tracing::warn!("Pattern {} query failed, skipping: {}", pattern, reason)
        }
    }

    outcome
}

/// Order-preserving asset list, unique by non-empty id.
#[derive(Debug, Default)]
pub struct AssetSet {
    assets: Vec<NormalizedAsset>,
    seen: HashSet<String>,
    duplicates: usize,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `asset` unless its id is already present. The first record wins.
    pub fn insert(&mut self, asset: NormalizedAsset) -> bool {
        if !asset.id.is_empty() && !self.seen.insert(asset.id.clone()) {
            self.duplicates += 1;
            return false;
        }

        self.assets.push(asset);
        true
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn into_assets(self) -> Vec<NormalizedAsset> {
        self.assets
    }
}

impl Extend<NormalizedAsset> for AssetSet {
    fn extend<I: IntoIterator<Item = NormalizedAsset>>(&mut self, iter: I) {
        iter.into_iter().fold(self, |set, asset| {
            set.insert(asset);
            set
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RafflekitError;

    fn asset(id: &str, name: &str) -> NormalizedAsset {
        NormalizedAsset {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image_ref: crate::types::PLACEHOLDER_IMAGE.to_string(),
            collection_label: None,
            origin_tag: String::new(),
        }
    }

    #[test]
    fn test_outcome_from_result() {
        assert!(matches!(QueryOutcome::from_result(Ok(vec![])), QueryOutcome::Empty));
        assert!(matches!(
            QueryOutcome::from_result(Ok(vec![RawObject::new("0x1")])),
            QueryOutcome::Found(ref objects) if objects.len() == 1
        ));

        let failed = QueryOutcome::from_result(Err(RafflekitError::rpc(-32602, "bad filter")));
        assert_eq!(
            failed.status(),
            PatternStatus::Failed("RPC error -32602: bad filter".to_string())
        );
        assert!(failed.into_objects().is_empty());
    }

    #[test]
    fn test_asset_set_keeps_first() {
        let mut set = AssetSet::new();
        assert!(set.insert(asset("0x1", "primary")));
        assert!(!set.insert(asset("0x1", "secondary")));
        set.extend(vec![asset("0x2", "b"), asset("0x1", "again")]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.duplicates(), 2);
        let assets = set.into_assets();
        assert_eq!(assets[0].name, "primary");
        assert_eq!(assets[1].id, "0x2");
    }

    #[test]
    fn test_asset_set_keeps_idless_named_assets() {
        let mut set = AssetSet::new();
        set.extend(vec![asset("", "first"), asset("", "second")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.duplicates(), 0);
    }
}
