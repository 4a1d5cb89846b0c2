//! Collectible detection over an owner's objects.
//!
//! A detection pass never fails: an unreachable upstream yields an empty
//! list, a malformed object is skipped, and a failing fallback query only
//! drops that pattern's contribution.

pub mod fallback;
pub mod normalize;
pub mod signals;

pub use fallback::{AssetSet, PatternReport, PatternStatus, QueryOutcome};
pub use normalize::{normalize, UNNAMED};
pub use signals::is_candidate;

use crate::config::ClassifierConfig;
use crate::rpc::ObjectSource;
use crate::types::{NormalizedAsset, RawObject};

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectionReport {
    pub owner: String,
    pub scanned: usize,
    pub primary_candidates: usize,
    pub fallback_ran: bool,
    pub patterns: Vec<PatternReport>,
    pub duplicates_skipped: usize,
    pub assets: Vec<NormalizedAsset>,
}

pub struct AssetClassifier<S> {
    source: S,
    config: ClassifierConfig,
}

impl<S: ObjectSource> AssetClassifier<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ClassifierConfig::default())
    }

    pub fn with_config(source: S, config: ClassifierConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Detect the collectibles owned by `owner`, in discovery order.
    pub async fn detect(&self, owner: &str) -> Vec<NormalizedAsset> {
        self.detect_with_report(owner).await.assets
    }

    pub async fn detect_with_report(&self, owner: &str) -> DetectionReport {
        let owner = owner.trim();
        let mut report = DetectionReport {
            owner: owner.to_string(),
            ..DetectionReport::default()
        };

        if owner.is_empty() {
            tracing::warn!("Skipping detection for empty owner address");
            return report;
        }

        let objects = match self.source.owned_objects(owner).await {
            Ok(objects) => objects,
            Err(e) => {
                tracing::warn!("Owned object fetch failed for {}: {}", owner, e);
                return report;
            }
        };
        report.scanned = objects.len();

        let mut assets = AssetSet::new();
        assets.extend(classify(objects.iter().filter(|o| signals::is_candidate(o))));
        report.primary_candidates = assets.len();

        if assets.len() < self.config.min_candidates {
            report.fallback_ran = true;
            tracing::debug!(
                "Primary pass found {} candidates for {}, widening search",
                assets.len(),
                owner
            );

            for pattern in &self.config.fallback_patterns {
                let outcome = fallback::query_pattern(&self.source, owner, pattern).await;
                report.patterns.push(PatternReport {
                    pattern: pattern.clone(),
                    status: outcome.status(),
                });
                assets.extend(classify(outcome.into_objects().iter()));
            }
        }

        report.duplicates_skipped = assets.duplicates();
        report.assets = assets.into_assets();

        tracing::info!(
            "Detected {} assets for {} ({} objects scanned)",
            report.assets.len(),
            owner,
            report.scanned
        );

        report
    }
}

fn classify<'a>(objects: impl Iterator<Item = &'a RawObject>) -> Vec<NormalizedAsset> {
    objects
        .map(normalize)
        .filter(normalize::is_identifiable)
        .collect()
}
