//! Fingerprint data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::SlotSet;

/// One labeled dataset row. Only `scam_type` and `message` feed the
/// fingerprint builder; the remaining fields ride along for exploration
/// and are optional so partial exports still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub scam_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub target_info_requested: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

impl ScamRecord {
    pub fn new(scam_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            scam_type: Some(scam_type.into()),
            message: Some(message.into()),
            description: None,
            language: None,
            target_info_requested: None,
            medium: None,
        }
    }
}

/// Statistical summary of one scam category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingerprint {
    pub scam_type: String,
    /// feature -> fraction of the category's messages where it fired, in [0,1]
    pub feature_prevalence: BTreeMap<String, f64>,
    /// Up to 10 most frequent tokens, descending frequency
    pub top_keywords: Vec<String>,
}

/// Versioned, ordered collection of fingerprints. Immutable once built;
/// a corpus update means building a new set and swapping it in.
///
/// Items keep the first-seen category order of the corpus they were built
/// from, and the whole structure round-trips through JSON unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerprintSet {
    pub version: String,
    pub items: Vec<Fingerprint>,
}

impl FingerprintSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Weighted feature that contributed to a classification, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub weight: f64,
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub scam_type: String,
    /// Raw sum of log-odds weights, unbounded
    pub score: f64,
    /// sigmoid(score), in (0,1)
    pub probability: f64,
    /// Contributing features of the winning category, descending |weight|, at most 6
    pub why: Vec<FeatureWeight>,
    pub slots: SlotSet,
}
