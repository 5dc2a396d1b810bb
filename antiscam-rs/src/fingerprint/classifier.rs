//! Log-odds fingerprint classifier
//!
//! Scoring: for each category, sum the log-odds of feature prevalence over
//! the features present in the message. The score is transparent and the
//! contributing features are the "why".

use std::collections::BTreeMap;
use tracing::debug;

use super::types::{Classification, FeatureWeight, FingerprintSet};
use crate::error::{AntiscamError, Result};
use crate::features::{extract_features, extract_slots};

/// Weights below this magnitude are treated as uninformative noise.
const WEIGHT_FLOOR: f64 = 0.01;

/// Log-odds of a prevalence value, clamped to [0.02, 0.98].
///
/// The clamp bounds the weight of a feature that is universally present or
/// absent in a category's training messages, so no single saturated feature
/// can dominate the score.
pub fn logit(p: f64) -> f64 {
    let p = p.clamp(0.02, 0.98);
    (p / (1.0 - p)).ln()
}

/// Map a log-odds sum into [0,1]. Saturates to 0.0 or 1.0 for extreme
/// scores instead of overflowing.
pub fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}

/// Rule-based, explainable classifier over a fingerprint set.
///
/// Weights are fixed at construction; changing them means rebuilding the
/// fingerprint set and constructing a new classifier.
pub struct FingerprintClassifier {
    set: FingerprintSet,
    // One weight table per fingerprint, same order as set.items
    weights: Vec<BTreeMap<String, f64>>,
}

impl FingerprintClassifier {
    /// Precompute per-category log-odds weights from prevalence.
    pub fn new(set: FingerprintSet) -> Self {
        let weights = set
            .items
            .iter()
            .map(|item| {
                item.feature_prevalence
                    .iter()
                    .map(|(feature, &prevalence)| (feature.clone(), logit(prevalence)))
                    .collect()
            })
            .collect();

        Self { set, weights }
    }

    pub fn fingerprints(&self) -> &FingerprintSet {
        &self.set
    }

    pub fn version(&self) -> &str {
        &self.set.version
    }

    /// Weight table for one category, if present.
    pub fn weights_for(&self, scam_type: &str) -> Option<&BTreeMap<String, f64>> {
        self.set
            .items
            .iter()
            .position(|item| item.scam_type == scam_type)
            .map(|idx| &self.weights[idx])
    }

    /// Score a message against every fingerprint and return the best
    /// category with its explanation and slots.
    ///
    /// Categories are compared with strict `>`, so equal scores resolve to
    /// the earliest category in set order. Classifying against an empty set
    /// is a hard error, never a silent null.
    pub fn classify(&self, message: &str) -> Result<Classification> {
        if self.set.is_empty() {
            return Err(AntiscamError::NoFingerprints);
        }

        let features = extract_features(message);
        let slots = extract_slots(message);

        let mut best_idx = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_why: Vec<FeatureWeight> = Vec::new();

        for (idx, weights) in self.weights.iter().enumerate() {
            let mut score = 0.0;
            let mut why: Vec<FeatureWeight> = Vec::new();

            for (name, present) in features.iter() {
                if !present {
                    continue;
                }
                let weight = weights.get(name).copied().unwrap_or(0.0);
                if weight.abs() > WEIGHT_FLOOR {
                    score += weight;
                    why.push(FeatureWeight {
                        feature: name.to_string(),
                        weight: round2(weight),
                    });
                }
            }

            if score > best_score {
                why.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));
                why.truncate(6);
                best_idx = idx;
                best_score = score;
                best_why = why;
            }
        }

        let scam_type = self.set.items[best_idx].scam_type.clone();
        debug!(
            scam_type = %scam_type,
            score = best_score,
            fired = best_why.len(),
            "message classified"
        );

        Ok(Classification {
            scam_type,
            score: best_score,
            probability: sigmoid(best_score),
            why: best_why,
            slots,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
