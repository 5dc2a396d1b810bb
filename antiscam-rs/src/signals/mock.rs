//! Mock signal providers for testing
//!
//! The mock text model uses simple keyword counting to produce a
//! probability; the mock reputation source answers from a fixed table.

use std::collections::HashMap;
use tracing::debug;

use super::{TextModel, UrlReputation};
use crate::error::Result;

const SUSPICIOUS_MARKERS: &[&str] = &[
    "otp", "urgent", "quickly", "click here", "verify", "blocked", "prize", "lottery", "fee",
    "refund",
];

/// Mock text model: each suspicious marker adds 0.2, capped at 0.95.
pub struct MockTextModel {
    model_name: String,
}

impl MockTextModel {
    pub fn new() -> Self {
        Self {
            model_name: "mock-text-model-v1".to_string(),
        }
    }
}

impl Default for MockTextModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TextModel for MockTextModel {
    fn predict(&self, message: &str) -> Result<f64> {
        let t = message.to_lowercase();
        let hits = SUSPICIOUS_MARKERS
            .iter()
            .filter(|marker| t.contains(*marker))
            .count();

        let probability = (hits as f64 * 0.2).min(0.95);
        debug!(hits, probability, "mock text model scored message");
        Ok(probability)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Mock reputation source backed by a fixed domain table. Unlisted domains
/// score 0.0.
pub struct MockUrlReputation {
    table: HashMap<String, f64>,
}

impl MockUrlReputation {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>, risk: f64) -> Self {
        self.table.insert(domain.into(), risk);
        self
    }
}

impl Default for MockUrlReputation {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlReputation for MockUrlReputation {
    fn domain_risk(&self, domain: &str) -> Result<f64> {
        Ok(self.table.get(domain).copied().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_model_scores_markers() {
        let model = MockTextModel::new();
        let benign = model.predict("see you at lunch tomorrow").unwrap();
        assert_eq!(benign, 0.0);

        let scammy = model
            .predict("URGENT: share the OTP quickly or your account stays blocked")
            .unwrap();
        assert!(scammy >= 0.6);
        assert!(scammy <= 0.95);
    }

    #[test]
    fn test_mock_model_caps_probability() {
        let model = MockTextModel::new();
        let text = "otp urgent quickly click here verify blocked prize lottery fee refund";
        assert_eq!(model.predict(text).unwrap(), 0.95);
    }

    #[test]
    fn test_mock_model_name() {
        let model = MockTextModel::new();
        assert_eq!(model.model_name(), "mock-text-model-v1");
    }

    #[test]
    fn test_mock_reputation_table() {
        let reputation = MockUrlReputation::new().with_domain("gade.org", 0.9);
        assert_eq!(reputation.domain_risk("gade.org").unwrap(), 0.9);
        assert_eq!(reputation.domain_risk("example.org").unwrap(), 0.0);
    }
}
