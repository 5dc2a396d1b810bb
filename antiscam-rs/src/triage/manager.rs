//! Triage manager
//!
//! Holds the active classifier behind a swappable handle so a corpus
//! reload never disturbs in-flight readers: a reload builds a complete new
//! classifier and replaces the handle in one store. Classification and
//! blending themselves are pure and need no coordination.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{BatchReport, TriageReport, TriageStats};
use crate::config::Config;
use crate::error::Result;
use crate::fingerprint::{FingerprintClassifier, FingerprintSet, ScamRecord};
use crate::risk::{scam_risk_index, RiskAssessor, RiskLabel, RiskWeights};
use crate::signals::{TextModel, UrlReputation};

#[derive(Debug, Default)]
struct Counters {
    messages_triaged: u64,
    high: u64,
    medium: u64,
    low: u64,
    last_reload: Option<DateTime<Utc>>,
}

/// Process-lifetime triage engine.
pub struct TriageManager {
    classifier: RwLock<Arc<FingerprintClassifier>>,
    assessor: RiskAssessor,
    text_model: Option<Arc<dyn TextModel>>,
    url_reputation: Option<Arc<dyn UrlReputation>>,
    counters: RwLock<Counters>,
}

impl TriageManager {
    pub fn new(fingerprints: FingerprintSet, weights: RiskWeights) -> Self {
        Self {
            classifier: RwLock::new(Arc::new(FingerprintClassifier::new(fingerprints))),
            assessor: RiskAssessor::new(weights),
            text_model: None,
            url_reputation: None,
            counters: RwLock::new(Counters::default()),
        }
    }

    /// Build a manager with blend weights taken from the configuration.
    pub fn from_config(fingerprints: FingerprintSet, config: &Config) -> Self {
        Self::new(fingerprints, config.risk.weights())
    }

    /// Attach an external text classifier.
    pub fn with_text_model(mut self, model: Arc<dyn TextModel>) -> Self {
        info!(model = model.model_name(), "text model attached");
        self.text_model = Some(model);
        self
    }

    /// Attach a URL/domain reputation source.
    pub fn with_url_reputation(mut self, reputation: Arc<dyn UrlReputation>) -> Self {
        self.url_reputation = Some(reputation);
        self
    }

    pub fn assessor(&self) -> &RiskAssessor {
        &self.assessor
    }

    pub fn fingerprint_version(&self) -> String {
        self.classifier.read().version().to_string()
    }

    /// Classify one message and blend its final risk.
    ///
    /// A failing signal provider is logged and treated as an absent signal;
    /// only an empty fingerprint set is a hard error.
    pub fn triage(&self, message: &str) -> Result<TriageReport> {
        let classifier = self.classifier.read().clone();
        let classification = classifier.classify(message)?;

        let ml_prob = self.text_model.as_ref().and_then(|model| {
            match model.predict(message) {
                Ok(probability) => Some(probability),
                Err(e) => {
                    warn!(model = model.model_name(), error = %e, "text model failed, continuing without ML signal");
                    None
                }
            }
        });

        let url_risk = match (&self.url_reputation, &classification.slots.domain) {
            (Some(reputation), Some(domain)) => match reputation.domain_risk(domain) {
                Ok(risk) => Some(risk),
                Err(e) => {
                    warn!(domain = %domain, error = %e, "reputation lookup failed, continuing without URL signal");
                    None
                }
            },
            _ => None,
        };

        let risk = self
            .assessor
            .assess(classification.probability, ml_prob, url_risk);

        {
            let mut counters = self.counters.write();
            counters.messages_triaged += 1;
            match risk.label {
                RiskLabel::High => counters.high += 1,
                RiskLabel::Medium => counters.medium += 1,
                RiskLabel::Low => counters.low += 1,
            }
        }

        debug!(
            scam_type = %classification.scam_type,
            final_risk = risk.score,
            label = %risk.label,
            "message triaged"
        );

        Ok(TriageReport {
            classification,
            risk,
        })
    }

    /// Triage a small batch and compute its Scam Risk Index.
    pub fn triage_batch<S: AsRef<str>>(&self, messages: &[S]) -> Result<BatchReport> {
        let version = self.fingerprint_version();
        let mut reports = Vec::with_capacity(messages.len());
        let mut risks = Vec::with_capacity(messages.len());

        for message in messages {
            let report = self.triage(message.as_ref())?;
            risks.push(report.risk.score);
            reports.push(report);
        }

        Ok(BatchReport {
            version,
            count: reports.len(),
            risk_index: scam_risk_index(&risks),
            reports,
        })
    }

    /// Rebuild fingerprints from an updated corpus and swap the active
    /// classifier. Readers observe either the old or the new classifier,
    /// never a partial one.
    pub fn reload(&self, records: &[ScamRecord], version: &str) {
        let fingerprints = FingerprintSet::from_records(records, version);
        let categories = fingerprints.len();
        let fresh = Arc::new(FingerprintClassifier::new(fingerprints));

        *self.classifier.write() = fresh;
        self.counters.write().last_reload = Some(Utc::now());

        info!(version, categories, "fingerprints reloaded");
    }

    pub fn stats(&self) -> TriageStats {
        let classifier = self.classifier.read().clone();
        let counters = self.counters.read();
        TriageStats {
            messages_triaged: counters.messages_triaged,
            high: counters.high,
            medium: counters.medium,
            low: counters.low,
            fingerprint_version: classifier.version().to_string(),
            categories: classifier.fingerprints().len(),
            last_reload: counters.last_reload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::mock::{MockTextModel, MockUrlReputation};

    fn sample_set() -> FingerprintSet {
        FingerprintSet::from_records(
            &[
                ScamRecord::new(
                    "Phishing Scam (Link Sharing)",
                    "Your Axis account is at risk. Click here to verify your info: http://gade.org",
                ),
                ScamRecord::new(
                    "WhatsApp Account Hacking Scam",
                    "Hey, this is Bhamini. I accidentally sent my OTP to your number. Can you send it to me quickly?",
                ),
            ],
            "v1",
        )
    }

    #[test]
    fn test_triage_rule_only() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default());
        let report = manager
            .triage("Hey, this is Samiha. I accidentally sent my OTP to your number. Can you send it to me quickly?")
            .unwrap();

        assert_eq!(
            report.classification.scam_type,
            "WhatsApp Account Hacking Scam"
        );
        // Without ML and URL signals the final risk is capped at the rule weight
        assert!(report.risk.score <= 0.35);
        assert_eq!(report.risk.label, RiskLabel::Low);
    }

    #[test]
    fn test_triage_with_signals() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default())
            .with_text_model(Arc::new(MockTextModel::new()))
            .with_url_reputation(Arc::new(MockUrlReputation::new().with_domain("gade.org", 0.9)));

        let report = manager
            .triage("Account blocked! Verify urgently, click here: http://gade.org")
            .unwrap();

        assert!(report.classification.slots.domain.is_some());
        assert!(report.risk.score > 0.35);
    }

    #[test]
    fn test_triage_batch_reports_and_index() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default())
            .with_text_model(Arc::new(MockTextModel::new()));

        let batch = manager
            .triage_batch(&[
                "Hey, this is Aarna. I accidentally sent my OTP to your number. Can you send it to me quickly?",
                "Your tax refund of ₹28,607 is ready. Click here to verify your info: http://ram.com",
            ])
            .unwrap();

        assert_eq!(batch.count, 2);
        assert_eq!(batch.version, "v1");
        assert_eq!(batch.reports.len(), 2);
        assert!(batch.risk_index > 0.0);
        assert!(batch.risk_index <= 100.0);
    }

    #[test]
    fn test_empty_set_surfaces_error() {
        let manager = TriageManager::new(
            FingerprintSet {
                version: "v1".to_string(),
                items: vec![],
            },
            RiskWeights::default(),
        );
        assert!(manager.triage("anything").is_err());
    }

    #[test]
    fn test_reload_swaps_classifier() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default());
        assert_eq!(manager.fingerprint_version(), "v1");

        let records = vec![ScamRecord::new(
            "Loan Scam",
            "Instant loan approval, just pay the processing fee upfront",
        )];
        manager.reload(&records, "v2");

        assert_eq!(manager.fingerprint_version(), "v2");
        let report = manager
            .triage("Get an instant loan, small processing fee")
            .unwrap();
        assert_eq!(report.classification.scam_type, "Loan Scam");

        let stats = manager.stats();
        assert_eq!(stats.categories, 1);
        assert!(stats.last_reload.is_some());
    }

    #[test]
    fn test_reload_to_empty_set_errors_after_swap() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default());
        manager.reload(&[], "v3");
        assert!(manager.triage("anything").is_err());
    }

    #[test]
    fn test_stats_counts_labels() {
        let manager = TriageManager::new(sample_set(), RiskWeights::default());
        manager.triage("hello there").unwrap();
        manager.triage("quick question about dinner").unwrap();

        let stats = manager.stats();
        assert_eq!(stats.messages_triaged, 2);
        assert_eq!(stats.high + stats.medium + stats.low, 2);
        assert_eq!(stats.fingerprint_version, "v1");
    }
}
