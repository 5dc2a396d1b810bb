//! Risk blending

use super::types::{FinalRisk, RiskLabel, RiskWeights};

/// Combines rule-based probability, ML probability, and optional URL risk
/// into a single final risk in [0,1].
#[derive(Debug, Clone)]
pub struct RiskAssessor {
    weights: RiskWeights,
}

impl RiskAssessor {
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Weighted blend of the available signals.
    ///
    /// Each provided value is clamped to [0,1]. An absent optional signal
    /// contributes exactly 0 — its weight is not redistributed, so omitting
    /// a signal caps the achievable final score. The sum is clamped once
    /// more for floating-point safety.
    pub fn combine(&self, rule_prob: f64, ml_prob: Option<f64>, url_risk: Option<f64>) -> f64 {
        let rp = rule_prob.clamp(0.0, 1.0);
        let mp = ml_prob.map(|p| p.clamp(0.0, 1.0)).unwrap_or(0.0);
        let ur = url_risk.map(|r| r.clamp(0.0, 1.0)).unwrap_or(0.0);

        let score = self.weights.rule * rp + self.weights.ml * mp + self.weights.url * ur;
        score.clamp(0.0, 1.0)
    }

    /// Fixed bands:
    ///   High   >= 0.80
    ///   Medium >= 0.60
    ///   Low    else
    pub fn label_from_score(score: f64) -> RiskLabel {
        if score >= 0.80 {
            return RiskLabel::High;
        }
        if score >= 0.60 {
            return RiskLabel::Medium;
        }
        RiskLabel::Low
    }

    /// Blend and band in one step.
    pub fn assess(&self, rule_prob: f64, ml_prob: Option<f64>, url_risk: Option<f64>) -> FinalRisk {
        let score = self.combine(rule_prob, ml_prob, url_risk);
        FinalRisk {
            score,
            label: Self::label_from_score(score),
        }
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new(RiskWeights::default())
    }
}
