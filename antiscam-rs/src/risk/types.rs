//! Risk types

use serde::{Deserialize, Serialize};

/// Blend weights for final risk. Tunable; no normalization is enforced, so
/// weights that do not sum to 1 are accepted as configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub rule: f64,
    pub ml: f64,
    pub url: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            rule: 0.35,
            ml: 0.5,
            url: 0.15,
        }
    }
}

/// Risk band for UX and triage routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Blended, clamped final risk with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalRisk {
    /// In [0,1]
    pub score: f64,
    pub label: RiskLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = RiskWeights::default();
        assert_eq!(weights.rule, 0.35);
        assert_eq!(weights.ml, 0.5);
        assert_eq!(weights.url, 0.15);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(RiskLabel::High.to_string(), "High");
        assert_eq!(RiskLabel::Low.as_str(), "Low");
    }
}
