use crate::error::Result;
use crate::risk::RiskWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub fingerprints: FingerprintConfig,
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FingerprintConfig {
    /// Version tag attached to fingerprint sets built by this deployment
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiskConfig {
    pub rule_weight: f64,
    pub ml_weight: f64,
    pub url_weight: f64,
}

impl RiskConfig {
    /// Convert the configured blend weights into the assessor's weight set.
    pub fn weights(&self) -> RiskWeights {
        RiskWeights {
            rule: self.rule_weight,
            ml: self.ml_weight,
            url: self.url_weight,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AntiscamError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::AntiscamError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            fingerprints: FingerprintConfig {
                version: "v1".to_string(),
            },
            risk: RiskConfig {
                rule_weight: 0.35,
                ml_weight: 0.5,
                url_weight: 0.15,
            },
        }
    }
}
