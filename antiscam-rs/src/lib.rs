//! antiscam-rs: Explainable scam message triage
//!
//! A rule-based engine that classifies short messages into scam categories
//! and blends the result into a final risk score for downstream triage.
//!
//! # Features
//!
//! - **Transparent classification**: log-odds scoring over human-readable
//!   boolean features, with a per-message "why" list
//! - **Fingerprints**: per-category feature prevalence and vocabulary,
//!   built once from a labeled corpus and hot-swappable on reload
//! - **Risk blending**: rule probability combined with optional external
//!   ML and URL-reputation signals
//! - **Batch severity**: Scam Risk Index for small batches of messages
//!
//! # Example
//!
//! ```
//! use antiscam_rs::{FingerprintClassifier, FingerprintSet, ScamRecord};
//!
//! let records = vec![
//!     ScamRecord::new(
//!         "Phishing Scam (Link Sharing)",
//!         "Your Axis account is at risk. Click here to verify your info: http://gade.org",
//!     ),
//!     ScamRecord::new(
//!         "WhatsApp Account Hacking Scam",
//!         "Hey, this is Bhamini. I accidentally sent my OTP to your number. Can you send it to me quickly?",
//!     ),
//! ];
//!
//! let fingerprints = FingerprintSet::from_records(&records, "v1");
//! let classifier = FingerprintClassifier::new(fingerprints);
//!
//! let result = classifier
//!     .classify("Hey, this is Samiha. I accidentally sent my OTP to your number. Can you send it to me quickly?")
//!     .unwrap();
//! assert_eq!(result.scam_type, "WhatsApp Account Hacking Scam");
//! ```
//!
//! # Modules
//!
//! - [`features`]: Feature and slot extraction
//! - [`fingerprint`]: Fingerprint building and the log-odds classifier
//! - [`risk`]: Risk blending and the Scam Risk Index
//! - [`signals`]: External ML and reputation capability traits
//! - [`triage`]: Process-lifetime manager with hot reload
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod config;
pub mod error;
pub mod features;
pub mod fingerprint;
pub mod risk;
pub mod signals;
pub mod triage;

// Re-export commonly used types
pub use config::Config;
pub use error::{AntiscamError, Result};
pub use features::{extract_features, extract_slots, FeatureVector, SlotSet};
pub use fingerprint::{
    Classification, FeatureWeight, Fingerprint, FingerprintClassifier, FingerprintSet, ScamRecord,
};
pub use risk::{scam_risk_index, FinalRisk, RiskAssessor, RiskLabel, RiskWeights};
pub use signals::{TextModel, UrlReputation};
pub use triage::{BatchReport, TriageManager, TriageReport, TriageStats};
