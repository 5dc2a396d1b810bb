//! Per-category fingerprints and the log-odds classifier
//!
//! A fingerprint summarizes how often each feature fires in one scam
//! category's labeled messages, plus a short representative vocabulary.
//! The classifier scores new text against every fingerprint with
//! transparent log-odds weights and explains the winning category.

pub mod builder;
pub mod classifier;
pub mod types;

pub use classifier::{logit, sigmoid, FingerprintClassifier};
pub use types::{Classification, FeatureWeight, Fingerprint, FingerprintSet, ScamRecord};
