//! Risk blending and batch severity
//!
//! Combines the rule-based classification probability with optional
//! external ML and URL-reputation signals into one final risk, and
//! summarizes a small batch of final risks into the Scam Risk Index.

pub mod assessor;
pub mod index;
pub mod types;

pub use assessor::RiskAssessor;
pub use index::scam_risk_index;
pub use types::{FinalRisk, RiskLabel, RiskWeights};
