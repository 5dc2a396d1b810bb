//! Message triage pipeline
//!
//! Wires the fingerprint classifier, risk assessor, and optional external
//! signals into one process-lifetime manager with hot reload.

pub mod manager;
pub mod types;

pub use manager::TriageManager;
pub use types::{BatchReport, TriageReport, TriageStats};
