//! Triage result types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fingerprint::Classification;
use crate::risk::FinalRisk;

/// Per-message triage outcome: the explained classification plus the
/// blended final risk.
#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub classification: Classification,
    pub risk: FinalRisk,
}

/// Outcome for a small batch of messages.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Version of the fingerprint set that scored the batch
    pub version: String,
    pub count: usize,
    /// Scam Risk Index over the batch's final risks, in [0,100]
    pub risk_index: f64,
    pub reports: Vec<TriageReport>,
}

/// Triage counters and engine status.
#[derive(Debug, Clone, Serialize)]
pub struct TriageStats {
    /// Messages triaged since startup
    pub messages_triaged: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    /// Version of the active fingerprint set
    pub fingerprint_version: String,
    /// Categories in the active fingerprint set
    pub categories: usize,
    pub last_reload: Option<DateTime<Utc>>,
}
