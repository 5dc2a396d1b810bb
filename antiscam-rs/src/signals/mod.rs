//! External signal abstractions
//!
//! The triage pipeline can blend in two optional external signals: a
//! supervised text classifier and a URL/domain reputation source. Both are
//! narrow capability traits so the rule-based core carries no dependency on
//! any particular model toolkit or reputation backend.

use crate::error::Result;

pub mod mock;

/// Opaque supervised text classifier: message text in, scam probability out.
pub trait TextModel: Send + Sync {
    /// Probability in [0,1] that the message is a scam.
    fn predict(&self, message: &str) -> Result<f64>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// URL/domain reputation source.
pub trait UrlReputation: Send + Sync {
    /// Risk in [0,1] for a bare host name (no scheme, no `www.`).
    fn domain_risk(&self, domain: &str) -> Result<f64>;
}
