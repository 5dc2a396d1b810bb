//! Feature vector and slot types

use serde::{Deserialize, Serialize};

/// Boolean feature vector computed over a single message.
///
/// Every predicate is always present: the struct shape is the fixed key set,
/// so downstream prevalence aggregation and scoring never see a partial
/// vector. Keep the names human-readable — they are shown verbatim in
/// classification explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub has_url: bool,
    pub has_phone: bool,
    pub has_amount: bool,

    pub mentions_otp: bool,
    pub mentions_refund: bool,
    pub mentions_loan: bool,
    pub mentions_invest: bool,
    pub mentions_teamviewer: bool,
    pub mentions_congratulations: bool,

    pub mentions_prepay_or_fee: bool,
    pub asks_bank_details: bool,
    pub mentions_aadhaar: bool,
    pub mentions_upi: bool,

    pub friend_tone: bool,
    pub urgency_markers: bool,
    pub click_here: bool,
}

impl FeatureVector {
    /// Canonical feature names, in declaration order.
    pub const NAMES: [&'static str; 16] = [
        "has_url",
        "has_phone",
        "has_amount",
        "mentions_otp",
        "mentions_refund",
        "mentions_loan",
        "mentions_invest",
        "mentions_teamviewer",
        "mentions_congratulations",
        "mentions_prepay_or_fee",
        "asks_bank_details",
        "mentions_aadhaar",
        "mentions_upi",
        "friend_tone",
        "urgency_markers",
        "click_here",
    ];

    /// Iterate `(name, value)` pairs in [`Self::NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("has_url", self.has_url),
            ("has_phone", self.has_phone),
            ("has_amount", self.has_amount),
            ("mentions_otp", self.mentions_otp),
            ("mentions_refund", self.mentions_refund),
            ("mentions_loan", self.mentions_loan),
            ("mentions_invest", self.mentions_invest),
            ("mentions_teamviewer", self.mentions_teamviewer),
            ("mentions_congratulations", self.mentions_congratulations),
            ("mentions_prepay_or_fee", self.mentions_prepay_or_fee),
            ("asks_bank_details", self.asks_bank_details),
            ("mentions_aadhaar", self.mentions_aadhaar),
            ("mentions_upi", self.mentions_upi),
            ("friend_tone", self.friend_tone),
            ("urgency_markers", self.urgency_markers),
            ("click_here", self.click_here),
        ]
        .into_iter()
    }

    /// Look up a feature value by name.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// Structured fields pulled out of a message, independent of scoring.
///
/// Each slot is the first match of its pattern, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SlotSet {
    /// Host of the first URL, lowercased, leading `www.` stripped
    pub domain: Option<String>,
    /// Raw matched phone substring
    pub phone: Option<String>,
    /// Raw matched amount substring (rupee glyph or rs. prefix)
    pub amount: Option<String>,
}
