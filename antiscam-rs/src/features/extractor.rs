//! Deterministic feature and slot extraction
//!
//! Every function here is total: arbitrary text in, fixed-shape output,
//! no failure path. Keyword predicates operate on the case-folded text;
//! slots keep the original casing of the matched substrings.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::types::{FeatureVector, SlotSet};

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

// Indian numbers: optional +91 country code with optional separator, or a
// bare 10-digit token.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?91[\s-]?\d{10}|\b\d{10}\b").unwrap());

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(₹|\brs\.?)\s*\d[\d,]*").unwrap());

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "to", "of", "and", "or", "your", "you", "for", "from", "in", "on", "is",
    "are", "this", "that", "here", "now", "we", "our", "me", "my", "it's", "its",
];

/// Fix the mis-encoded rupee sequence (`â‚¹` -> `₹`) if it ever appears.
fn normalize_rupee(text: &str) -> String {
    text.replace("â‚¹", "₹")
}

/// Turn raw text into an interpretable boolean feature vector.
pub fn extract_features(text: &str) -> FeatureVector {
    let t = normalize_rupee(text).to_lowercase();

    FeatureVector {
        has_url: URL_RE.is_match(&t),
        has_phone: PHONE_RE.is_match(&t),
        has_amount: AMOUNT_RE.is_match(&t),

        mentions_otp: t.contains("otp"),
        mentions_refund: t.contains("refund"),
        mentions_loan: t.contains("loan"),
        mentions_invest: t.contains("invest") || t.contains("crypto"),
        mentions_teamviewer: t.contains("teamviewer"),
        mentions_congratulations: t.contains("congratulations"),

        mentions_prepay_or_fee: t.contains("prepay")
            || t.contains("processing fee")
            || t.contains("registration fee")
            || t.contains("upfront"),
        asks_bank_details: t.contains("bank details") || t.contains("bank account"),
        mentions_aadhaar: t.contains("aadhaar"),
        mentions_upi: t.contains("upi"),

        // OTP hijack cue on WhatsApp-like texts
        friend_tone: t.contains("hey, this is") || t.contains("hey, it's"),
        urgency_markers: t.contains("quickly") || t.contains("urgent") || t.contains("limited slots"),
        click_here: t.contains("click here"),
    }
}

/// Pull lightweight structured fields that help explanations and clustering.
///
/// First match per pattern. DOMAIN falls back to absent on any URL that the
/// parser rejects rather than erroring.
pub fn extract_slots(text: &str) -> SlotSet {
    let tx = normalize_rupee(text);

    let domain = URL_RE.find(&tx).and_then(|m| {
        Url::parse(m.as_str()).ok().and_then(|parsed| {
            parsed.host_str().map(|host| {
                let host = host.to_ascii_lowercase();
                host.strip_prefix("www.").unwrap_or(&host).to_string()
            })
        })
    });

    let phone = PHONE_RE.find(&tx).map(|m| m.as_str().to_string());
    let amount = AMOUNT_RE.find(&tx).map(|m| m.as_str().to_string());

    SlotSet {
        domain,
        phone,
        amount,
    }
}

/// Basic word tokenizer for keyword summaries.
///
/// Non-alphabetic runs become separators; tokens of length <= 2 and
/// stopwords are dropped. Not used for scoring.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let cleaned: String = normalize_rupee(text)
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !STOPWORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}
