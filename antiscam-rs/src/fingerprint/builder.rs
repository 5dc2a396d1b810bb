//! Fingerprint construction from a labeled corpus
//!
//! One-time batch aggregation: group records by category, compute feature
//! prevalence and top keywords per group. Output is bit-reproducible for
//! identical input — grouping and tie-breaking never depend on hash order.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::types::{Fingerprint, FingerprintSet, ScamRecord};
use crate::features::{extract_features, tokenize_words, FeatureVector};

const TOP_KEYWORDS: usize = 10;

impl FingerprintSet {
    /// Build fingerprints by grouping records by category and averaging
    /// feature presence.
    ///
    /// Records with empty or whitespace-only messages are skipped; a
    /// missing or empty category label becomes `"Unknown"`. Categories keep
    /// their first-seen order.
    pub fn from_records(records: &[ScamRecord], version: &str) -> FingerprintSet {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<&str>> = HashMap::new();

        for record in records {
            let message = record.message.as_deref().unwrap_or("");
            if message.trim().is_empty() {
                continue;
            }
            let scam_type = match record.scam_type.as_deref() {
                Some(label) if !label.is_empty() => label.to_string(),
                _ => "Unknown".to_string(),
            };
            if !groups.contains_key(&scam_type) {
                order.push(scam_type.clone());
            }
            groups.entry(scam_type).or_default().push(message);
        }

        let items: Vec<Fingerprint> = order
            .iter()
            .map(|scam_type| {
                let messages = &groups[scam_type];
                let fingerprint = build_fingerprint(scam_type, messages);
                debug!(
                    scam_type = %fingerprint.scam_type,
                    messages = messages.len(),
                    "fingerprint built"
                );
                fingerprint
            })
            .collect();

        info!(
            version,
            categories = items.len(),
            records = records.len(),
            "fingerprint set built"
        );

        FingerprintSet {
            version: version.to_string(),
            items,
        }
    }
}

fn build_fingerprint(scam_type: &str, messages: &[&str]) -> Fingerprint {
    let n = messages.len() as f64;

    let mut true_counts: HashMap<&'static str, usize> = HashMap::new();
    for message in messages {
        for (name, fired) in extract_features(message).iter() {
            if fired {
                *true_counts.entry(name).or_insert(0) += 1;
            }
        }
    }

    let feature_prevalence: BTreeMap<String, f64> = FeatureVector::NAMES
        .iter()
        .map(|&name| {
            let count = true_counts.get(name).copied().unwrap_or(0);
            (name.to_string(), count as f64 / n)
        })
        .collect();

    Fingerprint {
        scam_type: scam_type.to_string(),
        feature_prevalence,
        top_keywords: top_keywords(messages),
    }
}

/// Most frequent tokens across the group's messages, ties broken by first
/// occurrence so the ranking is stable.
fn top_keywords(messages: &[&str]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for message in messages {
        for token in tokenize_words(message) {
            if !counts.contains_key(&token) {
                first_seen.push(token.clone());
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    // Stable sort keeps first-occurrence order for equal counts
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(TOP_KEYWORDS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ScamRecord> {
        vec![
            ScamRecord::new(
                "Phishing Scam (Link Sharing)",
                "Your Axis account is at risk. Click here to verify your info: http://gade.org",
            ),
            ScamRecord::new(
                "WhatsApp Account Hacking Scam",
                "Hey, this is Bhamini. I accidentally sent my OTP to your number. Can you send it to me quickly?",
            ),
            ScamRecord::new(
                "Phishing Scam (Link Sharing)",
                "Account blocked! Click here: http://secure-verify.biz",
            ),
        ]
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let set = FingerprintSet::from_records(&sample_records(), "v1");
        assert_eq!(set.len(), 2);
        assert_eq!(set.items[0].scam_type, "Phishing Scam (Link Sharing)");
        assert_eq!(set.items[1].scam_type, "WhatsApp Account Hacking Scam");
        assert_eq!(set.version, "v1");
    }

    #[test]
    fn test_prevalence_covers_every_feature() {
        let set = FingerprintSet::from_records(&sample_records(), "v1");
        for item in &set.items {
            assert_eq!(item.feature_prevalence.len(), FeatureVector::NAMES.len());
            for value in item.feature_prevalence.values() {
                assert!((0.0..=1.0).contains(value));
            }
        }
    }

    #[test]
    fn test_prevalence_values() {
        let set = FingerprintSet::from_records(&sample_records(), "v1");
        let phishing = &set.items[0];
        assert_eq!(phishing.feature_prevalence["has_url"], 1.0);
        assert_eq!(phishing.feature_prevalence["click_here"], 1.0);
        assert_eq!(phishing.feature_prevalence["mentions_otp"], 0.0);

        let hijack = &set.items[1];
        assert_eq!(hijack.feature_prevalence["friend_tone"], 1.0);
        assert_eq!(hijack.feature_prevalence["mentions_otp"], 1.0);
        assert_eq!(hijack.feature_prevalence["urgency_markers"], 1.0);
        assert_eq!(hijack.feature_prevalence["has_url"], 0.0);
    }

    #[test]
    fn test_skips_blank_messages_and_defaults_unknown() {
        let records = vec![
            ScamRecord::new("Loan Scam", "   "),
            ScamRecord::new("", "Easy loan, no documents, pay registration fee"),
            ScamRecord {
                scam_type: None,
                ..ScamRecord::new("ignored", "Congratulations, you won a lottery prize")
            },
        ];
        let set = FingerprintSet::from_records(&records, "v1");
        // The blank Loan Scam record contributes nothing
        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].scam_type, "Unknown");
    }

    #[test]
    fn test_top_keywords_frequency_then_first_occurrence() {
        let records = vec![
            ScamRecord::new("Lottery Scam", "lottery prize winner"),
            ScamRecord::new("Lottery Scam", "prize draw tonight"),
        ];
        let set = FingerprintSet::from_records(&records, "v1");
        let keywords = &set.items[0].top_keywords;
        // "prize" occurs twice; the rest once, ranked by first occurrence
        assert_eq!(
            keywords,
            &["prize", "lottery", "winner", "draw", "tonight"]
        );
    }

    #[test]
    fn test_top_keywords_capped_at_ten() {
        let message = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let records = vec![ScamRecord::new("Test", message)];
        let set = FingerprintSet::from_records(&records, "v1");
        assert_eq!(set.items[0].top_keywords.len(), 10);
        assert_eq!(set.items[0].top_keywords[0], "alpha");
    }

    #[test]
    fn test_deterministic_rebuild() {
        let records = sample_records();
        let first = FingerprintSet::from_records(&records, "v1");
        let second = FingerprintSet::from_records(&records, "v1");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_corpus_builds_empty_set() {
        let set = FingerprintSet::from_records(&[], "v1");
        assert!(set.is_empty());
        assert_eq!(set.version, "v1");
    }
}
