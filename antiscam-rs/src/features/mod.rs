//! Feature and slot extraction
//!
//! Turns raw message text into the fixed boolean feature vector used for
//! fingerprint scoring, plus lightweight structured slots (domain, phone,
//! amount) for context and clustering.

pub mod extractor;
pub mod types;

pub use extractor::{extract_features, extract_slots, tokenize_words};
pub use types::{FeatureVector, SlotSet};
