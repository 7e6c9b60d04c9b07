//! Slot extraction from shopper utterances.
//!
//! Each slot has its own rule and is resolved independently of the
//! others and of the detected intent. Within a slot the first matching
//! clause wins, so at most one value per slot comes out of a message.

use once_cell::sync::Lazy;
use regex::Regex;

use super::slots::SlotSet;

/// Price assumed when the shopper only says "cheap".
pub const DEFAULT_CHEAP_PRICE_THRESHOLD: u64 = 1500;

// Digits and word boundaries are ASCII-only: Devanagari numerals are not
// prices or sizes, and any non-ASCII letter ends a word.
static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|below|less than|<)\s*₹?([0-9]+)").expect("valid price pattern")
});

static EXPLICIT_SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"size\s*([0-9]+(?:\.[0-9]+)?|m|l|xl|xxl|s)").expect("valid size pattern")
});

static NAMED_SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(small|medium|large|xl|xxl)(?-u:\b)").expect("valid named size pattern")
});

/// Extracts shopping slots from one utterance
pub trait EntityExtractor: Send + Sync {
    /// Return only the slots the utterance mentions; everything else is `None`.
    fn extract(&self, message: &str) -> SlotSet;
}

/// Keyword and pattern based slot extractor (default implementation)
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedEntityExtractor {
    cheap_price_threshold: u64,
}

impl RuleBasedEntityExtractor {
    /// Creates an extractor with the default "cheap" threshold.
    pub fn new() -> Self {
        Self {
            cheap_price_threshold: DEFAULT_CHEAP_PRICE_THRESHOLD,
        }
    }

    /// Overrides the price used when the shopper says "cheap".
    pub fn with_cheap_price_threshold(mut self, threshold: u64) -> Self {
        self.cheap_price_threshold = threshold;
        self
    }

    pub fn cheap_price_threshold(&self) -> u64 {
        self.cheap_price_threshold
    }

    fn product_type(lowercase: &str) -> Option<&'static str> {
        if lowercase.contains("hoodie") {
            Some("hoodie")
        } else if lowercase.contains("jacket") {
            Some("jacket")
        } else if lowercase.contains("t-shirt") || lowercase.contains("tee") {
            Some("t-shirt")
        } else if lowercase.contains("shoe") || lowercase.contains("sneaker") {
            Some("shoes")
        } else {
            None
        }
    }

    fn category(lowercase: &str) -> Option<&'static str> {
        if lowercase.contains("run") {
            Some("running")
        } else if lowercase.contains("gym")
            || lowercase.contains("workout")
            || lowercase.contains("train")
        {
            Some("gym")
        } else if lowercase.contains("casual") {
            Some("casual")
        } else if lowercase.contains("sport") || lowercase.contains("basketball") {
            Some("sports")
        } else {
            None
        }
    }

    fn max_price(&self, lowercase: &str) -> Option<u64> {
        // The capture is all ASCII digits, so parsing only fails on overflow.
        PRICE_PATTERN
            .captures(lowercase)
            .and_then(|caps| caps.get(1))
            .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .or_else(|| {
                lowercase
                    .contains("cheap")
                    .then_some(self.cheap_price_threshold)
            })
    }

    fn gender(lowercase: &str) -> Option<&'static str> {
        // "women" contains "men" and "woman" contains "man": plural
        // forms are settled before the singular substrings.
        if lowercase.contains("men") && !lowercase.contains("women") {
            Some("men")
        } else if lowercase.contains("women") || lowercase.contains("ladies") {
            Some("women")
        } else if lowercase.contains("unisex") {
            Some("unisex")
        } else if lowercase.contains("man") {
            Some("men")
        } else if lowercase.contains("woman") {
            Some("women")
        } else {
            None
        }
    }

    fn size(lowercase: &str) -> Option<String> {
        if let Some(token) = EXPLICIT_SIZE_PATTERN
            .captures(lowercase)
            .and_then(|caps| caps.get(1))
        {
            return Some(token.as_str().to_uppercase());
        }

        NAMED_SIZE_PATTERN
            .captures(lowercase)
            .and_then(|caps| caps.get(1))
            .map(|word| match word.as_str() {
                "small" => "S".to_string(),
                "medium" => "M".to_string(),
                "large" => "L".to_string(),
                other => other.to_uppercase(),
            })
    }

    fn style(lowercase: &str) -> Option<&'static str> {
        if lowercase.contains("stylish") {
            Some("stylish")
        } else if lowercase.contains("trendy") {
            Some("trendy")
        } else if lowercase.contains("simple") || lowercase.contains("minimal") {
            Some("simple")
        } else if lowercase.contains("sporty") {
            Some("sporty")
        } else {
            None
        }
    }
}

impl Default for RuleBasedEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for RuleBasedEntityExtractor {
    fn extract(&self, message: &str) -> SlotSet {
        let lowercase = message.to_lowercase();

        SlotSet {
            product_type: Self::product_type(&lowercase).map(str::to_string),
            category: Self::category(&lowercase).map(str::to_string),
            max_price: self.max_price(&lowercase),
            gender: Self::gender(&lowercase).map(str::to_string),
            size: Self::size(&lowercase),
            style: Self::style(&lowercase).map(str::to_string),
        }
    }
}
