//! Intent classification for shopper utterances.
//!
//! A keyword rule engine, not a statistical model. The order of the
//! checks in [`RuleBasedIntentClassifier::classify`] decides outcomes:
//! reordering them reclassifies real messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The purpose of a single utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopIntent {
    /// Looking for products ("show me running shoes").
    ProductSearch,
    /// Narrowing by price only ("under 3000").
    BudgetFilter,
    /// Asking the assistant to pick ("suggest something for gym").
    Recommendation,
    /// Talking about look and feel ("something trendy").
    StylePreference,
    /// Never produced by the rule classifier; handled by the responder.
    Unknown,
}

impl ShopIntent {
    /// Wire tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductSearch => "PRODUCT_SEARCH",
            Self::BudgetFilter => "BUDGET_FILTER",
            Self::Recommendation => "RECOMMENDATION",
            Self::StylePreference => "STYLE_PREFERENCE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ShopIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies shopper intent from message content
pub trait IntentClassifier: Send + Sync {
    /// Classify a raw utterance. Never fails.
    fn classify(&self, message: &str) -> ShopIntent;
}

const RECOMMENDATION_KEYWORDS: &[&str] = &["suggest", "recommend", "what should i", "best for"];

const BUDGET_KEYWORDS: &[&str] = &["under", "below", "cheap", "budget", "price"];

const CURRENCY_MARKERS: &[&str] = &["rs", "rupees", "₹"];

const STYLE_KEYWORDS: &[&str] = &["style", "stylish", "trendy", "fashion", "look"];

const SEARCH_VERBS: &[&str] = &["show", "want", "looking for"];

const PRODUCT_KEYWORDS: &[&str] = &[
    "shoe", "shoes", "hoodie", "jacket", "t-shirt", "top", "tee", "wear", "pants",
];

const CATEGORY_KEYWORDS: &[&str] = &[
    "running",
    "gym",
    "casual",
    "sports",
    "training",
    "basketball",
    "walking",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// True if the lowercased message names a product.
fn has_product_keywords(lowercase: &str) -> bool {
    contains_any(lowercase, PRODUCT_KEYWORDS)
}

/// True if the lowercased message names an activity category.
fn has_category_keywords(lowercase: &str) -> bool {
    contains_any(lowercase, CATEGORY_KEYWORDS)
}

/// Simple rule-based intent classifier (default implementation)
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedIntentClassifier;

impl RuleBasedIntentClassifier {
    fn is_budget_phrase(lowercase: &str) -> bool {
        contains_any(lowercase, BUDGET_KEYWORDS)
            || (lowercase.chars().any(|c| c.is_ascii_digit())
                && contains_any(lowercase, CURRENCY_MARKERS))
    }
}

impl IntentClassifier for RuleBasedIntentClassifier {
    fn classify(&self, message: &str) -> ShopIntent {
        let lowercase = message.to_lowercase();

        if contains_any(&lowercase, RECOMMENDATION_KEYWORDS) {
            return ShopIntent::Recommendation;
        }

        // A price phrase inside a full search sentence stays a search; the
        // extractor still picks up its maxPrice.
        if Self::is_budget_phrase(&lowercase)
            && !has_product_keywords(&lowercase)
            && !has_category_keywords(&lowercase)
        {
            return ShopIntent::BudgetFilter;
        }

        if contains_any(&lowercase, STYLE_KEYWORDS) {
            return ShopIntent::StylePreference;
        }

        if has_product_keywords(&lowercase)
            || has_category_keywords(&lowercase)
            || contains_any(&lowercase, SEARCH_VERBS)
        {
            return ShopIntent::ProductSearch;
        }

        // Shopping-first fallback
        ShopIntent::ProductSearch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> ShopIntent {
        RuleBasedIntentClassifier.classify(message)
    }

    mod intent_tags {
        use super::*;

        #[test]
        fn serializes_to_screaming_snake_case() {
            let json = serde_json::to_string(&ShopIntent::BudgetFilter).unwrap();
            assert_eq!(json, "\"BUDGET_FILTER\"");
        }

        #[test]
        fn deserializes_from_screaming_snake_case() {
            let intent: ShopIntent = serde_json::from_str("\"STYLE_PREFERENCE\"").unwrap();
            assert_eq!(intent, ShopIntent::StylePreference);
        }

        #[test]
        fn display_matches_serde_tag() {
            for intent in [
                ShopIntent::ProductSearch,
                ShopIntent::BudgetFilter,
                ShopIntent::Recommendation,
                ShopIntent::StylePreference,
                ShopIntent::Unknown,
            ] {
                let json = serde_json::to_string(&intent).unwrap();
                assert_eq!(json, format!("\"{}\"", intent));
            }
        }
    }

    mod recommendation {
        use super::*;

        #[test]
        fn recommend_keywords_win() {
            assert_eq!(classify("Suggest something for gym"), ShopIntent::Recommendation);
            assert_eq!(classify("What should I buy?"), ShopIntent::Recommendation);
            assert_eq!(classify("best for marathons"), ShopIntent::Recommendation);
        }

        #[test]
        fn is_case_insensitive() {
            assert_eq!(classify("RECOMMEND me one"), ShopIntent::Recommendation);
        }

        #[test]
        fn beats_budget_and_style() {
            assert_eq!(
                classify("recommend something trendy under 2000"),
                ShopIntent::Recommendation
            );
        }
    }

    mod budget_filter {
        use super::*;

        #[test]
        fn bare_price_phrase_is_budget() {
            assert_eq!(classify("Under 3000"), ShopIntent::BudgetFilter);
            assert_eq!(classify("below 500 please"), ShopIntent::BudgetFilter);
            assert_eq!(classify("something cheap"), ShopIntent::BudgetFilter);
        }

        #[test]
        fn digits_with_currency_marker_is_budget() {
            assert_eq!(classify("2000 rupees max"), ShopIntent::BudgetFilter);
            assert_eq!(classify("₹1500"), ShopIntent::BudgetFilter);
        }

        #[test]
        fn currency_marker_without_digits_is_not_budget() {
            assert_eq!(classify("rupees"), ShopIntent::ProductSearch);
        }

        #[test]
        fn price_inside_product_search_stays_search() {
            assert_eq!(classify("show me shoes under 2000"), ShopIntent::ProductSearch);
            assert_eq!(classify("running gear under 2000"), ShopIntent::ProductSearch);
        }

        #[test]
        fn beats_style_when_no_product_named() {
            assert_eq!(classify("trendy but budget"), ShopIntent::BudgetFilter);
        }
    }

    mod style_preference {
        use super::*;

        #[test]
        fn style_keywords_classify_as_style() {
            assert_eq!(classify("I want something stylish"), ShopIntent::StylePreference);
            assert_eq!(classify("what's in fashion"), ShopIntent::StylePreference);
            assert_eq!(classify("a cool look"), ShopIntent::StylePreference);
        }

        #[test]
        fn beats_product_search() {
            assert_eq!(classify("trendy hoodies"), ShopIntent::StylePreference);
        }
    }

    mod product_search {
        use super::*;

        #[test]
        fn product_and_category_words_are_search() {
            assert_eq!(classify("Show me running shoes"), ShopIntent::ProductSearch);
            assert_eq!(classify("hoodie"), ShopIntent::ProductSearch);
            assert_eq!(classify("basketball"), ShopIntent::ProductSearch);
        }

        #[test]
        fn search_verbs_are_search() {
            assert_eq!(classify("I want a gift"), ShopIntent::ProductSearch);
        }

        #[test]
        fn looking_for_hits_style_first() {
            // "looking" contains "look", which is checked before search verbs.
            assert_eq!(classify("I'm looking for a gift"), ShopIntent::StylePreference);
        }

        #[test]
        fn gibberish_falls_back_to_search() {
            assert_eq!(classify("asdkjasd"), ShopIntent::ProductSearch);
            assert_eq!(classify(""), ShopIntent::ProductSearch);
            assert_eq!(classify("   \t "), ShopIntent::ProductSearch);
            assert_eq!(classify("?!#@"), ShopIntent::ProductSearch);
        }

        #[test]
        fn never_returns_unknown() {
            for message in ["", "x", "hello there", "42", "🙂"] {
                assert_ne!(classify(message), ShopIntent::Unknown);
            }
        }
    }
}
