//! Handoff from chat to the shop listing.
//!
//! After the assistant has narrowed a filter, a short "yes" / "haan" /
//! "show me" from the shopper means "take me to those products". This
//! module recognizes that reply and turns a filter into a shop link.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::slots::SearchFilter;

/// Search term used for `q` when the filter names no product.
pub const DEFAULT_SEARCH_TERM: &str = "shoes";

const SHOP_PATH: &str = "/shop";

/// English plus romanized Hindi and Marathi confirmations.
const AFFIRMATIONS: &[&str] = &[
    "yes", "yeah", "yep", "yup", "sure", "show", "show me", "show them", "them", "go",
    "proceed", "okay", "ok", "done", "please", "cool", "fine", "let s",
    "ha", "haan", "han", "dikhao", "dekhao", "theek", "theek hai", "chalega", "dikhav",
    "dekho", "dekhao mujhe", "hau",
    "ho", "dakhva", "baghaycha", "daakhva", "daakhiv", "disav", "kar", "dakhiv", "bagha",
    "दाखवा",
];

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\x{0900}-\x{097F}\s]").expect("valid non-word pattern"));

/// Lowercase, turn punctuation into spaces, collapse whitespace.
fn normalize(text: &str) -> String {
    let lowercase = text.to_lowercase();
    NON_WORD
        .replace_all(&lowercase, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if the reply reads as a confirmation.
///
/// Single-word confirmations must appear as a whole word; multi-word
/// ones ("show me", "theek hai") may appear anywhere in the reply.
pub fn is_affirmative(text: &str) -> bool {
    let cleaned = normalize(text);
    if cleaned.is_empty() {
        return false;
    }

    let words: Vec<&str> = cleaned.split(' ').collect();

    AFFIRMATIONS.iter().any(|keyword| {
        cleaned == *keyword
            || words.contains(keyword)
            || (keyword.contains(' ') && cleaned.contains(keyword))
    })
}

/// A shop listing location built from a search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLink {
    params: Vec<(&'static str, String)>,
}

impl ShopLink {
    /// Build the link for a filter.
    ///
    /// `q` is the product type, or `default_search_term` when none is set.
    /// The remaining slots follow in a fixed order and only when set.
    pub fn from_filter(filter: &SearchFilter, default_search_term: &str) -> Self {
        let mut params = vec![(
            "q",
            filter
                .product_type
                .clone()
                .unwrap_or_else(|| default_search_term.to_string()),
        )];

        if let Some(category) = &filter.category {
            params.push(("category", category.clone()));
        }
        if let Some(max_price) = filter.price_cap() {
            params.push(("maxPrice", max_price.to_string()));
        }
        if let Some(gender) = &filter.gender {
            params.push(("gender", gender.clone()));
        }
        if let Some(size) = &filter.size {
            params.push(("size", size.clone()));
        }
        if let Some(style) = &filter.style {
            params.push(("style", style.clone()));
        }

        Self { params }
    }

    pub fn path(&self) -> &'static str {
        SHOP_PATH
    }

    /// Query parameters in link order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of one query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for ShopLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Slot values come from fixed vocabularies and need no escaping.
        f.write_str(SHOP_PATH)?;
        for (index, (key, value)) in self.params.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", separator, key, value)?;
        }
        Ok(())
    }
}
