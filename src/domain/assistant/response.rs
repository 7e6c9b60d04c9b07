//! Templated replies describing the current session slots.

use super::intent::ShopIntent;
use super::slots::SlotSet;

/// Reply used when the intent cannot be acted on.
pub const CLARIFICATION_PROMPT: &str =
    "I'm not sure what you're looking for. Could you try asking for shoes, hoodies, or a specific activity?";

const DEFAULT_HEAD_NOUN: &str = "items";
const RUNNING_HEAD_NOUN: &str = "shoes";

/// Renders short assistant replies from intent plus merged slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Noun phrase for the current slots, e.g. "stylish women's running shoes".
    ///
    /// Modifiers are style, gendered possessive, then category; the head
    /// noun is the product type or "items". Unset modifiers leave no gap.
    pub fn noun_phrase(&self, slots: &SlotSet) -> String {
        let possessive = match slots.gender.as_deref() {
            Some("men") => Some("men's"),
            Some("women") => Some("women's"),
            _ => None,
        };

        [
            slots.style.as_deref(),
            possessive,
            slots.category.as_deref(),
            Some(slots.product_type.as_deref().unwrap_or(DEFAULT_HEAD_NOUN)),
        ]
        .into_iter()
        .flatten()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Reply for one turn. Total over every intent and slot combination.
    pub fn respond(&self, intent: ShopIntent, slots: &SlotSet) -> String {
        let phrase = self.noun_phrase(slots);

        match intent {
            ShopIntent::ProductSearch => match slots.price_cap() {
                Some(price) => format!("Here are some {} under ₹{}.", phrase, price),
                None => format!("Showing you {}.", phrase),
            },
            ShopIntent::BudgetFilter => match slots.price_cap() {
                Some(price) => format!("Got it! Filtering for {} under ₹{}.", phrase, price),
                None => "I've updated the price filter for you.".to_string(),
            },
            ShopIntent::Recommendation => self.recommendation(slots, &phrase),
            ShopIntent::StylePreference => match slots.style.as_deref() {
                Some(style) => format!("I've found some {} options for you. Check these out!", style),
                None => "I've found some options for you. Check these out!".to_string(),
            },
            ShopIntent::Unknown => CLARIFICATION_PROMPT.to_string(),
        }
    }

    fn recommendation(&self, slots: &SlotSet, phrase: &str) -> String {
        let product = slots.product_type.as_deref();

        match slots.category.as_deref() {
            Some("gym") => format!(
                "For the gym, I recommend these stable and breathable {}.",
                product.unwrap_or(DEFAULT_HEAD_NOUN)
            ),
            Some("running") => format!(
                "These {} offer the best cushioning for your runs.",
                product.unwrap_or(RUNNING_HEAD_NOUN)
            ),
            _ => format!(
                "Based on your request, here are top recommendations for {}.",
                phrase
            ),
        }
    }
}
