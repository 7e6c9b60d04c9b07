//! Slot sets and the search filter derived from them.
//!
//! A freshly extracted [`SlotSet`] only carries what one utterance
//! mentioned. The session copy accumulates turns with last-mention-wins
//! semantics; [`SearchFilter`] is a snapshot of it handed to search.

use serde::{Deserialize, Serialize};

/// Six independently optional shopping slots.
///
/// `None` always means "not mentioned", never "unchanged" or "cleared".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSet {
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<u64>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
}

impl SlotSet {
    /// All-null slot set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_type(mut self, value: impl Into<String>) -> Self {
        self.product_type = Some(value.into());
        self
    }

    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn with_max_price(mut self, value: u64) -> Self {
        self.max_price = Some(value);
        self
    }

    pub fn with_gender(mut self, value: impl Into<String>) -> Self {
        self.gender = Some(value.into());
        self
    }

    pub fn with_size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(value.into());
        self
    }

    pub fn with_style(mut self, value: impl Into<String>) -> Self {
        self.style = Some(value.into());
        self
    }

    /// True if no slot is set.
    pub fn is_empty(&self) -> bool {
        self.product_type.is_none()
            && self.category.is_none()
            && self.max_price.is_none()
            && self.gender.is_none()
            && self.size.is_none()
            && self.style.is_none()
    }

    /// The price cap to act on. A zero cap reads as no cap.
    pub fn price_cap(&self) -> Option<u64> {
        self.max_price.filter(|price| *price > 0)
    }

    /// Number of slots that carry a value.
    pub fn filled_count(&self) -> usize {
        [
            self.product_type.is_some(),
            self.category.is_some(),
            self.max_price.is_some(),
            self.gender.is_some(),
            self.size.is_some(),
            self.style.is_some(),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count()
    }

    /// Overlay every non-null slot of `extracted` onto `self`.
    ///
    /// Slots that `extracted` leaves null keep their current value; a set
    /// slot replaces the old value outright.
    pub fn merge_from(&mut self, extracted: &SlotSet) {
        overlay(&mut self.product_type, &extracted.product_type);
        overlay(&mut self.category, &extracted.category);
        overlay(&mut self.max_price, &extracted.max_price);
        overlay(&mut self.gender, &extracted.gender);
        overlay(&mut self.size, &extracted.size);
        overlay(&mut self.style, &extracted.style);
    }

    /// Clear every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn overlay<T: Clone>(current: &mut Option<T>, incoming: &Option<T>) {
    if let Some(value) = incoming {
        *current = Some(value.clone());
    }
}

/// Snapshot of the session slots at the end of a turn.
///
/// Always derived from a [`SlotSet`]; never edited on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<u64>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
}

impl SearchFilter {
    /// True if the filter places no constraint on search.
    ///
    /// An unconstrained filter is a normal result, not an error.
    pub fn is_unconstrained(&self) -> bool {
        self.product_type.is_none()
            && self.category.is_none()
            && self.max_price.is_none()
            && self.gender.is_none()
            && self.size.is_none()
            && self.style.is_none()
    }

    /// See [`SlotSet::price_cap`]
    pub fn price_cap(&self) -> Option<u64> {
        self.max_price.filter(|price| *price > 0)
    }
}

impl From<&SlotSet> for SearchFilter {
    fn from(slots: &SlotSet) -> Self {
        Self {
            product_type: slots.product_type.clone(),
            category: slots.category.clone(),
            max_price: slots.max_price,
            gender: slots.gender.clone(),
            size: slots.size.clone(),
            style: slots.style.clone(),
        }
    }
}
