//! Assistant engine configuration

use serde::Deserialize;
use std::sync::Arc;

use super::error::ValidationError;
use crate::domain::assistant::{
    AssistantPipeline, RuleBasedEntityExtractor, RuleBasedIntentClassifier,
    DEFAULT_CHEAP_PRICE_THRESHOLD, DEFAULT_SEARCH_TERM,
};

/// Tunables for the rule-based engine
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Price cap applied when a shopper says "cheap" without a number
    #[serde(default = "default_cheap_price_threshold")]
    pub cheap_price_threshold: u64,

    /// Search term for shop links when no product was named
    #[serde(default = "default_search_term")]
    pub default_search_term: String,
}

impl AssistantConfig {
    /// Build the pipeline these settings describe
    pub fn pipeline(&self) -> AssistantPipeline {
        AssistantPipeline::new(
            Arc::new(RuleBasedIntentClassifier),
            Arc::new(
                RuleBasedEntityExtractor::new()
                    .with_cheap_price_threshold(self.cheap_price_threshold),
            ),
            self.default_search_term.trim(),
        )
    }

    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cheap_price_threshold == 0 {
            return Err(ValidationError::InvalidCheapPriceThreshold);
        }
        if self.default_search_term.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultSearchTerm);
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            cheap_price_threshold: default_cheap_price_threshold(),
            default_search_term: default_search_term(),
        }
    }
}

fn default_cheap_price_threshold() -> u64 {
    DEFAULT_CHEAP_PRICE_THRESHOLD
}

fn default_search_term() -> String {
    DEFAULT_SEARCH_TERM.to_string()
}
