//! Assistant orchestration - one turn, one session.
//!
//! [`AssistantPipeline`] holds the stateless stages and can be shared by
//! any number of sessions. [`ShoppingAssistant`] pairs a pipeline with the
//! single [`SessionContext`] it owns; never share one across conversations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::SessionId;

use super::extractor::{EntityExtractor, RuleBasedEntityExtractor};
use super::handoff::{is_affirmative, ShopLink, DEFAULT_SEARCH_TERM};
use super::intent::{IntentClassifier, RuleBasedIntentClassifier, ShopIntent};
use super::response::ResponseGenerator;
use super::session::SessionContext;
use super::slots::SearchFilter;

/// Result of processing one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub intent: ShopIntent,
    pub filter: SearchFilter,
    pub response: String,
}

/// Classifier, extractor and responder wired in turn order
#[derive(Clone)]
pub struct AssistantPipeline {
    classifier: Arc<dyn IntentClassifier>,
    extractor: Arc<dyn EntityExtractor>,
    responder: ResponseGenerator,
    default_search_term: String,
}

impl AssistantPipeline {
    /// Create a pipeline from explicit stages
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        extractor: Arc<dyn EntityExtractor>,
        default_search_term: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            extractor,
            responder: ResponseGenerator::new(),
            default_search_term: default_search_term.into(),
        }
    }

    /// Rule-based stages with default thresholds
    pub fn rule_based() -> Self {
        Self::new(
            Arc::new(RuleBasedIntentClassifier),
            Arc::new(RuleBasedEntityExtractor::new()),
            DEFAULT_SEARCH_TERM,
        )
    }

    pub fn default_search_term(&self) -> &str {
        &self.default_search_term
    }

    /// Process one utterance against a session.
    ///
    /// Classification and extraction both read the raw utterance; neither
    /// depends on the other. The reply is rendered from the merged slots.
    pub fn run(&self, context: &mut SessionContext, utterance: &str) -> AssistantReply {
        let intent = self.classifier.classify(utterance);
        let extracted = self.extractor.extract(utterance);

        context.apply(&extracted);

        let filter = context.filter();
        let response = self.responder.respond(intent, &context.slots);

        tracing::debug!(
            session_id = %context.session_id,
            turn = context.turn_count,
            intent = %intent,
            extracted_slots = extracted.filled_count(),
            product_type = ?filter.product_type,
            category = ?filter.category,
            max_price = ?filter.max_price,
            gender = ?filter.gender,
            size = ?filter.size,
            style = ?filter.style,
            "Processed assistant turn"
        );

        AssistantReply {
            intent,
            filter,
            response,
        }
    }

    /// Shop link if `utterance` confirms the session's current filter.
    ///
    /// The reply must read as affirmative, must not mention any slot
    /// itself (that would be a new search turn), and the session must
    /// already constrain the search. The session is not modified.
    pub fn handoff(&self, context: &SessionContext, utterance: &str) -> Option<ShopLink> {
        if context.slots.is_empty() || !is_affirmative(utterance) {
            return None;
        }

        if !self.extractor.extract(utterance).is_empty() {
            return None;
        }

        let link = ShopLink::from_filter(&context.filter(), &self.default_search_term);
        tracing::info!(session_id = %context.session_id, link = %link, "Shop handoff confirmed");
        Some(link)
    }
}

impl Default for AssistantPipeline {
    fn default() -> Self {
        Self::rule_based()
    }
}

impl fmt::Debug for AssistantPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantPipeline")
            .field("default_search_term", &self.default_search_term)
            .finish_non_exhaustive()
    }
}

/// One conversation with the shopping assistant
#[derive(Debug, Clone)]
pub struct ShoppingAssistant {
    pipeline: AssistantPipeline,
    context: SessionContext,
}

impl ShoppingAssistant {
    /// Start a conversation with the rule-based pipeline
    pub fn new() -> Self {
        Self::with_pipeline(AssistantPipeline::rule_based())
    }

    /// Start a conversation with a custom pipeline
    pub fn with_pipeline(pipeline: AssistantPipeline) -> Self {
        Self {
            pipeline,
            context: SessionContext::new(SessionId::new()),
        }
    }

    /// Process one utterance and return intent, filter and reply
    pub fn process_message(&mut self, utterance: &str) -> AssistantReply {
        self.pipeline.run(&mut self.context, utterance)
    }

    /// Forget all slots, e.g. on language change or when the panel reopens
    pub fn reset_context(&mut self) {
        self.context.reset();
        tracing::info!(session_id = %self.context.session_id, "Assistant context reset");
    }

    /// Current filter snapshot
    pub fn filter(&self) -> SearchFilter {
        self.context.filter()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn session_id(&self) -> SessionId {
        self.context.session_id
    }

    /// See [`AssistantPipeline::handoff`]
    pub fn confirm_handoff(&self, utterance: &str) -> Option<ShopLink> {
        self.pipeline.handoff(&self.context, utterance)
    }
}

impl Default for ShoppingAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::SlotSet;

    struct AlwaysStyle;

    impl IntentClassifier for AlwaysStyle {
        fn classify(&self, _message: &str) -> ShopIntent {
            ShopIntent::StylePreference
        }
    }

    mod process_message {
        use super::*;

        #[test]
        fn first_turn_fills_context() {
            let mut assistant = ShoppingAssistant::new();

            let reply = assistant.process_message("Show me running shoes");

            assert_eq!(reply.intent, ShopIntent::ProductSearch);
            assert_eq!(reply.filter.product_type.as_deref(), Some("shoes"));
            assert_eq!(reply.filter.category.as_deref(), Some("running"));
            assert_eq!(reply.response, "Showing you running shoes.");
            assert_eq!(assistant.context().turn_count, 1);
        }

        #[test]
        fn follow_up_keeps_earlier_slots() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("Show me running shoes");

            let reply = assistant.process_message("Under 3000");

            assert_eq!(reply.intent, ShopIntent::BudgetFilter);
            assert_eq!(
                reply.filter,
                SearchFilter::from(
                    &SlotSet::new()
                        .with_product_type("shoes")
                        .with_category("running")
                        .with_max_price(3000)
                )
            );
            assert_eq!(reply.response, "Got it! Filtering for running shoes under ₹3000.");
        }

        #[test]
        fn reply_uses_merged_context_not_just_this_turn() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("Suggest something for gym");

            let reply = assistant.process_message("I want men's hoodies");

            assert_eq!(reply.intent, ShopIntent::ProductSearch);
            assert_eq!(reply.response, "Showing you men's gym hoodie.");
        }

        #[test]
        fn filter_matches_context_after_turn() {
            let mut assistant = ShoppingAssistant::new();
            let reply = assistant.process_message("trendy hoodie size L");

            assert_eq!(reply.filter, assistant.filter());
        }

        #[test]
        fn degenerate_input_never_panics() {
            let mut assistant = ShoppingAssistant::new();

            for input in ["", "   ", "\n\t", "@@@###", "🙂🙂", "asdkjasd"] {
                let reply = assistant.process_message(input);
                assert_eq!(reply.intent, ShopIntent::ProductSearch);
                assert!(reply.filter.is_unconstrained());
                assert_eq!(reply.response, "Showing you items.");
            }
        }

        #[test]
        fn custom_classifier_is_used() {
            let pipeline = AssistantPipeline::new(
                Arc::new(AlwaysStyle),
                Arc::new(RuleBasedEntityExtractor::new()),
                DEFAULT_SEARCH_TERM,
            );
            let mut assistant = ShoppingAssistant::with_pipeline(pipeline);

            let reply = assistant.process_message("sporty shoes");

            assert_eq!(reply.intent, ShopIntent::StylePreference);
            assert_eq!(reply.response, "I've found some sporty options for you. Check these out!");
        }
    }

    mod reset_context {
        use super::*;

        #[test]
        fn clears_slots() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("women's jacket under 4000");

            assistant.reset_context();

            assert!(assistant.filter().is_unconstrained());
            let reply = assistant.process_message("hmm");
            assert_eq!(reply.response, "Showing you items.");
        }

        #[test]
        fn keeps_session_identity() {
            let mut assistant = ShoppingAssistant::new();
            let id = assistant.session_id();
            assistant.reset_context();
            assert_eq!(assistant.session_id(), id);
        }
    }

    mod isolation {
        use super::*;

        #[test]
        fn sessions_sharing_a_pipeline_do_not_share_slots() {
            let pipeline = AssistantPipeline::rule_based();
            let mut first = ShoppingAssistant::with_pipeline(pipeline.clone());
            let mut second = ShoppingAssistant::with_pipeline(pipeline);

            first.process_message("jackets");
            let reply = second.process_message("under 2000");

            assert_eq!(reply.filter.product_type, None);
            assert_eq!(first.filter().max_price, None);
            assert_ne!(first.session_id(), second.session_id());
        }
    }

    mod handoff {
        use super::*;

        #[test]
        fn affirmative_after_search_returns_link() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("Show me running shoes");
            assistant.process_message("Under 3000");

            let link = assistant.confirm_handoff("yes please").unwrap();

            assert_eq!(link.to_string(), "/shop?q=shoes&category=running&maxPrice=3000");
        }

        #[test]
        fn does_not_touch_the_session() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("hoodie");
            let before = assistant.context().clone();

            assistant.confirm_handoff("ok");

            assert_eq!(assistant.context(), &before);
        }

        #[test]
        fn empty_context_has_nothing_to_hand_off() {
            let assistant = ShoppingAssistant::new();
            assert!(assistant.confirm_handoff("yes").is_none());
        }

        #[test]
        fn new_search_phrase_is_not_a_confirmation() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("jackets");

            assert!(assistant.confirm_handoff("show me women's running shoes").is_none());
        }

        #[test]
        fn non_affirmative_is_not_a_confirmation() {
            let mut assistant = ShoppingAssistant::new();
            assistant.process_message("jackets");

            assert!(assistant.confirm_handoff("hmm, not really").is_none());
        }
    }
}
