//! Shopping Assistant Domain Module
//!
//! Turns free-text shopper messages into a structured product filter
//! across multiple turns. Pure domain logic: strings in, plain data out,
//! no I/O.
//!
//! # Architecture
//!
//! - **IntentClassifier**: keyword rules with fixed precedence
//! - **EntityExtractor**: six independent slots per utterance
//! - **SessionContext**: last-mention-wins slot state per conversation
//! - **ResponseGenerator**: templated reply from intent plus merged slots
//! - **ShoppingAssistant**: one conversation, sequencing the stages
//!
//! # Example
//!
//! ```
//! use shop_assistant::domain::assistant::{ShoppingAssistant, ShopIntent};
//!
//! let mut assistant = ShoppingAssistant::new();
//! assistant.process_message("Show me running shoes");
//! let reply = assistant.process_message("Under 3000");
//!
//! assert_eq!(reply.intent, ShopIntent::BudgetFilter);
//! assert_eq!(reply.filter.max_price, Some(3000));
//! assert_eq!(reply.response, "Got it! Filtering for running shoes under ₹3000.");
//! ```

mod extractor;
mod handoff;
mod intent;
mod orchestrator;
mod response;
mod session;
mod slots;

pub use extractor::{EntityExtractor, RuleBasedEntityExtractor, DEFAULT_CHEAP_PRICE_THRESHOLD};
pub use handoff::{is_affirmative, ShopLink, DEFAULT_SEARCH_TERM};
pub use intent::{IntentClassifier, RuleBasedIntentClassifier, ShopIntent};
pub use orchestrator::{AssistantPipeline, AssistantReply, ShoppingAssistant};
pub use response::{ResponseGenerator, CLARIFICATION_PROMPT};
pub use session::SessionContext;
pub use slots::{SearchFilter, SlotSet};
