//! Shop Assistant - Conversational product filtering
//!
//! A rule-based engine that turns free-text shopper messages into a
//! structured search filter across multiple turns: intent classification,
//! slot extraction, last-mention-wins context merging and templated replies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
