//! Session Context Entity
//!
//! The slot state owned by exactly one conversation. Created when the
//! chat panel opens, folded once per processed utterance, cleared on an
//! explicit reset and discarded when the panel goes away.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::slots::{SearchFilter, SlotSet};

/// Per-conversation slot state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: SessionId,
    pub slots: SlotSet,
    pub turn_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionContext {
    /// Create an all-null context for a session
    pub fn new(session_id: SessionId) -> Self {
        let now = Timestamp::now();

        Self {
            session_id,
            slots: SlotSet::new(),
            turn_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fold one turn's extraction into the session slots
    pub fn apply(&mut self, extracted: &SlotSet) {
        self.slots.merge_from(extracted);
        self.turn_count = self.turn_count.saturating_add(1);
        self.updated_at = Timestamp::now();
    }

    /// Forget every slot, keeping the session identity
    pub fn reset(&mut self) {
        self.slots.clear();
        self.updated_at = Timestamp::now();
    }

    /// Time between opening the session and its last change
    pub fn active_for(&self) -> Duration {
        self.updated_at.duration_since(&self.created_at)
    }

    /// Snapshot the current slots as a search filter
    pub fn filter(&self) -> SearchFilter {
        SearchFilter::from(&self.slots)
    }
}
