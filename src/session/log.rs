//! Conversation log — ordered, append-only turn storage.
//!
//! Turn ids come from a session-monotonic counter: unique, strictly
//! increasing in creation order, and never reused, including across resets.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Monotonic turn identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId(u64);

impl TurnId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Agent,
}

/// One authored unit of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub author: Author,
    pub text: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
}

#[derive(Debug, Clone)]
pub struct ConversationLog {
    turns: Vec<Turn>,
    next_id: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a turn, assigning the next id.
    pub fn append(&mut self, author: Author, text: impl Into<String>) -> TurnId {
        let id = TurnId(self.next_id);
        self.next_id += 1;
        self.turns.push(Turn {
            id,
            author,
            text: text.into(),
            created_at: Utc::now().timestamp_millis(),
        });
        id
    }

    /// Replace the whole log with a single fresh agent greeting. The id
    /// counter keeps running, so ids are never reused across resets.
    pub fn reset(&mut self, persona_name: &str) -> TurnId {
        self.turns.clear();
        self.append(
            Author::Agent,
            format!("System reloaded. Hello, I am {}.", persona_name),
        )
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
