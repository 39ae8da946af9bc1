//! Explicit session state: persona, log, and the request gate in one place.
//!
//! Every field is reachable only through named accessors and transition
//! methods, so there is no shared mutable state hiding behind the API.

use uuid::Uuid;

use crate::directive::Directive;
use crate::persona::Persona;

use super::log::{Author, ConversationLog, TurnId};

/// Two-state request gate. `AwaitingReply` carries the id of the user turn
/// whose completion is outstanding; a future cancellation path would hang
/// off that handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    AwaitingReply { pending: TurnId },
}

impl SessionStatus {
    pub fn is_idle(self) -> bool {
        matches!(self, SessionStatus::Idle)
    }

    /// Id of the outstanding user turn, if any.
    pub fn pending(self) -> Option<TurnId> {
        match self {
            SessionStatus::Idle => None,
            SessionStatus::AwaitingReply { pending } => Some(pending),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    persona: Persona,
    log: ConversationLog,
    status: SessionStatus,
}

impl SessionState {
    pub fn new(persona: Persona) -> Self {
        Self {
            id: Uuid::new_v4(),
            persona,
            log: ConversationLog::new(),
            status: SessionStatus::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Wholesale persona replacement ("last write wins").
    pub fn replace_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    /// Apply a parsed directive as a pure persona update.
    pub fn apply_directive(&mut self, directive: &Directive) {
        match directive {
            Directive::SetColor(color) => {
                self.persona = self.persona.clone().with_avatar_color(color.clone());
            }
        }
    }

    pub fn record_user_turn(&mut self, text: &str) -> TurnId {
        self.log.append(Author::User, text)
    }

    pub fn record_agent_turn(&mut self, text: &str) -> TurnId {
        self.log.append(Author::Agent, text)
    }

    pub fn begin_await(&mut self, pending: TurnId) {
        self.status = SessionStatus::AwaitingReply { pending };
    }

    pub fn finish_await(&mut self) {
        self.status = SessionStatus::Idle;
    }

    /// Reset the log to the single reload greeting for the current persona.
    pub fn reset_log(&mut self) -> TurnId {
        self.log.reset(&self.persona.name)
    }
}
