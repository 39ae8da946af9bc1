//! Conversation controller — one outstanding completion per session.
//!
//! Orchestrates a submission end to end: record the user turn, interpret
//! directives, compose the prompt, call the backend once, record the reply.
//! The state lock is released while the request is in flight, so reads and
//! resets stay responsive; the Idle/AwaitingReply gate is what keeps a
//! second submission out.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::directive::{self, Directive};
use crate::llm::{CompletionBackend, CompletionGateway, GatewayConfig};
use crate::persona::Persona;
use crate::prompt;

use super::log::{Turn, TurnId};
use super::state::{SessionState, SessionStatus};

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank or whitespace-only input.
    EmptyMessage,
    /// A completion is already outstanding. Nothing is queued.
    Busy,
}

/// What an accepted submission appended and applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyOutcome {
    pub user_turn: TurnId,
    pub agent_turn: TurnId,
    /// Directive applied to the persona before the completion call, if any.
    pub directive: Option<Directive>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Rejected(RejectReason),
    Replied(ReplyOutcome),
}

impl Submission {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Submission::Rejected(_))
    }
}

pub struct ChatSession {
    state: Mutex<SessionState>,
    backend: Arc<dyn CompletionBackend>,
}

impl ChatSession {
    pub fn new(persona: Persona, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            state: Mutex::new(SessionState::new(persona)),
            backend,
        }
    }

    /// Session wired to the HTTP gateway described by `config`.
    pub fn from_config(persona: Persona, config: GatewayConfig) -> Self {
        Self::new(persona, Arc::new(CompletionGateway::new(config)))
    }

    pub async fn id(&self) -> Uuid {
        self.state.lock().await.id()
    }

    /// Snapshot of the current persona.
    pub async fn persona(&self) -> Persona {
        self.state.lock().await.persona().clone()
    }

    /// Snapshot of the conversation log.
    pub async fn history(&self) -> Vec<Turn> {
        self.state.lock().await.log().turns().to_vec()
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.lock().await.status()
    }

    /// Wholesale persona replacement ("last write wins").
    pub async fn replace_persona(&self, persona: Persona) {
        self.state.lock().await.replace_persona(persona);
    }

    /// Submit one user message. Accepted submissions always grow the log by
    /// exactly two turns: the user turn, then the agent reply (the generated
    /// text, or an error formatted as `[System Error]: <message>`).
    pub async fn submit(&self, text: &str) -> Submission {
        if text.trim().is_empty() {
            return Submission::Rejected(RejectReason::EmptyMessage);
        }

        let (user_turn, applied, persona, prior) = {
            let mut state = self.state.lock().await;
            if !state.status().is_idle() {
                debug!("submission rejected: a reply is already in flight");
                return Submission::Rejected(RejectReason::Busy);
            }

            // Prompt composition uses the turns as they stood before this
            // submission; the new text enters the payload as the final
            // user message, not via the log.
            let prior = state.log().turns().to_vec();
            let user_turn = state.record_user_turn(text);

            let applied = directive::parse(text);
            if let Some(ref directive) = applied {
                debug!(?directive, "applying chat directive");
                state.apply_directive(directive);
            }

            state.begin_await(user_turn);
            (user_turn, applied, state.persona().clone(), prior)
        };

        let messages = prompt::compose(&persona, &prior, text);
        let reply = self
            .backend
            .complete(messages, persona.api_key.as_deref())
            .await;

        let reply_text = match reply {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "completion failed");
                format!("[System Error]: {}", err)
            }
        };

        let mut state = self.state.lock().await;
        let agent_turn = state.record_agent_turn(&reply_text);
        state.finish_await();

        Submission::Replied(ReplyOutcome {
            user_turn,
            agent_turn,
            directive: applied,
        })
    }

    /// Replace the log with the single reload greeting for the current
    /// persona. Allowed at any time; a reply still in flight appends after
    /// the reset.
    pub async fn reset(&self) -> TurnId {
        let mut state = self.state.lock().await;
        let id = state.reset_log();
        debug!(turn = id.value(), "conversation reset");
        id
    }
}
