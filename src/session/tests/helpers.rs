use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::llm::{ChatMessage, CompletionBackend, GatewayError};
use crate::session::{ReplyOutcome, Submission};

// ── Scripted Backend ────────────────────────────────────────

/// Backend that replays a scripted list of results and records every call,
/// so tests can assert on the exact payload the controller composed.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
    keys: Mutex<Vec<Option<String>>>,
}

impl ScriptedBackend {
    pub fn with_replies(replies: Vec<Result<String, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            keys: Mutex::new(Vec::new()),
        })
    }

    /// Backend scripted with a single successful reply.
    pub fn single(reply: &str) -> Arc<Self> {
        Self::with_replies(vec![Ok(reply.to_string())])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Message list of the most recent call.
    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Session credential of the most recent call.
    pub fn last_key(&self) -> Option<String> {
        self.keys.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        session_key: Option<&str>,
    ) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(messages);
        self.keys
            .lock()
            .unwrap()
            .push(session_key.map(str::to_owned));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Acknowledged.".to_string()))
    }
}

// ── Gated Backend ───────────────────────────────────────────

/// Backend that parks every call on a gate until the test releases it,
/// holding the session in its awaiting-reply state for as long as needed.
pub struct GatedBackend {
    gate: Semaphore,
    calls: AtomicUsize,
    reply: String,
}

impl GatedBackend {
    pub fn holding(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
            reply: reply.to_string(),
        })
    }

    /// Let exactly one parked call through.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for GatedBackend {
    async fn complete(
        &self,
        _messages: Vec<ChatMessage>,
        _session_key: Option<&str>,
    ) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self.gate.acquire().await.expect("gate closed");
        // Consume the permit so each release admits exactly one call.
        permit.forget();
        Ok(self.reply.clone())
    }
}

// ── Assertions ──────────────────────────────────────────────

/// Unwrap an accepted submission, panicking with the rejection otherwise.
pub fn expect_reply(submission: Submission) -> ReplyOutcome {
    match submission {
        Submission::Replied(outcome) => outcome,
        Submission::Rejected(reason) => panic!("expected a reply, got rejection: {:?}", reason),
    }
}
