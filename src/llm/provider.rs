//! Completion backend trait — common interface to text-generation APIs.

use async_trait::async_trait;
use thiserror::Error;

pub use crate::llm::openai::{ChatMessage, Role};

// ── Failure Taxonomy ───────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No usable credential. Detected before any network I/O.
    #[error("Please provide your OpenAI API key in the persona configuration.")]
    MissingCredential,
    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// Non-success status. `message` carries the remote error body's message
    /// verbatim when present, otherwise a generic fallback.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Success status, but the expected content field was absent.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Common interface for completion backends (the HTTP gateway, test doubles).
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Resolve exactly one completion for the composed message list.
    /// `session_key` is the persona-supplied credential, if any; backends
    /// decide how it combines with their own configuration.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        session_key: Option<&str>,
    ) -> Result<String, GatewayError>;
}
