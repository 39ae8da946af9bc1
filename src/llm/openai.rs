//! OpenAI-compatible chat completion client — the engine's Completion Gateway.
//!
//! Exactly one HTTP POST per accepted user turn: no retry, no backoff, and
//! no client-side timeout. Whatever deadline the transport or the remote
//! endpoint imposes is the only one in effect.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config;
use crate::llm::gateway_config::GatewayConfig;
use crate::llm::provider::{CompletionBackend, GatewayError};

/// Fallback for non-success responses whose body carries no error message.
pub const API_ERROR_FALLBACK: &str = "Failed to fetch response from OpenAI";

// ── Wire Types ─────────────────────────────────────────

/// Chat role on the completion wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

// ── Gateway ────────────────────────────────────────────

pub struct CompletionGateway {
    client: Client,
    config: GatewayConfig,
}

impl CompletionGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Use a caller-supplied HTTP client (proxy setup, test isolation).
    pub fn with_client(config: GatewayConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionBackend for CompletionGateway {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        session_key: Option<&str>,
    ) -> Result<String, GatewayError> {
        // Credential is a precondition, resolved before any I/O: the
        // session-supplied key wins, then the configured env var.
        let api_key = config::resolve_api_key(
            &session_key.map(str::to_owned),
            &self.config.api_key_env,
        )
        .ok_or(GatewayError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %body.model,
            messages = body.messages.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| API_ERROR_FALLBACK.to_string());
            warn!(status, "completion request rejected: {}", message);
            return Err(GatewayError::Api { status, message });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GatewayError::MalformedResponse("response carried no message content".to_string())
            })
    }
}
