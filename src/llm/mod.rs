//! LLM boundary: backend trait, OpenAI-compatible gateway, and its config.

pub mod gateway_config;
pub mod openai;
pub mod provider;

pub use gateway_config::{default_config_path, load_config, save_config, GatewayConfig};
pub use openai::{ChatCompletionRequest, ChatMessage, CompletionGateway, Role, API_ERROR_FALLBACK};
pub use provider::{CompletionBackend, GatewayError};
