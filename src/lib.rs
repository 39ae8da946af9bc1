//! Session core for a holographic digital companion.
//!
//! The engine owns the persona, the conversation log, in-chat directive
//! parsing, prompt composition, and the OpenAI-compatible completion call.
//! Rendering the avatar and the chat transcript is the host's job; this
//! crate only hands it the state to draw.
//!
//! ```no_run
//! use hologram_engine::{ChatSession, GatewayConfig, Persona, ToneStyle};
//!
//! # async fn demo() {
//! let persona = Persona::default()
//!     .with_name("Aria")
//!     .with_tone(ToneStyle::Sarcastic);
//! let session = ChatSession::from_config(persona, GatewayConfig::default());
//!
//! session.submit("change color to teal, what can you do?").await;
//! # }
//! ```

pub mod config;
pub mod directive;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod session;

pub use directive::Directive;
pub use llm::{
    ChatMessage, CompletionBackend, CompletionGateway, GatewayConfig, GatewayError, Role,
};
pub use persona::{AvatarConfig, AvatarModel, AvatarShape, ColorValue, Persona, ToneStyle};
pub use session::{
    Author, ChatSession, ConversationLog, RejectReason, ReplyOutcome, SessionState, SessionStatus,
    Submission, Turn, TurnId,
};
