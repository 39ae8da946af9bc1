//! Session layer: conversation log, explicit state, and the controller.

pub mod controller;
pub mod log;
pub mod state;

pub use controller::{ChatSession, RejectReason, ReplyOutcome, Submission};
pub use log::{Author, ConversationLog, Turn, TurnId};
pub use state::{SessionState, SessionStatus};

#[cfg(test)]
mod tests;
