//! UMH Assistant - AI cinema concierge
//!
//! This crate provides the chat widget's backend:
//! - `ChatProvider` trait with Gemini and offline implementations
//! - `AssistantContext` owning the lazily created chat session
//! - `Conversation` holding the widget's message list and loading gate
//! - The concierge system instruction built from the catalog

mod context;
mod conversation;
mod error;
mod gemini;
mod offline;
mod prompt;
mod provider;

pub use context::*;
pub use conversation::*;
pub use error::*;
pub use gemini::*;
pub use offline::*;
pub use prompt::*;
pub use provider::*;
