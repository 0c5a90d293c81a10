//! UMH CLI - Terminal front end for the admin console
//!
//! Parses typed commands into dashboard intents, renders the active table
//! with comfy-table and relays chat messages to the concierge.

pub mod command;
pub mod confirm;
pub mod console;
pub mod logging;
pub mod render;

pub use command::{parse_command, Command, HELP};
pub use confirm::LineConfirm;
pub use console::Console;
pub use render::render_snapshot;
