//! Admin dashboard module
//!
//! Owns the content and account tables, tracks the active tab and applies
//! intents coming from the rendering surface.

mod intent;
mod state;


pub use intent::*;
pub use state::*;
