//! UMH Core - Record model shared by every other UMH crate
//!
//! This crate defines:
//!
//! - `TableRecord` - Capability set the table engine works against
//!   (stable id, searchable text, status, sortable fields)
//! - `ContentRecord` / `AccountRecord` - The two concrete record variants
//! - `Record` - Tagged union over both variants for the rendering layer
//! - `FieldValue` - Comparable value extracted from a sortable field
//! - `UmhError` / `Result` - Error type shared across the workspace

mod account;
mod content;
mod error;
mod record;
mod types;

pub use account::*;
pub use content::*;
pub use error::*;
pub use record::*;
pub use types::*;
