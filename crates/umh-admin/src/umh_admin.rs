//! UMH Admin - Back-office tables for the streaming catalog
//!
//! This crate provides the admin dashboard state:
//! - Content and account tables, one `TableViewEngine` each
//! - Intents emitted by a rendering surface and their outcomes
//! - Edit forms captured from a record and merged back into it
//! - Mock catalog generation used to seed the tables

pub mod catalog;
pub mod dashboard;
pub mod form;

pub use catalog::*;
pub use dashboard::*;
pub use form::*;

pub use umh_table::{Confirm, DeleteOutcome};
