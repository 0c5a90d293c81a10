//! Edit forms
//!
//! A form is captured from an existing record, edited field by field with
//! validation, then merged back onto the record it came from.

mod fields;


pub use fields::*;
