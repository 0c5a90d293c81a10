//! Record capability trait and the tagged record union

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::{AccountRecord, ContentRecord, FieldValue, Result, UmhError};

/// Which collection a record belongs to (one admin tab per kind)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[default]
    Content,
    Account,
}

impl RecordKind {
    /// Get the display label for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Content => "Content",
            Self::Account => "Accounts",
        }
    }

    /// Noun used in single-record prompts
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Content => "movie",
            Self::Account => "user",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Content, Self::Account]
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" | "movies" | "movie" => Ok(Self::Content),
            "accounts" | "account" | "users" | "user" => Ok(Self::Account),
            other => Err(UmhError::UnknownTab(other.to_string())),
        }
    }
}

/// Capabilities the table engine needs from a record.
///
/// Every record has a stable id, a fixed set of searchable text fields, a
/// status that bulk actions can transition, and a set of sortable fields.
pub trait TableRecord: Clone + Debug {
    /// Sortable columns of this record variant
    type Field: Copy + Eq + Debug + Display + FromStr<Err = UmhError>;
    /// Status values bulk actions can assign
    type Status: Copy + Eq + Debug + Display + FromStr<Err = UmhError>;

    const KIND: RecordKind;

    /// Identifier, unique within the collection for the record's lifetime
    fn id(&self) -> &str;

    /// Text fields the search box matches against
    fn search_fields(&self) -> [&str; 3];

    /// Value of a sortable field, normalized for comparison
    fn sort_value(&self, field: Self::Field) -> FieldValue;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Whether any searchable field contains `lower_query`.
    ///
    /// The query must already be lowercased.
    fn matches_query(&self, lower_query: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(lower_query))
    }
}

/// A record of either variant, as handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Content(ContentRecord),
    Account(AccountRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Content(_) => RecordKind::Content,
            Record::Account(_) => RecordKind::Account,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Content(r) => r.id(),
            Record::Account(r) => r.id(),
        }
    }

    pub fn search_fields(&self) -> [&str; 3] {
        match self {
            Record::Content(r) => r.search_fields(),
            Record::Account(r) => r.search_fields(),
        }
    }

    /// Status rendered as its label
    pub fn status_label(&self) -> &'static str {
        match self {
            Record::Content(r) => r.status.label(),
            Record::Account(r) => r.status.label(),
        }
    }
}

impl From<ContentRecord> for Record {
    fn from(record: ContentRecord) -> Self {
        Record::Content(record)
    }
}

impl From<AccountRecord> for Record {
    fn from(record: AccountRecord) -> Self {
        Record::Account(record)
    }
}
