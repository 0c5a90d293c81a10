//! Intents emitted by the rendering surface

use serde::{Deserialize, Serialize};
use umh_core::RecordKind;
use umh_table::DeleteOutcome;

use crate::RecordForm;

/// A user action against the admin dashboard.
///
/// Field and status names are plain strings as the rendering surface sends
/// them; they are validated against the active tab on dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AdminIntent {
    SwitchTab(RecordKind),
    SetQuery(String),
    SetPage(usize),
    NextPage,
    PrevPage,
    ToggleSort(String),
    ToggleSelect(String),
    SelectAllVisible,
    ClearSelection,
    BulkSetStatus(String),
    BulkDelete,
    DeleteRecord(String),
    EditRecord(RecordForm),
}

impl AdminIntent {
    /// Whether this intent can remove records and therefore prompts first
    pub fn is_destructive(&self) -> bool {
        matches!(self, AdminIntent::BulkDelete | AdminIntent::DeleteRecord(_))
    }
}

/// What dispatching an intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// The active tab changed (or was already active)
    TabSwitched { tab: RecordKind, changed: bool },
    /// The search text changed and the page went back to 1
    QueryChanged { matches: usize },
    /// The page after clamping
    PageChanged { page: usize },
    /// Rendered sort label, e.g. "views DESC"
    SortChanged { sort: String },
    /// Number of selected ids afterwards
    SelectionChanged { selected: usize },
    StatusChanged { changed: usize },
    Delete(DeleteOutcome),
    /// False when the edited record no longer exists
    Edited { applied: bool },
}

impl IntentOutcome {
    /// Short human-readable summary for status lines
    pub fn summary(&self) -> String {
        match self {
            Self::TabSwitched { tab, changed: true } => format!("Switched to {}", tab),
            Self::TabSwitched { tab, changed: false } => format!("Already on {}", tab),
            Self::QueryChanged { matches } => format!("{} matching records", matches),
            Self::PageChanged { page } => format!("Page {}", page),
            Self::SortChanged { sort } => format!("Sorted by {}", sort),
            Self::SelectionChanged { selected } => format!("{} selected", selected),
            Self::StatusChanged { changed } => format!("Updated status of {} records", changed),
            Self::Delete(DeleteOutcome::NothingToDelete) => "Nothing to delete".to_string(),
            Self::Delete(DeleteOutcome::Declined) => "Delete cancelled".to_string(),
            Self::Delete(DeleteOutcome::Deleted(count)) => format!("Deleted {} records", count),
            Self::Edited { applied: true } => "Changes saved".to_string(),
            Self::Edited { applied: false } => "Record no longer exists".to_string(),
        }
    }
}
