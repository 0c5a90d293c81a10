//! Admin dashboard state and intent dispatch

use serde::Serialize;
use umh_core::{AccountRecord, ContentRecord, Record, RecordKind, Result, TableRecord, UmhError};
use umh_table::{Confirm, TableViewEngine};

use crate::{AdminIntent, IntentOutcome, RecordForm};

/// One row of the rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub record: Record,
    pub selected: bool,
}

/// Everything the rendering surface needs to draw the active table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub tab: RecordKind,
    pub rows: Vec<SnapshotRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub total_records: usize,
    pub query: String,
    /// Rendered sort, e.g. "views DESC"
    pub sort: Option<String>,
    pub selected: usize,
    pub all_visible_selected: bool,
    /// "Showing 21 to 40 of 125 results"
    pub range_label: String,
}

/// Content and account tables behind the admin tabs.
///
/// Each tab keeps its own engine; only the active one receives intents.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    content: TableViewEngine<ContentRecord>,
    accounts: TableViewEngine<AccountRecord>,
    active: RecordKind,
}

impl AdminDashboard {
    pub fn new(content: Vec<ContentRecord>, accounts: Vec<AccountRecord>, page_size: usize) -> Self {
        tracing::info!(
            content = content.len(),
            accounts = accounts.len(),
            page_size,
            "Initializing admin dashboard"
        );
        Self {
            content: TableViewEngine::new(content, page_size),
            accounts: TableViewEngine::new(accounts, page_size),
            active: RecordKind::default(),
        }
    }

    pub fn active_tab(&self) -> RecordKind {
        self.active
    }

    pub fn content(&self) -> &TableViewEngine<ContentRecord> {
        &self.content
    }

    pub fn accounts(&self) -> &TableViewEngine<AccountRecord> {
        &self.accounts
    }

    /// Make `tab` active.
    ///
    /// On an actual change the target table's search, sort and page are reset
    /// and every selection is cleared. Returns whether the tab changed.
    pub fn switch_tab(&mut self, tab: RecordKind) -> bool {
        if tab == self.active {
            return false;
        }

        match tab {
            RecordKind::Content => self.content.reset_view(),
            RecordKind::Account => self.accounts.reset_view(),
        }
        self.content.clear_selection();
        self.accounts.clear_selection();
        self.active = tab;

        tracing::debug!(%tab, "Switched admin tab");
        true
    }

    /// Apply one intent to the active table
    pub fn dispatch(
        &mut self,
        intent: AdminIntent,
        confirm: &mut dyn Confirm,
    ) -> Result<IntentOutcome> {
        tracing::debug!(tab = %self.active, ?intent, "Dispatching admin intent");

        match intent {
            AdminIntent::SwitchTab(tab) => {
                let changed = self.switch_tab(tab);
                Ok(IntentOutcome::TabSwitched { tab, changed })
            }
            AdminIntent::EditRecord(form) => self.apply_form(form),
            intent => match self.active {
                RecordKind::Content => apply_intent(&mut self.content, intent, confirm),
                RecordKind::Account => apply_intent(&mut self.accounts, intent, confirm),
            },
        }
    }

    /// Capture an edit form for `id` on the active tab
    pub fn open_edit(&self, id: &str) -> Result<RecordForm> {
        let record = match self.active {
            RecordKind::Content => self.content.get(id).cloned().map(Record::from),
            RecordKind::Account => self.accounts.get(id).cloned().map(Record::from),
        };
        record
            .map(|record| RecordForm::from_record(&record))
            .ok_or_else(|| UmhError::NotFound(format!("{} {}", self.active.noun(), id)))
    }

    /// Current page of the active tab, ready to render
    pub fn snapshot(&self) -> DashboardSnapshot {
        match self.active {
            RecordKind::Content => snapshot_of(&self.content),
            RecordKind::Account => snapshot_of(&self.accounts),
        }
    }

    fn apply_form(&mut self, form: RecordForm) -> Result<IntentOutcome> {
        if form.kind() != self.active {
            return Err(UmhError::VariantMismatch(format!(
                "{} form submitted while the {} tab is active",
                form.kind(),
                self.active
            )));
        }

        let applied = match form {
            RecordForm::Content(form) => {
                let id = form.id.clone();
                self.content.edit_record(&id, |existing| form.merge(existing))
            }
            RecordForm::Account(form) => {
                let id = form.id.clone();
                self.accounts.edit_record(&id, |existing| form.merge(existing))
            }
        };
        Ok(IntentOutcome::Edited { applied })
    }
}

fn apply_intent<R>(
    engine: &mut TableViewEngine<R>,
    intent: AdminIntent,
    confirm: &mut dyn Confirm,
) -> Result<IntentOutcome>
where
    R: TableRecord,
{
    let outcome = match intent {
        AdminIntent::SetQuery(query) => {
            engine.set_query(query);
            IntentOutcome::QueryChanged {
                matches: engine.total_matches(),
            }
        }
        AdminIntent::SetPage(page) => IntentOutcome::PageChanged {
            page: engine.set_page(page),
        },
        AdminIntent::NextPage => {
            engine.next_page();
            IntentOutcome::PageChanged {
                page: engine.current_page(),
            }
        }
        AdminIntent::PrevPage => {
            engine.prev_page();
            IntentOutcome::PageChanged {
                page: engine.current_page(),
            }
        }
        AdminIntent::ToggleSort(name) => {
            let field: R::Field = name.parse()?;
            IntentOutcome::SortChanged {
                sort: engine.toggle_sort(field).to_string(),
            }
        }
        AdminIntent::ToggleSelect(id) => {
            if engine.get(&id).is_none() {
                return Err(UmhError::NotFound(format!("{} {}", R::KIND.noun(), id)));
            }
            engine.toggle_select(&id);
            IntentOutcome::SelectionChanged {
                selected: engine.selection().len(),
            }
        }
        AdminIntent::SelectAllVisible => {
            engine.select_all_visible();
            IntentOutcome::SelectionChanged {
                selected: engine.selection().len(),
            }
        }
        AdminIntent::ClearSelection => {
            engine.clear_selection();
            IntentOutcome::SelectionChanged { selected: 0 }
        }
        AdminIntent::BulkSetStatus(name) => {
            let status: R::Status = name.parse()?;
            IntentOutcome::StatusChanged {
                changed: engine.bulk_set_status(status),
            }
        }
        AdminIntent::BulkDelete => IntentOutcome::Delete(engine.bulk_delete(confirm)),
        AdminIntent::DeleteRecord(id) => IntentOutcome::Delete(engine.delete_record(&id, confirm)),
        AdminIntent::SwitchTab(_) | AdminIntent::EditRecord(_) => {
            return Err(UmhError::Other(
                "tab and edit intents are handled by the dashboard".to_string(),
            ));
        }
    };
    Ok(outcome)
}

fn snapshot_of<R>(engine: &TableViewEngine<R>) -> DashboardSnapshot
where
    R: TableRecord + Into<Record>,
{
    let view = engine.view();
    DashboardSnapshot {
        tab: R::KIND,
        rows: view
            .rows
            .iter()
            .map(|row| SnapshotRow {
                record: (*row).clone().into(),
                selected: view.is_selected(row.id()),
            })
            .collect(),
        current_page: view.current_page,
        total_pages: view.total_pages,
        total_matches: view.total_matches,
        total_records: view.total_records,
        query: view.query.to_string(),
        sort: view.sort.map(|spec| spec.to_string()),
        selected: view.selection.len(),
        all_visible_selected: view.all_visible_selected(),
        range_label: view.range_label(),
    }
}
