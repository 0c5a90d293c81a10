//! Table view engine
//!
//! Owns one record collection together with its search text, sort, page and
//! selection. Every read recomputes filter -> sort -> paginate from scratch.

use std::collections::HashSet;

use umh_core::TableRecord;

use crate::{
    filter_records, sort_records, Confirm, DeleteOutcome, Pagination, SelectionSet, SortSpec,
    TableView,
};

/// Search, sort, paginate and edit one collection of records
#[derive(Debug, Clone)]
pub struct TableViewEngine<R: TableRecord> {
    records: Vec<R>,
    query: String,
    sort: Option<SortSpec<R::Field>>,
    pagination: Pagination,
    selection: SelectionSet,
}

impl<R: TableRecord> TableViewEngine<R> {
    /// Create an engine over an initial snapshot, in insertion order
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        tracing::debug!(
            kind = %R::KIND,
            records = records.len(),
            page_size,
            "Creating table view engine"
        );
        Self {
            records,
            query: String::new(),
            sort: None,
            pagination: Pagination::new(page_size),
            selection: SelectionSet::new(),
        }
    }

    /// The full collection, in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_spec(&self) -> Option<SortSpec<R::Field>> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Records matching the search text, in insertion order
    pub fn filtered(&self) -> Vec<&R> {
        filter_records(&self.records, &self.query)
    }

    /// Records matching the search text, in display order
    pub fn sorted(&self) -> Vec<&R> {
        sort_records(self.filtered(), self.sort)
    }

    /// Rows on the current page
    pub fn visible(&self) -> Vec<&R> {
        let sorted = self.sorted();
        self.pagination.slice(&sorted).to_vec()
    }

    pub fn total_matches(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.total_matches())
    }

    /// Compute the full view for rendering
    pub fn view(&self) -> TableView<'_, R> {
        let sorted = self.sorted();
        let total_matches = sorted.len();
        let rows = self.pagination.slice(&sorted).to_vec();
        tracing::debug!(
            kind = %R::KIND,
            total_matches,
            page = self.pagination.current_page(),
            rows = rows.len(),
            "Recomputed table view"
        );

        TableView {
            rows,
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(total_matches),
            page_size: self.pagination.page_size(),
            total_matches,
            total_records: self.records.len(),
            query: &self.query,
            sort: self.sort,
            selection: &self.selection,
        }
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    /// Replace the search text and return to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.reset();
    }

    /// Sort by `field`, cycling ascending/descending on repeated clicks.
    ///
    /// The current page is kept.
    pub fn toggle_sort(&mut self, field: R::Field) -> SortSpec<R::Field> {
        let spec = SortSpec::toggled(self.sort, field);
        self.sort = Some(spec);
        spec
    }

    /// Set or clear the sort. The current page is kept.
    pub fn set_sort(&mut self, sort: Option<SortSpec<R::Field>>) {
        self.sort = sort;
    }

    /// Go to `page`, clamped into `[1, total_pages]`. Returns the page landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        let total = self.total_matches();
        self.pagination.go_to(page, total)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_matches();
        self.pagination.go_next(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.go_prev()
    }

    /// Clear search, sort, page and selection (used when this table becomes active)
    pub fn reset_view(&mut self) {
        self.query.clear();
        self.sort = None;
        self.pagination.reset();
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flip selection of `id`. Ids not in the collection are ignored.
    pub fn toggle_select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            tracing::warn!(kind = %R::KIND, id, "Ignoring selection of unknown record");
            return false;
        }
        self.selection.toggle(id)
    }

    /// Select or deselect every row on the current page
    pub fn select_all_visible(&mut self) {
        let visible: Vec<String> = self
            .visible()
            .into_iter()
            .map(|record| record.id().to_string())
            .collect();
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        self.selection.toggle_all(&visible);
    }

    pub fn is_all_visible_selected(&self) -> bool {
        self.selection
            .contains_all(self.visible().into_iter().map(|record| record.id()))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Set `status` on every selected record, then clear the selection.
    ///
    /// Returns the number of records changed.
    pub fn bulk_set_status(&mut self, status: R::Status) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut() {
            if self.selection.contains(record.id()) {
                record.set_status(status);
                changed += 1;
            }
        }
        self.selection.clear();
        self.clamp_page();

        tracing::info!(kind = %R::KIND, %status, changed, "Bulk status change applied");
        changed
    }

    /// Delete every selected record once `confirm` agrees.
    ///
    /// Declining leaves collection and selection untouched. Confirming always
    /// clears the selection.
    pub fn bulk_delete(&mut self, confirm: &mut dyn Confirm) -> DeleteOutcome {
        if self.selection.is_empty() {
            return DeleteOutcome::NothingToDelete;
        }

        let message = format!(
            "Are you sure you want to delete {} items?",
            self.selection.len()
        );
        if !confirm.confirm(&message) {
            tracing::debug!(kind = %R::KIND, "Bulk delete declined");
            return DeleteOutcome::Declined;
        }

        let doomed: HashSet<&str> = self.selection.iter().collect();
        let before = self.records.len();
        self.records.retain(|record| !doomed.contains(record.id()));
        let deleted = before - self.records.len();

        self.selection.clear();
        self.clamp_page();

        tracing::info!(kind = %R::KIND, deleted, "Bulk delete applied");
        DeleteOutcome::Deleted(deleted)
    }

    /// Delete a single record once `confirm` agrees.
    ///
    /// If the record was selected the selection is cleared.
    pub fn delete_record(&mut self, id: &str, confirm: &mut dyn Confirm) -> DeleteOutcome {
        let Some(index) = self.records.iter().position(|record| record.id() == id) else {
            return DeleteOutcome::NothingToDelete;
        };

        let message = format!("Delete this {}?", R::KIND.noun());
        if !confirm.confirm(&message) {
            return DeleteOutcome::Declined;
        }

        self.records.remove(index);
        if self.selection.contains(id) {
            self.selection.clear();
        }
        self.clamp_page();

        tracing::info!(kind = %R::KIND, id, "Record deleted");
        DeleteOutcome::Deleted(1)
    }

    /// Replace the record `id` with the merge produced by `patch`.
    ///
    /// Returns false, leaving the collection alone, when no record has that id
    /// or when the merged record carries a different id.
    pub fn edit_record(&mut self, id: &str, patch: impl FnOnce(&R) -> R) -> bool {
        let Some(slot) = self.records.iter_mut().find(|record| record.id() == id) else {
            tracing::warn!(kind = %R::KIND, id, "Edit target no longer exists");
            return false;
        };

        let merged = patch(&*slot);
        if merged.id() != id {
            tracing::warn!(
                kind = %R::KIND,
                id,
                merged_id = merged.id(),
                "Rejecting edit that changes the record id"
            );
            return false;
        }
        *slot = merged;
        self.clamp_page();

        tracing::info!(kind = %R::KIND, id, "Record updated");
        true
    }

    /// Keep the current page inside the range after the match count shrank
    fn clamp_page(&mut self) {
        let total = self.total_matches();
        if self.pagination.clamp_down(total) {
            tracing::debug!(
                kind = %R::KIND,
                page = self.pagination.current_page(),
                "Clamped page after mutation"
            );
        }
    }
}
