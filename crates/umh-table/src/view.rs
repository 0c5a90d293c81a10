//! Derived view handed to the rendering layer

use umh_core::TableRecord;

use crate::{SelectionSet, SortSpec};

/// One rendered page of a table plus the state its chrome needs
#[derive(Debug)]
pub struct TableView<'a, R: TableRecord> {
    /// Rows on the current page, in display order
    pub rows: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Rows matching the search, across all pages
    pub total_matches: usize,
    /// Rows in the collection before filtering
    pub total_records: usize,
    pub query: &'a str,
    pub sort: Option<SortSpec<R::Field>>,
    pub selection: &'a SelectionSet,
}

impl<'a, R: TableRecord> TableView<'a, R> {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Header checkbox state: every row on this page is selected
    pub fn all_visible_selected(&self) -> bool {
        self.selection.contains_all(self.rows.iter().map(|row| row.id()))
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Showing 21 to 40 of 125 results"
    pub fn range_label(&self) -> String {
        if self.rows.is_empty() {
            return format!("Showing 0 of {} results", self.total_matches);
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        format!(
            "Showing {} to {} of {} results",
            first,
            first + self.rows.len() - 1,
            self.total_matches
        )
    }
}
