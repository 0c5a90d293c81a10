//! Row selection by record id

use std::collections::HashSet;

/// Set of selected record ids.
///
/// Selection follows identity, not position, so it survives re-sorting and
/// paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True iff `visible` is non-empty and every id in it is selected
    pub fn contains_all<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in visible {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Header checkbox behavior, scoped to the rows on screen.
    ///
    /// If every visible id is already selected they are all deselected,
    /// otherwise all visible ids are added. Ids not in `visible` are untouched.
    pub fn toggle_all<'a>(&mut self, visible: &[&'a str]) {
        if self.contains_all(visible.iter().copied()) {
            for id in visible {
                self.ids.remove(*id);
            }
        } else {
            self.ids.extend(visible.iter().map(|id| id.to_string()));
        }
    }
}
