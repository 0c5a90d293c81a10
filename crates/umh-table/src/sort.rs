//! Column sorting for the table engine
//!
//! Single-column, stable sort with numeric and timestamp awareness delegated
//! to `FieldValue::compare`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use umh_core::TableRecord;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The column and direction a table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Next sort after the user clicks the header of `field`.
    ///
    /// Clicking the column currently sorted ascending flips it to descending.
    /// Any other click sorts `field` ascending.
    pub fn toggled(current: Option<Self>, field: F) -> Self {
        match current {
            Some(spec) if spec.field == field && spec.direction == SortDirection::Ascending => {
                Self::descending(field)
            }
            _ => Self::ascending(field),
        }
    }
}

impl<F: std::fmt::Display> std::fmt::Display for SortSpec<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.direction.label())
    }
}

/// Order rows by the spec's field. `None` leaves the order untouched.
///
/// The sort is stable and descending reverses the comparator, so rows with
/// equal keys keep their input order in both directions.
pub fn sort_records<'a, R: TableRecord>(
    rows: Vec<&'a R>,
    spec: Option<SortSpec<R::Field>>,
) -> Vec<&'a R> {
    let Some(spec) = spec else {
        return rows;
    };

    // Extract each key once rather than on every comparison
    let mut keyed: Vec<_> = rows
        .into_iter()
        .map(|row| (row.sort_value(spec.field), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| spec.direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, row)| row).collect()
}
