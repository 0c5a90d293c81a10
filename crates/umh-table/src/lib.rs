//! UMH Table - In-memory table view engine
//!
//! Turns a record collection into the page of rows an admin table renders:
//!
//! ```text
//! records -> filter (search text) -> sort (column, direction) -> paginate -> rows
//! ```
//!
//! Selection and mutations (bulk status change, delete, edit) act on record
//! ids, independent of the current view order. Views are recomputed on every
//! read; collections are small enough that nothing is cached.

mod confirm;
mod engine;
mod filter;
mod pagination;
mod selection;
mod sort;
mod view;

pub use confirm::{Confirm, DeleteOutcome};
pub use engine::TableViewEngine;
pub use filter::filter_records;
pub use pagination::{paginate, Pagination, DEFAULT_PAGE_SIZE};
pub use selection::SelectionSet;
pub use sort::{sort_records, SortDirection, SortSpec};
pub use view::TableView;
