//! Search filter stage

use umh_core::TableRecord;

/// Keep records whose searchable fields contain `query`, ignoring case.
///
/// An empty query keeps everything. Input order is preserved.
pub fn filter_records<'a, R: TableRecord>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let lower_query = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_query(&lower_query))
        .collect()
}
