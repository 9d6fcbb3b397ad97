//! The dataset filter: a pure, stable conjunction over both selectors.

use super::data::Record;
use super::selection::Selection;

/// Narrow `records` to those admitted by both selectors.
///
/// Total over any well-formed input: an unmatched selector yields an empty
/// result, never an error. Input ordering is preserved.
pub fn filter_records(records: &[Record], selection: &Selection) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            selection.platform.admits(&record.platform)
                && selection.category.admits(&record.category)
        })
        .cloned()
        .collect()
}
