use super::CropRecord;

/// Rows the Dataset Explorer shows for a query.
pub const DATASET_PREVIEW_LIMIT: usize = 15;

/// Case-insensitive substring match against the crop or the state label.
///
/// An empty query matches every record.
pub fn matches_search(record: &CropRecord, query: &str) -> bool {
    matches_lowered(record, &query.to_lowercase())
}

/// First `limit` records matching `query`, in dataset order.
pub fn filter_records<'a>(
    records: &'a [CropRecord],
    query: &str,
    limit: usize,
) -> Vec<&'a CropRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowered(record, &needle))
        .take(limit)
        .collect()
}

/// Shared predicate; `needle` must already be lowercased.
fn matches_lowered(record: &CropRecord, needle: &str) -> bool {
    contains_folded(record.crop.label(), needle) || contains_folded(record.state.label(), needle)
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
