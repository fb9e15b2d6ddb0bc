//! Stable multi-key record sorting.

use std::cmp::Ordering;

use super::ids::compare_ids;
use crate::models::{ResultRecord, SortKey, SortOrder};

/// A record together with the key `sortlabel` sorts on.
#[derive(Debug, Clone)]
pub struct SortableRecord {
    pub record: ResultRecord,
    pub sort_label: String,
}

/// Sort in place. `None` keeps the input order.
///
/// `slice::sort_by` is stable, and descending order flips the comparator
/// rather than reversing the output, so equal keys keep their input order in
/// both directions.
pub fn sort_records(items: &mut [SortableRecord], key: Option<SortKey>, order: SortOrder) {
    let Some(key) = key else {
        return;
    };

    let compare = |a: &SortableRecord, b: &SortableRecord| -> Ordering {
        match key {
            SortKey::Id => compare_ids(&a.record.id, &b.record.id),
            SortKey::Label => a.record.label.cmp(&b.record.label),
            SortKey::SortLabel => a.sort_label.cmp(&b.sort_label),
        }
    };

    match order {
        SortOrder::Asc => items.sort_by(compare),
        SortOrder::Desc => items.sort_by(|a, b| compare(b, a)),
    }
}
