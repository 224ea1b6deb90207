//! Gap-filling identifier allocation for lection entries.
//!
//! # Responsibility
//! - Pick the id for a new entry from the ids already present in a lection.
//!
//! # Invariants
//! - The returned id is the smallest positive integer not yet in use,
//!   given ids in ascending order.
//! - The returned id is never already present in the input.

use crate::model::entry::EntryId;

/// Returns the first free id for a lection whose ids are `sorted_ids`.
///
/// `sorted_ids` must be ascending. Ids that do not advance the scan
/// (non-positive values, duplicates) are skipped.
pub fn next_entry_id<I>(sorted_ids: I) -> EntryId
where
    I: IntoIterator<Item = EntryId>,
{
    let mut last_id: EntryId = 0;
    for id in sorted_ids {
        if id <= last_id {
            continue;
        }
        if id != last_id + 1 {
            break;
        }
        last_id = id;
    }
    last_id + 1
}
