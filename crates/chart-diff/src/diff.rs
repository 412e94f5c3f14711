use crate::event::NoteEvent;
use crate::extract::NoteBuckets;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Events removed and added at one cluster tick, after shift suppression.
///
/// Both sides may be nonempty at once: a substituted note shows up as one
/// removal and one addition at the same tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub tick: u64,
    pub removed: BTreeSet<NoteEvent>,
    pub added: BTreeSet<NoteEvent>,
}

/// Diff two clustered timelines, suppressing differences that are pure
/// re-timing.
///
/// For every tick in the ascending union of both sides whose event sets
/// differ, nearby ticks within `threshold` are scanned (ascending, first
/// match wins): if the old events reappear verbatim as some neighbor's new
/// events, or vice versa, the tick is treated as a shifted pattern and
/// dropped. Two empty sets compare as a match here, which is what suppresses
/// the far endpoint of a pure shift: the tick present on only one side
/// pairs with the nearby tick present on only the other.
///
/// Quadratic over distinct cluster ticks per track, which is fine at chart
/// scale (low thousands of events).
pub fn diff_clusters(old: &NoteBuckets, new: &NoteBuckets, threshold: u64) -> Vec<DiffRecord> {
    let empty = BTreeSet::new();
    let all_ticks: BTreeSet<u64> = old.keys().chain(new.keys()).copied().collect();
    let mut records = Vec::new();

    for &tick in &all_ticks {
        let before = old.get(&tick).unwrap_or(&empty);
        let after = new.get(&tick).unwrap_or(&empty);
        if before == after {
            continue;
        }

        let shifted = all_ticks.iter().copied().any(|other| {
            other != tick && tick.abs_diff(other) <= threshold && {
                let other_before = old.get(&other).unwrap_or(&empty);
                let other_after = new.get(&other).unwrap_or(&empty);
                before == other_after || after == other_before
            }
        });
        if shifted {
            continue;
        }

        records.push(DiffRecord {
            tick,
            removed: before.difference(after).copied().collect(),
            added: after.difference(before).copied().collect(),
        });
    }

    records
}
