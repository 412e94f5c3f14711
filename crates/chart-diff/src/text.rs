use crate::event::TextEvent;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel rendered for a side that has no text at a given tick.
pub const NO_EVENT: &str = "[No Event]";

/// A text difference at one exact tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiffRecord {
    pub tick: u64,
    pub before: String,
    pub after: String,
}

/// Diff two tracks' text events tick-for-tick.
///
/// Text gets no clustering and no shift suppression: a re-timed lyric shows
/// up as two records, each against the [`NO_EVENT`] sentinel. Events sharing
/// a tick collapse last-wins before comparison.
pub fn diff_text_events(old: &[TextEvent], new: &[TextEvent]) -> Vec<TextDiffRecord> {
    let old_map: BTreeMap<u64, &str> = old.iter().map(|e| (e.tick, e.text.as_str())).collect();
    let new_map: BTreeMap<u64, &str> = new.iter().map(|e| (e.tick, e.text.as_str())).collect();

    let all_ticks: BTreeSet<u64> = old_map.keys().chain(new_map.keys()).copied().collect();

    all_ticks
        .into_iter()
        .filter_map(|tick| {
            let before = old_map.get(&tick).copied().unwrap_or(NO_EVENT);
            let after = new_map.get(&tick).copied().unwrap_or(NO_EVENT);
            (before != after).then(|| TextDiffRecord {
                tick,
                before: before.to_string(),
                after: after.to_string(),
            })
        })
        .collect()
}
