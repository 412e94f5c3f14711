//! Note chart diffing with timing-jitter suppression.
//!
//! Compares two revisions of a tick-based multi-track chart (standard MIDI
//! container) and reports which content actually changed. Events are bucketed
//! by absolute tick, nearby ticks are merged into clusters to absorb
//! re-quantization jitter, and apparent differences that match content found
//! within the tolerance radius are discarded as pure re-timing.
//!
//! # Example
//!
//! ```
//! use chart_diff::{cluster_events, diff_clusters, NoteEvent, NoteKind};
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! let event = NoteEvent { note: 60, kind: NoteKind::On, velocity: 100 };
//! let old: BTreeMap<u64, BTreeSet<NoteEvent>> =
//!     [(100, BTreeSet::from([event]))].into_iter().collect();
//! let new: BTreeMap<u64, BTreeSet<NoteEvent>> =
//!     [(103, BTreeSet::from([event]))].into_iter().collect();
//!
//! // A 3-tick nudge within a 10-tick tolerance is not a change.
//! let diffs = diff_clusters(&cluster_events(&old, 10), &cluster_events(&new, 10), 10);
//! assert!(diffs.is_empty());
//! ```

pub mod cluster;
pub mod diff;
pub mod event;
pub mod extract;
pub mod names;
pub mod profile;
pub mod text;

pub use cluster::cluster_events;
pub use diff::{diff_clusters, DiffRecord};
pub use event::{NoteEvent, NoteKind, TextEvent};
pub use extract::{extract_timeline, named_tracks, parse_chart, NoteBuckets, TrackTimeline};
pub use names::note_name;
pub use profile::{ChartProfile, TrackKind};
pub use text::{diff_text_events, TextDiffRecord, NO_EVENT};

/// Errors from chart parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("chart parse error: {0}")]
    ChartParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
