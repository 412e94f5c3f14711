use serde::{Deserialize, Serialize};

/// Whether a note transition starts or ends a note.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    On,
    Off,
}

/// A single note transition at some absolute tick.
///
/// Equality of the full `(note, kind, velocity)` triple is the only notion of
/// "same event": a velocity-only edit compares as a real difference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NoteEvent {
    pub note: u8,
    pub kind: NoteKind,
    pub velocity: u8,
}

/// A text or lyric meta event at an absolute tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEvent {
    pub tick: u64,
    pub text: String,
}
