//! Chart revision comparison pipeline.
//!
//! Parses two chart revisions, selects the comparison-eligible tracks for a
//! naming profile, runs the jitter-tolerant diff from `chart-diff` on each,
//! and renders one PNG per track that meaningfully changed. The caller gets
//! back the list of changed tracks with their image paths.
//!
//! A comparison is fully isolated: all state lives on the stack of one
//! [`run_comparison`] call, and artifact filenames embed the caller's
//! session identifier so concurrent comparisons cannot collide.

pub mod compare;
mod font;
pub mod render;

pub use compare::{run_comparison, CompareParams, TrackChange};
pub use render::{render_track_changes, RenderRequest};

/// Errors from the comparison pipeline.
///
/// Parse failures are not represented here: an unreadable chart downgrades
/// the whole comparison to an empty result (logged as a warning). A failed
/// artifact write does surface, because a silently missing image would be
/// read as "no changes".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write change image: {0}")]
    ImageWrite(#[from] image::ImageError),
    #[error("output directory error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
