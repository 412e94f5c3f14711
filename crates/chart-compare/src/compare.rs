use crate::render::{render_track_changes, RenderRequest};
use crate::Result;
use chart_diff::{
    cluster_events, diff_clusters, diff_text_events, extract_timeline, named_tracks, parse_chart,
    ChartProfile, TrackKind,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Tick tolerances for clustering and shift detection.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompareParams {
    /// Clustering window in ticks.
    pub window: u64,
    /// Shift-suppression radius in ticks.
    pub threshold: u64,
}

impl Default for CompareParams {
    fn default() -> Self {
        Self {
            window: 10,
            threshold: 10,
        }
    }
}

/// A track whose content changed, with its rendered change image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackChange {
    pub track: String,
    pub image: PathBuf,
}

/// Compare two chart revisions and render one change image per affected
/// track.
///
/// Tracks are the profile's allow-list intersected with the names present in
/// either revision, visited in the profile's order. A track absent on one
/// side compares against an empty timeline, so it reads as wholly added or
/// removed. Artifacts land in `output_dir` as
/// `{TRACK_NAME}_changes_{session_id}.png`; the session identifier keeps
/// concurrent comparisons from colliding.
///
/// An unreadable revision (or one with no named tracks) downgrades the whole
/// comparison to an empty result with a warning. Artifact write failures
/// propagate.
pub fn run_comparison(
    old_chart: &[u8],
    new_chart: &[u8],
    session_id: &str,
    output_dir: &Path,
    profile: ChartProfile,
    params: &CompareParams,
) -> Result<Vec<TrackChange>> {
    std::fs::create_dir_all(output_dir)?;

    let (old_smf, new_smf) = match (parse_chart(old_chart), parse_chart(new_chart)) {
        (Ok(old), Ok(new)) => (old, new),
        (Err(err), _) | (_, Err(err)) => {
            warn!(%err, "skipping comparison: unreadable chart");
            return Ok(Vec::new());
        }
    };

    let old_tracks = named_tracks(&old_smf);
    let new_tracks = named_tracks(&new_smf);
    if old_tracks.is_empty() || new_tracks.is_empty() {
        warn!("skipping comparison: chart has no named tracks");
        return Ok(Vec::new());
    }

    let mut changes = Vec::new();

    for &name in profile.track_names() {
        if !old_tracks.contains_key(name) && !new_tracks.contains_key(name) {
            continue;
        }

        let old_timeline = old_tracks
            .get(name)
            .map(|t| extract_timeline(t))
            .unwrap_or_default();
        let new_timeline = new_tracks
            .get(name)
            .map(|t| extract_timeline(t))
            .unwrap_or_default();

        let note_diffs = diff_clusters(
            &cluster_events(&old_timeline.notes, params.window),
            &cluster_events(&new_timeline.notes, params.window),
            params.threshold,
        );
        let text_diffs = diff_text_events(&old_timeline.texts, &new_timeline.texts);

        if note_diffs.is_empty() && text_diffs.is_empty() {
            debug!(track = name, "no significant changes");
            continue;
        }

        let file_name = format!("{}_changes_{}.png", name.replace(' ', "_"), session_id);
        let image_path = output_dir.join(file_name);
        let request = RenderRequest {
            track_name: name,
            kind: TrackKind::from_name(name),
            note_diffs: &note_diffs,
            text_diffs: &text_diffs,
        };
        render_track_changes(&request, &image_path)?;

        info!(track = name, image = %image_path.display(), "differences found");
        changes.push(TrackChange {
            track: name.to_string(),
            image: image_path,
        });
    }

    Ok(changes)
}
