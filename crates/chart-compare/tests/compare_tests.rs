//! End-to-end comparison tests over hand-assembled chart fixtures.
//!
//! Fixtures are built as raw SMF bytes (header plus MTrk chunks) so the
//! whole pipeline runs: parse, extract, cluster, diff, render.

use chart_compare::{run_comparison, CompareParams};
use chart_diff::ChartProfile;
use pretty_assertions::assert_eq;

fn vlq(mut value: u32) -> Vec<u8> {
    let mut out = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        out.insert(0, ((value & 0x7F) as u8) | 0x80);
        value >>= 7;
    }
    out
}

fn note_on(delta: u32, note: u8, vel: u8) -> Vec<u8> {
    let mut bytes = vlq(delta);
    bytes.extend_from_slice(&[0x90, note, vel]);
    bytes
}

fn note_off(delta: u32, note: u8) -> Vec<u8> {
    let mut bytes = vlq(delta);
    bytes.extend_from_slice(&[0x80, note, 0]);
    bytes
}

fn text_meta(delta: u32, text: &str) -> Vec<u8> {
    let mut bytes = vlq(delta);
    bytes.extend_from_slice(&[0xFF, 0x01, text.len() as u8]);
    bytes.extend_from_slice(text.as_bytes());
    bytes
}

fn track(name: &str, events: &[Vec<u8>]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&[0x00, 0xFF, 0x03, name.len() as u8]);
    body.extend_from_slice(name.as_bytes());
    for event in events {
        body.extend_from_slice(event);
    }
    body.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

    let mut chunk = Vec::new();
    chunk.extend_from_slice(b"MTrk");
    chunk.extend_from_slice(&(body.len() as u32).to_be_bytes());
    chunk.extend_from_slice(&body);
    chunk
}

fn chart(tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"MThd");
    buf.extend_from_slice(&6u32.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
    buf.extend_from_slice(&480u16.to_be_bytes());
    for track in tracks {
        buf.extend_from_slice(track);
    }
    buf
}

fn defaults() -> CompareParams {
    CompareParams::default()
}

#[test]
fn comparing_a_chart_with_itself_finds_nothing() {
    let bytes = chart(&[
        track(
            "PART GUITAR",
            &[note_on(100, 96, 100), note_off(100, 96), note_on(40, 97, 90)],
        ),
        track("EVENTS", &[text_meta(0, "[section intro]")]),
    ]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &bytes,
        &bytes,
        "self",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert!(changes.is_empty());
}

#[test]
fn retimed_notes_within_tolerance_are_not_changes() {
    let old = chart(&[track(
        "PART GUITAR",
        &[note_on(100, 60, 100), note_off(100, 60)],
    )]);
    let new = chart(&[track(
        "PART GUITAR",
        &[note_on(103, 60, 100), note_off(100, 60)],
    )]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "retime",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert!(changes.is_empty());
}

#[test]
fn changed_note_produces_a_session_namespaced_artifact() {
    let old = chart(&[track("PART GUITAR", &[note_on(100, 60, 100)])]);
    let new = chart(&[track("PART GUITAR", &[note_on(100, 62, 100)])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "42",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].track, "PART GUITAR");
    assert_eq!(
        changes[0].image,
        dir.path().join("PART_GUITAR_changes_42.png")
    );
    assert!(changes[0].image.exists());
}

#[test]
fn track_present_on_one_side_only_is_reported() {
    let old = chart(&[track("PART GUITAR", &[note_on(0, 60, 100)])]);
    let new = chart(&[
        track("PART GUITAR", &[note_on(0, 60, 100)]),
        track("PART BASS", &[note_on(0, 84, 100), note_off(240, 84)]),
    ]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "added-part",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    let names: Vec<&str> = changes.iter().map(|c| c.track.as_str()).collect();
    assert_eq!(names, vec!["PART BASS"]);
}

#[test]
fn tracks_outside_the_profile_are_ignored() {
    let old = chart(&[track("FREESTYLE", &[note_on(0, 60, 100)])]);
    let new = chart(&[track("FREESTYLE", &[note_on(0, 72, 100)])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "offlist",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert!(changes.is_empty());
}

#[test]
fn alternate_profile_sees_pad_tracks() {
    let old = chart(&[track("PAD GUITAR", &[note_on(0, 60, 100)])]);
    let new = chart(&[track("PAD GUITAR", &[note_on(0, 72, 100)])]);
    let dir = tempfile::tempdir().unwrap();

    let primary = run_comparison(
        &old,
        &new,
        "pad",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();
    assert!(primary.is_empty());

    let alternate = run_comparison(
        &old,
        &new,
        "pad",
        dir.path(),
        ChartProfile::Alternate,
        &defaults(),
    )
    .unwrap();
    assert_eq!(alternate.len(), 1);
    assert_eq!(alternate[0].track, "PAD GUITAR");
}

#[test]
fn text_changes_alone_flag_a_track() {
    let old = chart(&[track("EVENTS", &[text_meta(500, "Verse 1")])]);
    let new = chart(&[track("EVENTS", &[text_meta(505, "Verse One")])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "lyrics",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].track, "EVENTS");
}

#[test]
fn unreadable_chart_downgrades_to_empty_result() {
    let good = chart(&[track("PART GUITAR", &[note_on(0, 60, 100)])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        b"not a chart",
        &good,
        "bad",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert!(changes.is_empty());
}

#[test]
fn chart_with_no_named_tracks_downgrades_to_empty_result() {
    // A single unnamed track parses fine but indexes to nothing.
    let mut body = vec![0x00, 0x90, 60, 100];
    body.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);
    let mut unnamed = Vec::new();
    unnamed.extend_from_slice(b"MTrk");
    unnamed.extend_from_slice(&(body.len() as u32).to_be_bytes());
    unnamed.extend_from_slice(&body);
    let nameless = chart(&[unnamed]);

    let good = chart(&[track("PART GUITAR", &[note_on(0, 60, 100)])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &nameless,
        &good,
        "nameless",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert!(changes.is_empty());
}

#[test]
fn velocity_only_edit_is_a_change() {
    let old = chart(&[track("PLASTIC DRUMS", &[note_on(0, 96, 100)])]);
    let new = chart(&[track("PLASTIC DRUMS", &[note_on(0, 96, 64)])]);
    let dir = tempfile::tempdir().unwrap();

    let changes = run_comparison(
        &old,
        &new,
        "vel",
        dir.path(),
        ChartProfile::Primary,
        &defaults(),
    )
    .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].track, "PLASTIC DRUMS");
}
