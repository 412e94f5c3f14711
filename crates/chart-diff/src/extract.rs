use crate::event::{NoteEvent, NoteKind, TextEvent};
use midly::{MetaMessage, MidiMessage, Smf, TrackEvent, TrackEventKind};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Note events grouped by the absolute tick they occur at.
pub type NoteBuckets = BTreeMap<u64, BTreeSet<NoteEvent>>;

/// One track's note and text content on an absolute-tick timeline.
///
/// A track that is absent from a chart is represented by the default (empty)
/// timeline, so a part that exists on only one side of a comparison reads as
/// wholly added or wholly removed rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTimeline {
    pub notes: NoteBuckets,
    pub texts: Vec<TextEvent>,
}

/// Parse chart bytes into a MIDI file structure.
pub fn parse_chart(bytes: &[u8]) -> crate::Result<Smf<'_>> {
    Smf::parse(bytes).map_err(|e| crate::Error::ChartParse(e.to_string()))
}

/// Index a chart's tracks by name.
///
/// A track is named by its first TrackName meta event; unnamed tracks are
/// skipped. Names are not guaranteed unique, and when they collide the later
/// track shadows the earlier one.
pub fn named_tracks<'s, 'a>(smf: &'s Smf<'a>) -> HashMap<String, &'s [TrackEvent<'a>]> {
    let mut tracks = HashMap::new();

    for track in &smf.tracks {
        let mut name = None;
        for event in track {
            if let TrackEventKind::Meta(MetaMessage::TrackName(bytes)) = event.kind {
                name = String::from_utf8(bytes.to_vec()).ok();
                break;
            }
        }
        if let Some(name) = name {
            tracks.insert(name, track.as_slice());
        }
    }

    tracks
}

/// Walk one track's delta-time messages into an absolute-tick timeline.
///
/// The absolute tick is the running sum of event deltas. Note-ons carrying
/// velocity 0 are recorded as note-offs (format convention). Text and lyric
/// events are kept in arrival order, undeduplicated.
pub fn extract_timeline(track: &[TrackEvent]) -> TrackTimeline {
    let mut timeline = TrackTimeline::default();
    let mut tick: u64 = 0;

    for event in track {
        tick += u64::from(event.delta.as_int());

        match event.kind {
            TrackEventKind::Midi { message, .. } => match message {
                MidiMessage::NoteOn { key, vel } => {
                    // vel=0 NoteOn is NoteOff
                    let kind = if vel.as_int() == 0 {
                        NoteKind::Off
                    } else {
                        NoteKind::On
                    };
                    timeline.notes.entry(tick).or_default().insert(NoteEvent {
                        note: key.as_int(),
                        kind,
                        velocity: vel.as_int(),
                    });
                }
                MidiMessage::NoteOff { key, vel } => {
                    timeline.notes.entry(tick).or_default().insert(NoteEvent {
                        note: key.as_int(),
                        kind: NoteKind::Off,
                        velocity: vel.as_int(),
                    });
                }
                _ => {}
            },
            TrackEventKind::Meta(MetaMessage::Text(bytes))
            | TrackEventKind::Meta(MetaMessage::Lyric(bytes)) => {
                timeline.texts.push(TextEvent {
                    tick,
                    text: String::from_utf8_lossy(bytes).into_owned(),
                });
            }
            _ => {}
        }
    }

    timeline
}
