//! Gameplay label tables for note numbers, per track kind.
//!
//! Tables follow the chart authoring conventions for each part. Kinds
//! without labels (EVENTS, SECTION) return `None` for every note and
//! callers fall back to the numeric note number.

use crate::profile::TrackKind;

/// Gameplay label for a note number on the given track kind.
pub fn note_name(kind: TrackKind, note: u8) -> Option<&'static str> {
    match kind {
        TrackKind::PartGuitar | TrackKind::PartBass => {
            difficulty_grid(note).or_else(|| fret_marker(note))
        }
        TrackKind::PartVocals => difficulty_grid(note),
        TrackKind::PartDrums => difficulty_grid(note).or_else(|| drum_technique(note)),
        TrackKind::ProVocals => pro_vocals(note),
        TrackKind::PlasticGuitar | TrackKind::PlasticBass => plastic_five_fret(note),
        TrackKind::PlasticDrums => plastic_drums(note),
        TrackKind::Beat => beat(note),
        TrackKind::Events | TrackKind::Section => None,
    }
}

/// Lane and lift lanes shared by the pad instruments.
fn difficulty_grid(note: u8) -> Option<&'static str> {
    Some(match note {
        116 => "Overdrive",
        106 => "EXPERT 5 Lift",
        105 => "EXPERT 4 Lift",
        104 => "EXPERT 3 Lift",
        103 => "EXPERT 2 Lift",
        102 => "EXPERT 1 Lift",
        100 => "EXPERT 5",
        99 => "EXPERT 4",
        98 => "EXPERT 3",
        97 => "EXPERT 2",
        96 => "EXPERT 1",
        93 => "HARD 4 Lift",
        92 => "HARD 3 Lift",
        91 => "HARD 2 Lift",
        90 => "HARD 1 Lift",
        87 => "HARD 4",
        86 => "HARD 3",
        85 => "HARD 2",
        84 => "HARD 1",
        81 => "MEDIUM 4 Lift",
        80 => "MEDIUM 3 Lift",
        79 => "MEDIUM 2 Lift",
        78 => "MEDIUM 1 Lift",
        75 => "MEDIUM 4",
        74 => "MEDIUM 3",
        73 => "MEDIUM 2",
        72 => "MEDIUM 1",
        69 => "EASY 4 Lift",
        68 => "EASY 3 Lift",
        67 => "EASY 2 Lift",
        66 => "EASY 1 Lift",
        63 => "EASY 4",
        62 => "EASY 3",
        61 => "EASY 2",
        60 => "EASY 1",
        _ => return None,
    })
}

fn fret_marker(note: u8) -> Option<&'static str> {
    Some(match note {
        59 => "Fret 12",
        57 => "Fret 11",
        56 => "Fret 10",
        55 => "Fret 9",
        53 => "Fret 8",
        52 => "Fret 7",
        50 => "Fret 6",
        49 => "Fret 5",
        47 => "Fret 4",
        45 => "Fret 3",
        43 => "Fret 2",
        40 => "Fret 1",
        _ => return None,
    })
}

fn drum_technique(note: u8) -> Option<&'static str> {
    Some(match note {
        51 => "Floor Tom hit w/RH",
        50 => "Floor Tom hit w/LH",
        49 => "Tom2 hit w/RH",
        48 => "Tom2 hit w/LH",
        47 => "Tom1 hit w/RH",
        46 => "Tom1 hit w/LH",
        45 => "A soft hit on crash 2 with the left hand",
        44 => "A hit on crash 2 with the left hand",
        43 => "A ride hit with the left hand",
        42 => "Ride Cym hit w/RH",
        41 => "Crash2 Choke (hit w/RH, choke w/LH)",
        40 => "Crash1 Choke (hit w/RH, choke w/LH)",
        39 => "Crash2 (near Ride Cym) soft hit w/RH",
        38 => "Crash2 hard hit w/RH",
        37 => "Crash1 (near Hi-Hat) soft hit w/RH",
        36 => "Crash1 hard hit w/RH",
        35 => "Crash1 soft hit w/LH",
        34 => "Crash1 hard hit w/LH",
        32 => "Percussion w/ RH",
        31 => "Hi-Hat hit w/RH",
        30 => "Hi-Hat hit w/LH",
        29 => "A soft snare hit with the right hand",
        28 => "A soft snare hit with the left hand",
        27 => "Snare hit w/RH",
        26 => "Snare hit w/LH",
        25 => "Hi-Hat pedal up (hat open) w/LF",
        24 => "Kick hit w/RF",
        _ => return None,
    })
}

fn pro_vocals(note: u8) -> Option<&'static str> {
    Some(match note {
        116 => "Overdrive",
        105 => "Phrase Marker",
        84 => "Pitched Vocals 48",
        83 => "Pitched Vocals 47",
        82 => "Pitched Vocals 46",
        81 => "Pitched Vocals 45",
        80 => "Pitched Vocals 44",
        79 => "Pitched Vocals 43",
        78 => "Pitched Vocals 42",
        77 => "Pitched Vocals 41",
        76 => "Pitched Vocals 40",
        75 => "Pitched Vocals 39",
        74 => "Pitched Vocals 38",
        73 => "Pitched Vocals 37",
        72 => "Pitched Vocals 36",
        71 => "Pitched Vocals 35",
        70 => "Pitched Vocals 34",
        69 => "Pitched Vocals 33",
        68 => "Pitched Vocals 32",
        67 => "Pitched Vocals 31",
        66 => "Pitched Vocals 30",
        65 => "Pitched Vocals 29",
        64 => "Pitched Vocals 28",
        63 => "Pitched Vocals 27",
        62 => "Pitched Vocals 26",
        61 => "Pitched Vocals 25",
        60 => "Pitched Vocals 24",
        59 => "Pitched Vocals 23",
        58 => "Pitched Vocals 22",
        57 => "Pitched Vocals 21",
        56 => "Pitched Vocals 20",
        55 => "Pitched Vocals 19",
        54 => "Pitched Vocals 18",
        53 => "Pitched Vocals 17",
        52 => "Pitched Vocals 16",
        51 => "Pitched Vocals 15",
        50 => "Pitched Vocals 14",
        49 => "Pitched Vocals 13",
        48 => "Pitched Vocals 12",
        47 => "Pitched Vocals 11",
        46 => "Pitched Vocals 10",
        45 => "Pitched Vocals 9",
        44 => "Pitched Vocals 8",
        43 => "Pitched Vocals 7",
        42 => "Pitched Vocals 6",
        41 => "Pitched Vocals 5",
        40 => "Pitched Vocals 4",
        39 => "Pitched Vocals 3",
        38 => "Pitched Vocals 2",
        37 => "Pitched Vocals 1",
        _ => return None,
    })
}

fn plastic_five_fret(note: u8) -> Option<&'static str> {
    Some(match note {
        127 => "Trill Marker",
        126 => "Tremolo Marker",
        116 => "Overdrive",
        103 => "Solo Marker",
        102 => "EXPERT Force HOPO Off",
        101 => "EXPERT Force HOPO On",
        100 => "EXPERT Orange",
        99 => "EXPERT Blue",
        98 => "EXPERT Yellow",
        97 => "EXPERT Red",
        96 => "EXPERT Green",
        90 => "HARD Force HOPO Off",
        89 => "HARD Force HOPO On",
        88 => "HARD Orange",
        87 => "HARD Blue",
        86 => "HARD Yellow",
        85 => "HARD Red",
        84 => "HARD Green",
        76 => "MEDIUM Orange",
        75 => "MEDIUM Blue",
        74 => "MEDIUM Yellow",
        73 => "MEDIUM Red",
        72 => "MEDIUM Green",
        64 => "EASY Orange",
        63 => "EASY Blue",
        62 => "EASY Yellow",
        61 => "EASY Red",
        60 => "EASY Green",
        _ => return None,
    })
}

fn plastic_drums(note: u8) -> Option<&'static str> {
    Some(match note {
        127 => "Cymbal Swells",
        126 => "Drum Roll",
        124 => "Drum Fill",
        123 => "Drum Fill",
        122 => "Drum Fill",
        121 => "Drum Fill",
        120 => "Drum Fill (use all 5)",
        116 => "Overdrive",
        112 => "Tom Marker 4",
        111 => "Tom Marker 3",
        110 => "Tom Marker 2",
        103 => "Solo Marker",
        100 => "EXPERT Green",
        99 => "EXPERT Blue",
        98 => "EXPERT Yellow",
        97 => "EXPERT Red",
        96 => "EXPERT Kick",
        88 => "HARD Green",
        87 => "HARD Blue",
        86 => "HARD Yellow",
        85 => "HARD Red",
        84 => "HARD Kick",
        76 => "MEDIUM Green",
        75 => "MEDIUM Blue",
        74 => "MEDIUM Yellow",
        73 => "MEDIUM Red",
        72 => "MEDIUM Kick",
        64 => "EASY Green",
        63 => "EASY Blue",
        62 => "EASY Yellow",
        61 => "EASY Red",
        60 => "EASY Kick",
        _ => return None,
    })
}

fn beat(note: u8) -> Option<&'static str> {
    Some(match note {
        13 => "Measure",
        12 => "Beat",
        _ => return None,
    })
}
