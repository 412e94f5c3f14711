use serde::{Deserialize, Serialize};

/// Chart encodings with distinct track-naming conventions.
///
/// Both conventions describe the same instrument parts; the alternate
/// encoding names its pad parts `PAD <PART>` where the primary one uses
/// `PART <PART>` or `PLASTIC <PART>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartProfile {
    Primary,
    Alternate,
}

impl ChartProfile {
    /// Comparison-eligible track names, in comparison order.
    pub fn track_names(self) -> &'static [&'static str] {
        match self {
            ChartProfile::Primary => &[
                "PART BASS",
                "PART GUITAR",
                "PART DRUMS",
                "PART VOCALS",
                "PRO VOCALS",
                "PLASTIC GUITAR",
                "PLASTIC DRUMS",
                "PLASTIC BASS",
                "BEAT",
                "EVENTS",
                "SECTION",
            ],
            ChartProfile::Alternate => &[
                "PART DRUMS",
                "PART BASS",
                "PART GUITAR",
                "PAD VOCALS",
                "PAD BASS",
                "PAD DRUMS",
                "PAD GUITAR",
                "PRO VOCALS",
                "BEAT",
                "EVENTS",
                "SECTION",
            ],
        }
    }
}

/// Closed set of track kinds the comparison understands.
///
/// Every kind maps to exactly one note-name table in [`crate::names`];
/// unrecognized track names have no kind and fall back to numeric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    PartGuitar,
    PartBass,
    PartDrums,
    PartVocals,
    ProVocals,
    PlasticGuitar,
    PlasticBass,
    PlasticDrums,
    Beat,
    Events,
    Section,
}

impl TrackKind {
    /// Resolve a track name from either naming convention.
    ///
    /// `PAD`-prefixed alternate names resolve to the same kind as their
    /// `PART` counterparts and therefore share note-name tables.
    pub fn from_name(name: &str) -> Option<TrackKind> {
        match name {
            "PART GUITAR" | "PAD GUITAR" => Some(TrackKind::PartGuitar),
            "PART BASS" | "PAD BASS" => Some(TrackKind::PartBass),
            "PART DRUMS" | "PAD DRUMS" => Some(TrackKind::PartDrums),
            "PART VOCALS" | "PAD VOCALS" => Some(TrackKind::PartVocals),
            "PRO VOCALS" => Some(TrackKind::ProVocals),
            "PLASTIC GUITAR" => Some(TrackKind::PlasticGuitar),
            "PLASTIC BASS" => Some(TrackKind::PlasticBass),
            "PLASTIC DRUMS" => Some(TrackKind::PlasticDrums),
            "BEAT" => Some(TrackKind::Beat),
            "EVENTS" => Some(TrackKind::Events),
            "SECTION" => Some(TrackKind::Section),
            _ => None,
        }
    }
}
