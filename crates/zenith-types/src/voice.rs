//! The fixed voice table.
//!
//! Maps canonical lowercase voice names to ElevenLabs voice identifiers.
//! The table is immutable data constructed at compile time; selection
//! logic lives in `zenith-agents`.

/// One entry of the voice table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceEntry {
    /// Canonical lowercase voice name.
    pub name: &'static str,
    /// The provider voice identifier.
    pub id: &'static str,
}

/// The free ElevenLabs voices the speech synthesizer accepts.
const VOICES: &[VoiceEntry] = &[
    VoiceEntry { name: "rachel", id: "21m00Tcm4TlvDq8ikWAM" },
    VoiceEntry { name: "domi", id: "AZnzlk1XvdvUeBnXmlld" },
    VoiceEntry { name: "bella", id: "EXAVITQu4vr4xnSDxMaL" },
    VoiceEntry { name: "antoni", id: "ErXwobaYiN019PkySvjV" },
    VoiceEntry { name: "elli", id: "MF3mGyEYCl7XYWbV9V6O" },
    VoiceEntry { name: "josh", id: "TxGEqnHWrfWFTfGW9XjX" },
    VoiceEntry { name: "arnold", id: "VR6AewLTigWG4xSOukaG" },
    VoiceEntry { name: "adam", id: "pNInz6obpgDQGcFmaJgB" },
    VoiceEntry { name: "sam", id: "yoZ06aMxZJJ28mfd3POQ" },
];

/// The voice used when a preference matches nothing in the table.
pub const DEFAULT_VOICE: &str = "rachel";

/// Returns the full voice table.
pub fn voice_table() -> &'static [VoiceEntry] {
    VOICES
}

/// Returns the id of the default voice.
pub fn default_voice_id() -> &'static str {
    VOICES
        .iter()
        .find(|entry| entry.name == DEFAULT_VOICE)
        .map(|entry| entry.id)
        // The default name is a table constant; this arm is unreachable
        // unless the table itself is edited inconsistently.
        .unwrap_or(VOICES[0].id)
}
