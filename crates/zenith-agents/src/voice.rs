//! Voice resolution against the fixed voice table.

use zenith_types::{default_voice_id, voice_table};

/// Resolves a free-text voice preference to a provider voice id.
///
/// Normalizes (trim + lowercase), tries an exact table match, then a
/// substring match in either direction, and finally falls back to the
/// default voice. Always returns an id from the table.
pub fn select_voice(preference: &str) -> &'static str {
    let normalized = preference.trim().to_lowercase();
    if normalized.is_empty() {
        return default_voice_id();
    }

    if let Some(entry) = voice_table().iter().find(|e| e.name == normalized) {
        return entry.id;
    }

    if let Some(entry) = voice_table()
        .iter()
        .find(|e| e.name.contains(&normalized) || normalized.contains(e.name))
    {
        return entry.id;
    }

    default_voice_id()
}
