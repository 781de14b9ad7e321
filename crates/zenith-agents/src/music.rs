//! Music style resolution.

/// Resolves the music style for a session.
///
/// A non-empty preference is trusted verbatim; the provider's accepted
/// style list is not enforced at this layer. Otherwise the style is
/// inferred from the needs list, defaulting to "instrumental".
pub fn select_music_style(preference: &str, needs: &[String]) -> String {
    if !preference.trim().is_empty() {
        return preference.to_string();
    }

    let has = |need: &str| needs.iter().any(|n| n == need);
    if has("focus") || has("energy") {
        "binaural beats".to_string()
    } else if has("calm") || has("anxious") {
        "nature sounds".to_string()
    } else {
        "instrumental".to_string()
    }
}
