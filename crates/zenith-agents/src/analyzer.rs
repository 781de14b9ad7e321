//! Mood/needs analysis over free-text quiz answers.
//!
//! A keyword scan, not a model call: each answer is lowercased and
//! checked against small fixed keyword tables that map to mood tags,
//! needs, and a preferred session type. Unrecognized input yields an
//! empty-but-valid profile, so the function is total.

use zenith_types::{MoodProfile, SessionType};

/// Mood keywords and the tag each one contributes.
const MOOD_KEYWORDS: &[(&str, &str)] = &[
    ("anxious", "anxious"),
    ("anxiety", "anxious"),
    ("stress", "anxious"),
    ("worried", "anxious"),
    ("overwhelm", "anxious"),
    ("tired", "tired"),
    ("exhaust", "tired"),
    ("sleep", "tired"),
    ("sad", "sad"),
    ("down", "sad"),
    ("lonely", "sad"),
    ("happy", "happy"),
    ("grateful", "happy"),
    ("angry", "angry"),
    ("frustrat", "angry"),
];

/// Need keywords and the need each one contributes.
const NEED_KEYWORDS: &[(&str, &str)] = &[
    ("calm", "calm"),
    ("peace", "calm"),
    ("relax", "calm"),
    ("anxious", "calm"),
    ("stress", "calm"),
    ("rest", "rest"),
    ("sleep", "rest"),
    ("tired", "rest"),
    ("focus", "focus"),
    ("clarity", "focus"),
    ("concentrat", "focus"),
    ("unfocused", "focus"),
    ("energy", "energy"),
    ("motivat", "energy"),
    ("energize", "energy"),
];

/// Session-type keywords, first match wins across all answers.
const SESSION_KEYWORDS: &[(&str, SessionType)] = &[
    ("visualiz", SessionType::Visualization),
    ("imagine", SessionType::Visualization),
    ("breath", SessionType::Breathing),
    ("affirmation", SessionType::Affirmation),
    ("meditat", SessionType::Meditation),
];

/// Derives a [`MoodProfile`] from the quiz answers.
///
/// Total and deterministic: answers are scanned in order and each
/// answer is checked against the keyword tables in table order, so a
/// given answer sequence always yields the same tag and need vectors,
/// with no duplicates. An empty or unrecognized answer set produces
/// the default profile.
pub fn analyze(quiz_answers: &[String]) -> MoodProfile {
    let mut profile = MoodProfile::default();
    let mut session_chosen = false;

    for answer in quiz_answers {
        let lowered = answer.to_lowercase();

        for (keyword, tag) in MOOD_KEYWORDS {
            if lowered.contains(keyword) {
                push_unique(&mut profile.mood_tags, tag);
            }
        }
        for (keyword, need) in NEED_KEYWORDS {
            if lowered.contains(keyword) {
                push_unique(&mut profile.needs, need);
            }
        }
        if !session_chosen {
            for (keyword, session) in SESSION_KEYWORDS {
                if lowered.contains(keyword) {
                    profile.preferred_session = *session;
                    session_chosen = true;
                    break;
                }
            }
        }
    }

    profile
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
