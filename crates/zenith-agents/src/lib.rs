//! Pure analysis and selection functions for the session pipeline.
//!
//! Everything in this crate is a total, deterministic function with no
//! I/O: quiz-answer analysis, persona selection, voice and music style
//! resolution, and prompt construction. The orchestrator in
//! `zenith-session` sequences these around the external provider calls.

pub mod analyzer;
pub mod music;
pub mod persona;
pub mod prompt;
pub mod voice;

pub use analyzer::analyze;
pub use music::select_music_style;
pub use persona::select_persona;
pub use prompt::{build_prompt, Prompt};
pub use voice::select_voice;
