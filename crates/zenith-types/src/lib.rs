//! Shared domain types for the Zenith guided-session platform.
//!
//! This crate provides the types that cross crate boundaries: the mood
//! profile derived from quiz answers, the coaching persona, the session
//! request/result pair, the feedback record, and the fixed voice table.
//!
//! No crate in the workspace depends on anything *except* `zenith-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

pub mod persona;
pub mod profile;
pub mod session;
pub mod voice;

pub use persona::Persona;
pub use profile::{MoodProfile, SessionType};
pub use session::{FeedbackRecord, SessionRequest, SessionResult};
pub use voice::{default_voice_id, voice_table, VoiceEntry, DEFAULT_VOICE};
