//! Session orchestration for the Zenith platform.
//!
//! The [`SessionOrchestrator`] sequences the pipeline: quiz analysis →
//! persona selection → script generation → voice/music resolution →
//! speech/music synthesis → response assembly. Each stage consumes the
//! previous stage's immutable output; the two synthesis branches have
//! no cross-dependency and run concurrently.
//!
//! Partial-failure policy: script generation is absorbed (a
//! persona-flavored fallback keeps `meditation_text` non-empty no
//! matter what the text provider does); synthesis failures from a
//! *configured* provider are surfaced, while unconfigured providers
//! degrade to returning the resolved voice id or style tag.

pub mod error;
pub mod orchestrator;
pub mod script;

pub use error::SessionError;
pub use orchestrator::SessionOrchestrator;
pub use script::{fallback_script, generate_script, generate_visualization};
