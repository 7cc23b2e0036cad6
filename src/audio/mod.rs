/// Audio module
///
/// Thin wrapper issuing play/stop calls against a small fixed set of sound
/// cues. No sequencing guarantees and no recovery: every call is
/// fire-and-forget and independent of prior calls.
pub mod controller;
pub mod cue;

// Re-export commonly used types
pub use controller::AudioController;
pub use cue::CueKind;
