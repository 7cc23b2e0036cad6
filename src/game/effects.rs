/// Side-effect requests emitted by the session
///
/// The state machine never touches timers, audio, or the screen directly.
/// Each transition returns a list of effects for the runtime to execute,
/// which keeps the game logic deterministic and testable.
use std::time::Duration;

use crate::audio::CueKind;
use crate::board::CardId;

/// What a scheduled delay should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayKind {
    /// End of the start window: shuffle, start countdown and music
    DealBoard,

    /// End of the mismatch window: flip both cards back down
    HideMismatch { first: CardId, second: CardId },
}

/// A scheduled delay, stamped with the session generation that created it.
///
/// The session ignores tokens whose generation is stale, so a delay left
/// over from a previous game can never mutate a freshly started one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayToken {
    pub generation: u64,
    pub kind: DelayKind,
}

/// Side effects for the runtime to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Play a one-shot sound cue
    PlayCue(CueKind),

    /// Start the looping background track
    StartMusic,

    /// Stop the background track (a restart begins from the top)
    StopMusic,

    /// Run a one-shot delay, then hand the token back to the session
    Schedule { after: Duration, token: DelayToken },

    /// Start the once-per-second countdown ticker
    StartCountdown,

    /// Cancel the countdown ticker
    StopCountdown,

    /// Reveal the win banner
    ShowWinBanner,

    /// Reveal the game-over banner
    ShowGameOverBanner,
}

impl Effect {
    /// Get a human-readable description of the effect
    pub fn description(&self) -> String {
        match self {
            Effect::PlayCue(cue) => format!("Play cue: {}", cue),
            Effect::StartMusic => "Start music".to_string(),
            Effect::StopMusic => "Stop music".to_string(),
            Effect::Schedule { after, token } => {
                format!("Schedule {:?} in {}ms", token.kind, after.as_millis())
            }
            Effect::StartCountdown => "Start countdown".to_string(),
            Effect::StopCountdown => "Stop countdown".to_string(),
            Effect::ShowWinBanner => "Show win banner".to_string(),
            Effect::ShowGameOverBanner => "Show game-over banner".to_string(),
        }
    }
}
