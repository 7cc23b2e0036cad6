/// Sound cue categories
///
/// Each game event maps to one fixed cue. The background track is treated as
/// a cue like any other so the controller can key all preloaded data the
/// same way.
use std::fmt;

/// Sound cue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// A card was turned face-up
    Flip,

    /// Two cards matched
    Match,

    /// All pairs matched in time
    Win,

    /// The countdown ran out
    GameOver,

    /// Looping background track
    Music,
}

impl fmt::Display for CueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CueKind::Flip => write!(f, "Flip"),
            CueKind::Match => write!(f, "Match"),
            CueKind::Win => write!(f, "Win"),
            CueKind::GameOver => write!(f, "Game Over"),
            CueKind::Music => write!(f, "Music"),
        }
    }
}

impl CueKind {
    /// Check if this cue repeats until explicitly stopped
    pub fn is_looping(&self) -> bool {
        matches!(self, CueKind::Music)
    }

    /// Check if this cue plays at the music volume rather than the
    /// one-shot effects volume
    pub fn uses_music_volume(&self) -> bool {
        matches!(self, CueKind::Music)
    }
}
