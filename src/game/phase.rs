use std::fmt;

/// Session lifecycle.
///
/// A session moves `Idle -> Starting -> Playing` and ends in exactly one of
/// the terminal phases. `start_game` may be called from any phase and returns
/// the machine to `Starting`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GamePhase {
    /// No session has been started yet
    #[default]
    Idle,

    /// Cards hidden, waiting out the deal delay (transitional state)
    Starting,

    /// Countdown running, flips accepted
    Playing,

    /// Every pair matched before the timer ran out
    Won,

    /// The countdown reached zero first
    TimedOut,
}

impl GamePhase {
    /// Check if flips are currently accepted
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Check if the session is between start and deal
    pub fn is_starting(&self) -> bool {
        matches!(self, GamePhase::Starting)
    }

    /// Check if the session has reached a terminal phase
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::TimedOut)
    }

    /// Get a human-readable description of the phase
    pub fn description(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Waiting to start",
            GamePhase::Starting => "Dealing...",
            GamePhase::Playing => "Playing",
            GamePhase::Won => "You won!",
            GamePhase::TimedOut => "Game over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(!GamePhase::Idle.is_playing());
        assert!(!GamePhase::Idle.is_over());

        assert!(GamePhase::Starting.is_starting());
        assert!(!GamePhase::Starting.is_playing());

        assert!(GamePhase::Playing.is_playing());
        assert!(!GamePhase::Playing.is_over());

        assert!(GamePhase::Won.is_over());
        assert!(GamePhase::TimedOut.is_over());
        assert!(!GamePhase::Won.is_playing());
    }

    #[test]
    fn test_phase_default() {
        assert_eq!(GamePhase::default(), GamePhase::Idle);
    }

    #[test]
    fn test_phase_description() {
        assert_eq!(GamePhase::Playing.description(), "Playing");
        assert_eq!(GamePhase::TimedOut.to_string(), "Game over");
    }
}
