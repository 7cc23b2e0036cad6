/// Game module: the match session state machine
///
/// The session is a pure state machine:
///
/// ```text
/// Idle -> Starting -> Playing -> { Won | TimedOut }
/// ```
///
/// Inputs arrive as method calls (`start_game`, `flip_card`, `tick`,
/// `resolve_delay`); outputs are `Effect` values the runtime executes
/// (audio cues, scheduled delays, the countdown ticker, banners). The two
/// one-shot delay windows carry a generation-stamped `DelayToken`, so a
/// timer that outlives its game is discarded instead of corrupting the
/// next one.
pub mod effects;
pub mod phase;
pub mod session;

// Re-export commonly used types
pub use effects::{DelayKind, DelayToken, Effect};
pub use phase::GamePhase;
pub use session::{MatchSession, Selection};
