//! The match session state machine.
//!
//! Owns everything that changes during a game: phase, countdown, flip count,
//! the matched set, the selection slot, and the busy flag. All timing is
//! externalized: the runtime delivers `tick` once per second and hands
//! scheduled `DelayToken`s back via `resolve_delay`.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::effects::{DelayKind, DelayToken, Effect};
use super::phase::GamePhase;
use crate::audio::CueKind;
use crate::board::{Board, CardFace, CardId};
use crate::config::Config;

/// The "currently selected" slot: either empty or holding the one card
/// waiting for its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    One(CardId),
}

pub struct MatchSession {
    board: Board,
    phase: GamePhase,
    flips: u32,
    total_time: u32,
    time_remaining: u32,
    matched: HashSet<CardId>,
    selection: Selection,
    busy: bool,
    /// Bumped on every `start_game`; stale delay tokens are dropped.
    generation: u64,
    start_delay: Duration,
    mismatch_delay: Duration,
    rng: StdRng,
}

impl MatchSession {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            board: Board::new(config.pairs),
            phase: GamePhase::Idle,
            flips: 0,
            total_time: config.total_time_secs,
            time_remaining: config.total_time_secs,
            matched: HashSet::new(),
            selection: Selection::None,
            busy: false,
            generation: 0,
            start_delay: Duration::from_millis(config.start_delay_ms),
            mismatch_delay: Duration::from_millis(config.mismatch_delay_ms),
            rng,
        }
    }

    /// Begin a new game: reset all counters, hide the board, and schedule
    /// the deal. The board stays inert (busy) until the delay fires.
    pub fn start_game(&mut self) -> Vec<Effect> {
        self.generation += 1;
        self.phase = GamePhase::Starting;
        self.flips = 0;
        self.time_remaining = self.total_time;
        self.matched.clear();
        self.selection = Selection::None;
        self.busy = true;
        self.board.hide_all();

        tracing::info!(generation = self.generation, "New game starting");

        vec![Effect::Schedule {
            after: self.start_delay,
            token: self.token(DelayKind::DealBoard),
        }]
    }

    /// Hand back a fired delay. Tokens from a previous generation are
    /// ignored: a mismatch timer left running across a restart must not
    /// touch the new game.
    pub fn resolve_delay(&mut self, token: DelayToken) -> Vec<Effect> {
        if token.generation != self.generation {
            tracing::debug!(?token, generation = self.generation, "Dropping stale delay");
            return Vec::new();
        }

        match token.kind {
            DelayKind::DealBoard => {
                self.board.shuffle(&mut self.rng);
                self.phase = GamePhase::Playing;
                self.busy = false;
                vec![Effect::StartCountdown, Effect::StartMusic]
            }
            DelayKind::HideMismatch { first, second } => {
                self.board.set_face(first, CardFace::Hidden);
                self.board.set_face(second, CardFace::Hidden);
                self.busy = false;
                Vec::new()
            }
        }
    }

    /// Guard shared by the runtime and `flip_card`. A flip is accepted only
    /// mid-game, outside the busy windows, on an unmatched card that is not
    /// already the selection.
    pub fn can_flip(&self, id: CardId) -> bool {
        self.phase.is_playing()
            && !self.busy
            && self.board.card(id).is_some()
            && !self.matched.contains(&id)
            && self.selection != Selection::One(id)
    }

    /// Turn a card face-up. Guarded calls are silent no-ops, mirroring a
    /// click landing while the board is busy.
    pub fn flip_card(&mut self, id: CardId) -> Vec<Effect> {
        if !self.can_flip(id) {
            tracing::trace!(card = id.0, "Flip rejected");
            return Vec::new();
        }

        self.flips += 1;
        self.board.set_face(id, CardFace::FaceUp);
        let mut effects = vec![Effect::PlayCue(CueKind::Flip)];

        match self.selection {
            Selection::None => {
                self.selection = Selection::One(id);
            }
            Selection::One(first) => {
                self.selection = Selection::None;
                effects.extend(self.resolve_pair(first, id));
            }
        }

        effects
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> Vec<Effect> {
        if self.board.is_matching_pair(first, second) {
            self.matched.insert(first);
            self.matched.insert(second);
            self.board.set_face(first, CardFace::Matched);
            self.board.set_face(second, CardFace::Matched);
            tracing::debug!(matched = self.matched.len(), "Pair matched");

            let mut effects = vec![Effect::PlayCue(CueKind::Match)];
            if self.matched.len() == self.board.len() {
                effects.extend(self.win());
            }
            effects
        } else {
            self.busy = true;
            vec![Effect::Schedule {
                after: self.mismatch_delay,
                token: self.token(DelayKind::HideMismatch { first, second }),
            }]
        }
    }

    /// One countdown second elapsed. Ignored outside of play, so a tick
    /// that raced a terminal transition cannot move the clock.
    pub fn tick(&mut self) -> Vec<Effect> {
        if !self.phase.is_playing() {
            return Vec::new();
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.game_over()
        } else {
            Vec::new()
        }
    }

    fn win(&mut self) -> Vec<Effect> {
        self.phase = GamePhase::Won;
        tracing::info!(flips = self.flips, time_left = self.time_remaining, "Board cleared");
        vec![
            Effect::StopCountdown,
            Effect::StopMusic,
            Effect::PlayCue(CueKind::Win),
            Effect::ShowWinBanner,
        ]
    }

    fn game_over(&mut self) -> Vec<Effect> {
        self.phase = GamePhase::TimedOut;
        tracing::info!(flips = self.flips, matched = self.matched.len(), "Time ran out");
        vec![
            Effect::StopCountdown,
            Effect::StopMusic,
            Effect::PlayCue(CueKind::GameOver),
            Effect::ShowGameOverBanner,
        ]
    }

    fn token(&self, kind: DelayKind) -> DelayToken {
        DelayToken {
            generation: self.generation,
            kind,
        }
    }

    // === Accessors ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn flips(&self) -> u32 {
        self.flips
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
