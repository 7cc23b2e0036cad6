//! Terminal rendering of the board.
//!
//! The view is write-only: it redraws the whole screen from the session
//! snapshot after every event. Hidden cards show their slot number, face-up
//! and matched cards show their pair letter, and the two end-state banners
//! stay up until the next game starts.

use std::io::{self, Write};

use crate::board::{CardFace, PairId};
use crate::game::{GamePhase, MatchSession};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct BoardView {
    columns: usize,
    win_banner: bool,
    game_over_banner: bool,
}

impl BoardView {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            win_banner: false,
            game_over_banner: false,
        }
    }

    pub fn show_win(&mut self) {
        self.win_banner = true;
    }

    pub fn show_game_over(&mut self) {
        self.game_over_banner = true;
    }

    /// Hide both banners, called when a new game starts.
    pub fn reset_banners(&mut self) {
        self.win_banner = false;
        self.game_over_banner = false;
    }

    pub fn render(&self, session: &MatchSession) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, session)?;
        out.flush()
    }

    pub fn render_to<W: Write>(&self, w: &mut W, session: &MatchSession) -> io::Result<()> {
        write!(w, "{}", CLEAR_SCREEN)?;
        writeln!(w, "=== Memory Match ===")?;
        writeln!(
            w,
            "Time remaining: {:>3}   Flips: {}",
            session.time_remaining(),
            session.flips()
        )?;
        writeln!(w)?;

        for (slot, card) in session.board().display_cards().enumerate() {
            let cell = match card.face {
                CardFace::Hidden => format!("[ {:>2} ]", slot + 1),
                CardFace::FaceUp => format!("[ {:>2} ]", pair_label(card.pair)),
                CardFace::Matched => format!("( {:>2} )", pair_label(card.pair)),
            };
            write!(w, "{} ", cell)?;
            if (slot + 1) % self.columns == 0 {
                writeln!(w)?;
            }
        }
        if session.board().len() % self.columns != 0 {
            writeln!(w)?;
        }
        writeln!(w)?;

        if self.win_banner {
            writeln!(w, "*** YOU WIN! ***")?;
        }
        if self.game_over_banner {
            writeln!(w, "*** GAME OVER ***")?;
        }

        writeln!(w, "{}", session.phase().description())?;
        writeln!(w, "{}", prompt_for(session.phase()))?;
        Ok(())
    }
}

fn prompt_for(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Press 's' + Enter to start, 'q' to quit",
        GamePhase::Starting => "Dealing the board...",
        GamePhase::Playing => "Card number to flip, 's' to restart, 'q' to quit",
        GamePhase::Won | GamePhase::TimedOut => "Press 's' + Enter to play again, 'q' to quit",
    }
}

/// Letters for the first 26 pairs, numbers beyond that.
fn pair_label(pair: PairId) -> String {
    if pair.0 < 26 {
        char::from(b'A' + pair.0 as u8).to_string()
    } else {
        pair.0.to_string()
    }
}
