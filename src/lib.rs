//! A timed memory-matching card game.
//!
//! The player flips pairs of cards: matches stay revealed, mismatches flip
//! back after a short delay, and the session ends when every pair is matched
//! or the countdown reaches zero. Game logic lives in [`game::MatchSession`],
//! a deterministic state machine that emits [`game::Effect`] values; the
//! [`runtime`] executes those effects against the audio controller, timer
//! threads, and the terminal view.

pub mod audio;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod runtime;
pub mod ui;
