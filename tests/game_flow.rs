// End-to-end tests for the match session, driven the same way the runtime
// drives it: method calls in, effects out, delays handed back by hand.

use memory_match::board::CardId;
use memory_match::config::Config;
use memory_match::game::{DelayToken, Effect, GamePhase, MatchSession, Selection};

fn config(pairs: usize, total_time_secs: u32) -> Config {
    Config {
        pairs,
        total_time_secs,
        seed: Some(11),
        ..Config::default()
    }
}

fn scheduled_token(effects: &[Effect]) -> DelayToken {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Schedule { token, .. } => Some(*token),
            _ => None,
        })
        .expect("expected a scheduled delay")
}

/// Start a game and resolve the deal delay so flips are accepted.
fn deal(session: &mut MatchSession) {
    let effects = session.start_game();
    session.resolve_delay(scheduled_token(&effects));
    assert_eq!(session.phase(), GamePhase::Playing);
}

/// The scripted two-pair game: cards 0 and 1 share pair A, cards 2 and 3
/// share pair B.
#[test]
fn two_pair_scenario_plays_out_exactly() {
    let mut session = MatchSession::new(&config(2, 100));
    deal(&mut session);
    assert_eq!(session.time_remaining(), 100);
    assert_eq!(session.matched_count(), 0);

    // Flip card 0 (A): it becomes the selection
    session.flip_card(CardId(0));
    assert_eq!(session.selection(), Selection::One(CardId(0)));
    assert_eq!(session.flips(), 1);

    // Flip card 2 (B): mismatch, board goes busy
    let effects = session.flip_card(CardId(2));
    assert!(session.is_busy());
    assert_eq!(session.flips(), 2);

    // After the delay both cards revert to hidden and input reopens
    session.resolve_delay(scheduled_token(&effects));
    assert!(session.board().face(CardId(0)).is_hidden());
    assert!(session.board().face(CardId(2)).is_hidden());
    assert!(!session.is_busy());

    // Flip card 0 (A) again, then its partner card 1 (A): first match
    session.flip_card(CardId(0));
    assert_eq!(session.selection(), Selection::One(CardId(0)));
    let effects = session.flip_card(CardId(1));
    assert_eq!(session.flips(), 4);
    assert_eq!(session.matched_count(), 2);
    assert!(session.is_matched(CardId(0)));
    assert!(session.is_matched(CardId(1)));
    assert!(!effects.contains(&Effect::ShowWinBanner));

    // Flip card 2 (B), then card 3 (B): the board is cleared
    session.flip_card(CardId(2));
    assert_eq!(session.selection(), Selection::One(CardId(2)));
    let effects = session.flip_card(CardId(3));

    assert_eq!(session.phase(), GamePhase::Won);
    assert_eq!(session.matched_count(), 4);
    assert!(effects.contains(&Effect::StopCountdown));
    assert!(effects.contains(&Effect::ShowWinBanner));
}

#[test]
fn flip_count_equals_accepted_calls() {
    let mut session = MatchSession::new(&config(4, 100));
    deal(&mut session);

    let mut accepted = 0u32;
    // A messy click sequence: repeats, out-of-range ids, busy-window clicks
    for id in [0usize, 0, 2, 5, 99, 1, 1, 3] {
        if session.can_flip(CardId(id)) {
            accepted += 1;
        }
        session.flip_card(CardId(id));
    }

    assert_eq!(session.flips(), accepted);
}

#[test]
fn restart_resets_counters_and_board() {
    let mut session = MatchSession::new(&config(2, 50));
    deal(&mut session);

    session.flip_card(CardId(0));
    session.flip_card(CardId(1));
    session.tick();
    assert!(session.flips() > 0);

    session.start_game();
    assert_eq!(session.flips(), 0);
    assert_eq!(session.matched_count(), 0);
    assert_eq!(session.time_remaining(), 50);
    assert_eq!(session.selection(), Selection::None);
    assert!(session
        .board()
        .cards()
        .iter()
        .all(|c| c.face.is_hidden()));
}

#[test]
fn timeout_ends_game_and_locks_input() {
    let mut session = MatchSession::new(&config(2, 2));
    deal(&mut session);

    session.tick();
    let effects = session.tick();
    assert_eq!(session.phase(), GamePhase::TimedOut);
    assert!(effects.contains(&Effect::ShowGameOverBanner));

    // No flips after timeout, and the clock never goes below zero
    assert!(session.flip_card(CardId(0)).is_empty());
    assert!(session.tick().is_empty());
    assert_eq!(session.time_remaining(), 0);
}

#[test]
fn mismatch_delay_from_old_game_cannot_touch_new_game() {
    let mut session = MatchSession::new(&config(2, 100));
    deal(&mut session);

    // Leave a mismatch delay pending...
    session.flip_card(CardId(0));
    let pending = scheduled_token(&session.flip_card(CardId(2)));

    // ...restart, deal, and make progress in the new game
    let effects = session.start_game();
    session.resolve_delay(scheduled_token(&effects));
    session.flip_card(CardId(0));
    session.flip_card(CardId(1));
    assert_eq!(session.matched_count(), 2);

    // The orphaned delay fires and must change nothing
    let flips_before = session.flips();
    session.resolve_delay(pending);
    assert_eq!(session.matched_count(), 2);
    assert_eq!(session.flips(), flips_before);
    assert!(session.board().face(CardId(0)).is_matched());
    assert!(!session.is_busy());
}

#[test]
fn won_game_accepts_restart() {
    let mut session = MatchSession::new(&config(2, 100));
    deal(&mut session);

    for id in [0, 1, 2, 3] {
        session.flip_card(CardId(id));
    }
    assert_eq!(session.phase(), GamePhase::Won);

    let effects = session.start_game();
    assert_eq!(session.phase(), GamePhase::Starting);
    session.resolve_delay(scheduled_token(&effects));
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.matched_count(), 0);
}
