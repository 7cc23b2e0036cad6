//! Event loop wiring.
//!
//! Single consumer, cooperative scheduling: an input thread forwards parsed
//! stdin lines, one-shot delay threads hand generation-stamped tokens back,
//! and a cancellable ticker drives the countdown. The loop applies each
//! event to the session and executes whatever effects come back. Events are
//! processed strictly in arrival order; a click landing during a busy
//! window reaches the session and is rejected there, never queued.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{select, unbounded, Receiver, Sender};

use crate::audio::AudioController;
use crate::game::{DelayToken, Effect, MatchSession};
use crate::ui::BoardView;

/// Player input, one event per stdin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start (or restart) a game
    StartRequested,

    /// Flip the card at a zero-based display slot
    SlotClicked(usize),

    /// Leave the game
    Quit,
}

/// Timer-thread messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One countdown second elapsed
    Tick,

    /// A scheduled one-shot delay fired
    DelayElapsed(DelayToken),
}

/// Parse one line of player input. Empty and unrecognized lines are dropped.
pub fn parse_input_line(line: &str) -> Option<InputEvent> {
    let trimmed = line.trim();
    match trimmed {
        "" => None,
        "s" | "start" => Some(InputEvent::StartRequested),
        "q" | "quit" | "exit" => Some(InputEvent::Quit),
        _ => trimmed
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .map(|n| InputEvent::SlotClicked(n - 1)),
    }
}

/// Forward stdin lines as input events until quit or EOF.
pub fn spawn_input_thread(tx: Sender<InputEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = parse_input_line(&line) {
                let quit = event == InputEvent::Quit;
                if tx.send(event).is_err() || quit {
                    break;
                }
            }
        }
    })
}

/// The repeating countdown timer. Exactly one is active per session; it is
/// cancelled on win and on timeout.
struct Countdown {
    stop: Arc<AtomicBool>,
}

impl Countdown {
    fn spawn(tx: Sender<TimerEvent>) -> Self {
        Self::spawn_with_interval(tx, Duration::from_secs(1))
    }

    fn spawn_with_interval(tx: Sender<TimerEvent>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(TimerEvent::Tick).is_err() {
                break;
            }
        });

        Self { stop }
    }

    fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct GameRuntime {
    session: MatchSession,
    audio: AudioController,
    view: BoardView,
    timer_tx: Sender<TimerEvent>,
    timer_rx: Receiver<TimerEvent>,
    countdown: Option<Countdown>,
}

impl GameRuntime {
    pub fn new(session: MatchSession, audio: AudioController, view: BoardView) -> Self {
        let (timer_tx, timer_rx) = unbounded();
        Self {
            session,
            audio,
            view,
            timer_tx,
            timer_rx,
            countdown: None,
        }
    }

    /// Run the event loop until quit or input EOF.
    pub fn run(&mut self, input: Receiver<InputEvent>) -> io::Result<()> {
        self.view.render(&self.session)?;
        let timer_rx = self.timer_rx.clone();

        loop {
            select! {
                recv(input) -> msg => {
                    match msg {
                        Err(_) | Ok(InputEvent::Quit) => break,
                        Ok(event) => self.handle_input(event),
                    }
                }
                recv(timer_rx) -> msg => {
                    match msg {
                        Err(_) => break,
                        Ok(event) => self.handle_timer(event),
                    }
                }
            }
            self.view.render(&self.session)?;
        }

        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }
        self.audio.stop_music();
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::StartRequested => {
                self.view.reset_banners();
                let effects = self.session.start_game();
                self.execute(effects);
            }
            InputEvent::SlotClicked(slot) => {
                if let Some(id) = self.session.board().card_at_slot(slot) {
                    let effects = self.session.flip_card(id);
                    self.execute(effects);
                } else {
                    tracing::trace!(slot, "Click outside the board");
                }
            }
            InputEvent::Quit => {}
        }
    }

    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => {
                let effects = self.session.tick();
                self.execute(effects);
            }
            TimerEvent::DelayElapsed(token) => {
                let effects = self.session.resolve_delay(token);
                self.execute(effects);
            }
        }
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            tracing::debug!("{}", effect.description());
            match effect {
                Effect::PlayCue(cue) => self.audio.play(cue),
                Effect::StartMusic => self.audio.start_music(),
                Effect::StopMusic => self.audio.stop_music(),
                Effect::Schedule { after, token } => {
                    // One-shot delays always run to completion; stale tokens
                    // are rejected by the session's generation check
                    let tx = self.timer_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = tx.send(TimerEvent::DelayElapsed(token));
                    });
                }
                Effect::StartCountdown => {
                    if let Some(old) = self.countdown.take() {
                        old.cancel();
                    }
                    self.countdown = Some(Countdown::spawn(self.timer_tx.clone()));
                }
                Effect::StopCountdown => {
                    if let Some(countdown) = self.countdown.take() {
                        countdown.cancel();
                    }
                }
                Effect::ShowWinBanner => self.view.show_win(),
                Effect::ShowGameOverBanner => self.view.show_game_over(),
            }
        }
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }
}
