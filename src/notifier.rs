//! Session event observers
//!
//! Front-ends drain `GameEvent`s after each clock update and hand them to a
//! notifier (sound on the web, log lines on native). Notifiers are
//! fire-and-forget: nothing they do feeds back into the simulation.

use crate::sim::{GameEvent, TerminalCause};

pub trait Notifier {
    /// An apple was eaten
    fn on_acquisition(&mut self, _score: u64) {}

    /// The tick rate went up
    fn on_speed_change(&mut self, _interval_ms: u32) {}

    /// The session ended
    fn on_game_over(&mut self, _cause: TerminalCause, _score: u64) {}
}

/// Forward a batch of events in order
pub fn dispatch<N: Notifier + ?Sized>(notifier: &mut N, events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::AppleEaten { score, .. } => notifier.on_acquisition(score),
            GameEvent::SpeedChanged { interval_ms } => notifier.on_speed_change(interval_ms),
            GameEvent::GameOver { cause, score } => notifier.on_game_over(cause, score),
        }
    }
}

/// Writes events to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn on_acquisition(&mut self, score: u64) {
        log::info!("Gulp! score {}", score);
    }

    fn on_speed_change(&mut self, interval_ms: u32) {
        log::info!("Faster: {} ms per tick", interval_ms);
    }

    fn on_game_over(&mut self, cause: TerminalCause, score: u64) {
        log::info!("Game over ({}), final score {}", cause.as_str(), score);
    }
}
