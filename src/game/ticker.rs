use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::trace;

use super::game_session::GameSession;
use crate::events::EventEmitter;
use crate::model::{GameSessionCommand, GameStatus};

/// Drives a session by emitting `Tick` commands at the configured speed.
/// Status and speed are re-read every cycle, so a settings change takes
/// effect on the next interval rather than rescheduling the one in flight,
/// and a session that leaves PLAYING stops receiving ticks without any
/// dangling timer. Tests skip this entirely and emit `Tick` directly.
pub struct Ticker {
    session: Rc<RefCell<GameSession>>,
    command_emitter: EventEmitter<GameSessionCommand>,
}

impl Ticker {
    pub fn new(
        session: Rc<RefCell<GameSession>>,
        command_emitter: EventEmitter<GameSessionCommand>,
    ) -> Self {
        Self {
            session,
            command_emitter,
        }
    }

    /// Runs until the session wins, returns to SETUP, or exhausts its pool.
    pub fn run_blocking(&self) {
        loop {
            let (status, speed_ms, remaining) = {
                let session = self.session.borrow();
                (
                    session.status(),
                    session.settings().speed_ms,
                    session.remaining_count(),
                )
            };
            match status {
                GameStatus::Won | GameStatus::Setup => break,
                GameStatus::Playing if remaining == 0 => break,
                GameStatus::Playing | GameStatus::Paused => (),
            }

            thread::sleep(Duration::from_millis(speed_ms));
            trace!(target: "ticker", "tick");
            self.command_emitter.emit(GameSessionCommand::Tick);
        }
    }
}
