use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;

use chrono::Local;
use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::Uuid;

use super::card_generator;
use super::draw_pool::DrawPool;
use super::match_engine;
use super::settings::GameSettings;
use super::stats_manager::StatsManager;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{
    GameSessionCommand, GameSessionEvent, GameSessionSnapshot, GameStatus, Player, SettingsChange,
    TimerState,
};

/// Orchestrates one play-through: owns the players, the draw pool, the called
/// history and the status machine. All mutation flows through
/// [`GameSessionCommand`]s delivered on a single-threaded channel, so ticks
/// and user actions never interleave; each tick's draw, marking and win check
/// complete before the next command is handled.
pub struct GameSession {
    settings: GameSettings,
    status: GameStatus,
    players: Vec<Player>,
    pool: DrawPool,
    /// Most recent first, append-only during a session.
    called_numbers: Vec<u32>,
    winner: Option<usize>,
    timer_state: TimerState,
    current_session_id: Uuid,
    pool_exhausted_reported: bool,
    rng: StdRng,
    stats_manager: Rc<RefCell<StatsManager>>,
    subscription_id: Option<Unsubscriber<GameSessionCommand>>,
    session_event_emitter: EventEmitter<GameSessionEvent>,
}

impl Destroyable for GameSession {
    fn destroy(&mut self) {
        if let Some(subscription_id) = self.subscription_id.take() {
            subscription_id.unsubscribe();
        }
    }
}

impl GameSession {
    pub fn new(
        command_observer: EventObserver<GameSessionCommand>,
        session_event_emitter: EventEmitter<GameSessionEvent>,
        settings: GameSettings,
        stats_manager: Rc<RefCell<StatsManager>>,
        seed: Option<u64>,
    ) -> Rc<RefCell<Self>> {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        info!(target: "game_session", "Session rng seed: {}", seed);

        let session = Self {
            settings,
            status: GameStatus::Setup,
            players: Vec::new(),
            pool: DrawPool::empty(),
            called_numbers: Vec::new(),
            winner: None,
            timer_state: TimerState::default(),
            current_session_id: Uuid::new_v4(),
            pool_exhausted_reported: false,
            rng: StdRng::seed_from_u64(seed),
            stats_manager,
            subscription_id: None,
            session_event_emitter,
        };
        let refcell = Rc::new(RefCell::new(session));
        GameSession::wire_subscription(refcell.clone(), command_observer);
        refcell
    }

    fn wire_subscription(
        session: Rc<RefCell<Self>>,
        command_observer: EventObserver<GameSessionCommand>,
    ) {
        let session_handler = session.clone();
        let subscription_id = command_observer.subscribe(move |command| {
            let mut session = session_handler.borrow_mut();
            session.handle_command(command.clone());
        });
        session.borrow_mut().subscription_id = Some(subscription_id);
    }

    fn handle_command(&mut self, command: GameSessionCommand) {
        trace!(target: "game_session", "Handling command: {:?}", command);
        match command {
            GameSessionCommand::Start => self.start_game(),
            GameSessionCommand::Tick => self.tick(),
            GameSessionCommand::Pause => self.pause_game(),
            GameSessionCommand::Resume => self.resume_game(),
            GameSessionCommand::TogglePause => self.toggle_pause(),
            GameSessionCommand::Restart => self.restart(),
            GameSessionCommand::ChangeSettings(change) => self.change_settings(&change),
            GameSessionCommand::ResetStats => self.reset_stats(),
        }
    }

    /// SETUP -> PLAYING. Builds the roster (humans first, then computers, in
    /// registration order), deals cards, shuffles a fresh pool and starts the
    /// clock. Nothing is assigned until every card generates, so a
    /// configuration error leaves the session untouched in SETUP.
    fn start_game(&mut self) {
        if let Err(e) = self.settings.validate() {
            warn!(target: "game_session", "Refusing to start: {}", e);
            return;
        }

        let roster_size = (self.settings.player_count + self.settings.computer_count) as usize;
        let mut players = Vec::with_capacity(roster_size);
        for i in 0..self.settings.player_count {
            match card_generator::generate(self.settings.grid_size, self.settings.max_number, &mut self.rng) {
                Ok(card) => players.push(Player::new(
                    format!("p-{}", i),
                    format!("Player {}", i + 1),
                    false,
                    card,
                )),
                Err(e) => {
                    warn!(target: "game_session", "Card generation failed: {}", e);
                    return;
                }
            }
        }
        for i in 0..self.settings.computer_count {
            match card_generator::generate(self.settings.grid_size, self.settings.max_number, &mut self.rng) {
                Ok(card) => players.push(Player::new(
                    format!("c-{}", i),
                    format!("Computer {}", i + 1),
                    true,
                    card,
                )),
                Err(e) => {
                    warn!(target: "game_session", "Card generation failed: {}", e);
                    return;
                }
            }
        }

        self.players = players;
        self.pool = DrawPool::new(self.settings.max_number, &mut self.rng);
        self.called_numbers.clear();
        self.winner = None;
        self.pool_exhausted_reported = false;
        self.timer_state = TimerState::default();
        self.current_session_id = Uuid::new_v4();
        self.status = GameStatus::Playing;
        info!(
            target: "game_session",
            "New game {}; {} players, {} computers, {}x{} grid, numbers up to {}",
            self.current_session_id,
            self.settings.player_count,
            self.settings.computer_count,
            self.settings.grid_size,
            self.settings.grid_size,
            self.settings.max_number
        );

        self.session_event_emitter
            .emit(GameSessionEvent::StatusChanged(self.status));
        self.session_event_emitter
            .emit(GameSessionEvent::PlayersUpdated(self.players.clone()));
        self.session_event_emitter
            .emit(GameSessionEvent::CalledNumbersChanged(vec![]));
        self.session_event_emitter
            .emit(GameSessionEvent::TimerStateChanged(self.timer_state.clone()));
    }

    /// One scheduled step: draw, mark every card, detect the first winner.
    /// The updated roster is assembled in full before being committed, so a
    /// tick never leaves partially-marked state behind.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            trace!(target: "game_session", "Tick ignored in {:?}", self.status);
            return;
        }

        let called = match self.pool.draw() {
            Ok(n) => n,
            Err(_) => {
                // Quiet stalemate: stop producing numbers but stay in
                // PLAYING until an explicit restart.
                if !self.pool_exhausted_reported {
                    self.pool_exhausted_reported = true;
                    info!(
                        target: "game_session",
                        "Pool exhausted after {} draws with no winner",
                        self.called_numbers.len()
                    );
                    self.session_event_emitter.emit(GameSessionEvent::PoolExhausted);
                }
                return;
            }
        };

        self.called_numbers.insert(0, called);
        trace!(
            target: "game_session",
            "Drew {} ({} remaining)",
            called,
            self.pool.remaining()
        );

        let mut updated = Vec::with_capacity(self.players.len());
        let mut winner_index = None;
        for (index, player) in self.players.iter().enumerate() {
            let (marks, is_winner) = match_engine::apply_draw(&player.card, &player.marks, called);
            let mut player = player.clone();
            player.marks = marks;
            player.has_won = player.has_won || is_winner;
            // Simultaneous completions resolve to the first player in
            // registration order.
            if is_winner && winner_index.is_none() {
                winner_index = Some(index);
            }
            updated.push(player);
        }
        self.players = updated;

        self.session_event_emitter
            .emit(GameSessionEvent::NumberDrawn(called));
        self.session_event_emitter
            .emit(GameSessionEvent::CalledNumbersChanged(self.called_numbers.clone()));
        self.session_event_emitter
            .emit(GameSessionEvent::PlayersUpdated(self.players.clone()));

        if let Some(index) = winner_index {
            self.declare_winner(index);
        }
    }

    fn declare_winner(&mut self, winner_index: usize) {
        self.winner = Some(winner_index);
        self.status = GameStatus::Won;
        self.timer_state = self.timer_state.ended(SystemTime::now());
        let duration = self.timer_state.elapsed();
        let winner = self.players[winner_index].clone();
        info!(
            target: "game_session",
            "{} won game {} after {} draws in {:?}",
            winner.name,
            self.current_session_id,
            self.called_numbers.len(),
            duration
        );

        let stats = self.stats_manager.borrow_mut().record_result(
            &winner.name,
            winner.is_computer,
            duration,
            Local::now(),
        );

        self.session_event_emitter
            .emit(GameSessionEvent::PlayerWon { name: winner.name });
        self.session_event_emitter
            .emit(GameSessionEvent::StatusChanged(self.status));
        self.session_event_emitter
            .emit(GameSessionEvent::TimerStateChanged(self.timer_state.clone()));
        self.session_event_emitter
            .emit(GameSessionEvent::StatsChanged(stats));
    }

    fn pause_game(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.status = GameStatus::Paused;
        self.timer_state = self.timer_state.paused(SystemTime::now());
        self.session_event_emitter
            .emit(GameSessionEvent::StatusChanged(self.status));
        self.session_event_emitter
            .emit(GameSessionEvent::TimerStateChanged(self.timer_state.clone()));
    }

    fn resume_game(&mut self) {
        if self.status != GameStatus::Paused {
            return;
        }
        self.status = GameStatus::Playing;
        self.timer_state = self.timer_state.resumed(SystemTime::now());
        self.session_event_emitter
            .emit(GameSessionEvent::StatusChanged(self.status));
        self.session_event_emitter
            .emit(GameSessionEvent::TimerStateChanged(self.timer_state.clone()));
    }

    fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Playing => self.pause_game(),
            GameStatus::Paused => self.resume_game(),
            // No effect once won or before start.
            GameStatus::Won | GameStatus::Setup => (),
        }
    }

    /// Back to SETUP from any state, discarding all play state. Persisted
    /// stats are untouched.
    fn restart(&mut self) {
        self.status = GameStatus::Setup;
        self.players.clear();
        self.pool = DrawPool::empty();
        self.called_numbers.clear();
        self.winner = None;
        self.pool_exhausted_reported = false;
        self.timer_state = TimerState::default();

        self.session_event_emitter
            .emit(GameSessionEvent::StatusChanged(self.status));
        self.session_event_emitter
            .emit(GameSessionEvent::PlayersUpdated(vec![]));
        self.session_event_emitter
            .emit(GameSessionEvent::CalledNumbersChanged(vec![]));
    }

    fn change_settings(&mut self, change: &SettingsChange) {
        self.settings = self.settings.apply(change);
        trace!(target: "game_session", "Settings now {:?}", self.settings);
        self.session_event_emitter
            .emit(GameSessionEvent::SettingsChanged(self.settings.clone()));
    }

    fn reset_stats(&mut self) {
        let stats = self.stats_manager.borrow_mut().reset();
        self.session_event_emitter
            .emit(GameSessionEvent::StatsChanged(stats));
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn remaining_count(&self) -> usize {
        self.pool.remaining()
    }

    pub fn snapshot(&self) -> GameSessionSnapshot {
        GameSessionSnapshot {
            status: self.status,
            players: self.players.clone(),
            called_numbers: self.called_numbers.clone(),
            remaining_count: self.pool.remaining(),
            winner: self.winner.map(|index| self.players[index].clone()),
            stats: self.stats_manager.borrow().stats().clone(),
            settings: self.settings.clone(),
        }
    }
}
