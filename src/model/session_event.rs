use crate::game::settings::GameSettings;

use super::{GameStats, GameStatus, Player, TimerState};

/// Outbound notifications. `NumberDrawn` and `PlayerWon` double as the
/// announcement boundary for speech/accessibility listeners; delivery is
/// synchronous fan-out and listeners must not block the tick.
#[derive(Debug, Clone)]
pub enum GameSessionEvent {
    StatusChanged(GameStatus),
    NumberDrawn(u32),
    PlayerWon { name: String },
    PlayersUpdated(Vec<Player>),
    CalledNumbersChanged(Vec<u32>),
    TimerStateChanged(TimerState),
    StatsChanged(GameStats),
    SettingsChanged(GameSettings),
    PoolExhausted,
}
