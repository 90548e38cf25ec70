use serde::{Deserialize, Serialize};

use crate::game::settings::GameSettings;

use super::{GameStats, GameStatus, Player};

/// Read-only view of the session handed to a presentation layer. Produced
/// fresh on demand; mutating it has no effect on the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSessionSnapshot {
    pub status: GameStatus,
    pub players: Vec<Player>,
    /// Most recent first.
    pub called_numbers: Vec<u32>,
    pub remaining_count: usize,
    pub winner: Option<Player>,
    pub stats: GameStats,
    pub settings: GameSettings,
}
