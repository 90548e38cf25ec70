use serde::{Deserialize, Serialize};

/// Session lifecycle. SETUP -> PLAYING -> {PAUSED <-> PLAYING} -> WON;
/// explicit restart returns to SETUP from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Setup,
    Playing,
    Paused,
    Won,
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Setup
    }
}
