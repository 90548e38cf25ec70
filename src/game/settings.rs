use std::io;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::model::{GameError, SettingsChange};
use crate::storage::KeyValueStore;

pub const MIN_PLAYER_COUNT: u32 = 1;
pub const MAX_PLAYER_COUNT: u32 = 4;
pub const MAX_COMPUTER_COUNT: u32 = 4;
pub const MIN_SPEED_MS: u64 = 300;
pub const MAX_SPEED_MS: u64 = 3000;
pub const MIN_MAX_NUMBER: u32 = 20;
pub const MAX_MAX_NUMBER: u32 = 100;
pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 7;

/// Per-session configuration. Changes are clamped as they are applied, so a
/// session never sees values outside these ranges; `validate` is the
/// defensive backstop for hand-built settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Human players, seated first.
    pub player_count: u32,
    pub computer_count: u32,
    /// Inter-draw interval; the ticker re-reads this every cycle.
    pub speed_ms: u64,
    pub max_number: u32,
    pub grid_size: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            player_count: 1,
            computer_count: 1,
            speed_ms: 1500,
            max_number: 75,
            grid_size: 5,
        }
    }
}

impl GameSettings {
    /// Applies a partial change, clamping each field into range and keeping
    /// `max_number >= grid_size * 2` (growing the grid raises the number
    /// range rather than failing).
    pub fn apply(&self, change: &SettingsChange) -> GameSettings {
        let mut next = self.clone();
        if let Some(player_count) = change.player_count {
            next.player_count = player_count.clamp(MIN_PLAYER_COUNT, MAX_PLAYER_COUNT);
        }
        if let Some(computer_count) = change.computer_count {
            next.computer_count = computer_count.min(MAX_COMPUTER_COUNT);
        }
        if let Some(speed_ms) = change.speed_ms {
            next.speed_ms = speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        }
        if let Some(max_number) = change.max_number {
            next.max_number = max_number.clamp(MIN_MAX_NUMBER, MAX_MAX_NUMBER);
        }
        if let Some(grid_size) = change.grid_size {
            next.grid_size = grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        }
        next.max_number = next.max_number.max(next.grid_size as u32 * 2);
        next
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&self.player_count) {
            return Err(GameError::Configuration(format!(
                "player_count {} outside [{}, {}]",
                self.player_count, MIN_PLAYER_COUNT, MAX_PLAYER_COUNT
            )));
        }
        if self.computer_count > MAX_COMPUTER_COUNT {
            return Err(GameError::Configuration(format!(
                "computer_count {} above {}",
                self.computer_count, MAX_COMPUTER_COUNT
            )));
        }
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&self.speed_ms) {
            return Err(GameError::Configuration(format!(
                "speed_ms {} outside [{}, {}]",
                self.speed_ms, MIN_SPEED_MS, MAX_SPEED_MS
            )));
        }
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(GameError::Configuration(format!(
                "grid_size {} outside [{}, {}]",
                self.grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE
            )));
        }
        if self.max_number < self.grid_size as u32 * 2 {
            return Err(GameError::Configuration(format!(
                "max_number {} below grid_size * 2 = {}",
                self.max_number,
                self.grid_size * 2
            )));
        }
        Ok(())
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}

const PREFERENCES_KEY: &str = "preferences";

fn default_language() -> String {
    "en".to_string()
}
fn default_font_size() -> u32 {
    16
}

/// Presentation preferences the engine persists on behalf of the outer
/// layers; it never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            language: default_language(),
            font_size: default_font_size(),
        }
    }
}

impl Preferences {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.load(PREFERENCES_KEY) {
            Some(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(target: "settings", "{}; using default preferences", GameError::PersistenceRead(e.to_string()));
                Preferences::default()
            }),
            None => Preferences::default(),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> io::Result<()> {
        let contents = serde_json::to_string(self)?;
        store.save(PREFERENCES_KEY, &contents)
    }
}
