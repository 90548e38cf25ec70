use std::time::Duration;

use chrono::{DateTime, Local};
use log::warn;

use crate::model::{GameError, GameStats};
use crate::storage::KeyValueStore;

const STATS_KEY: &str = "stats";

/// Owns the cumulative [`GameStats`]: loads them once at construction,
/// applies the pure fold per completed game, and writes back after every
/// change. Persistence failures are logged and swallowed; they never
/// interrupt gameplay.
pub struct StatsManager {
    store: Box<dyn KeyValueStore>,
    stats: GameStats,
}

impl StatsManager {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let stats = match store.load(STATS_KEY) {
            Some(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(target: "stats", "{}; starting from zeroed stats", GameError::PersistenceRead(e.to_string()));
                GameStats::default()
            }),
            None => GameStats::default(),
        };
        Self { store, stats }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn record_result(
        &mut self,
        winner_name: &str,
        winner_is_computer: bool,
        duration: Duration,
        now: DateTime<Local>,
    ) -> GameStats {
        self.stats = self
            .stats
            .record_result(winner_name, winner_is_computer, duration, now);
        self.persist();
        self.stats.clone()
    }

    pub fn reset(&mut self) -> GameStats {
        self.stats = GameStats::default();
        self.persist();
        self.stats.clone()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.stats) {
            Ok(contents) => {
                if let Err(e) = self.store.save(STATS_KEY, &contents) {
                    warn!(target: "stats", "Failed to persist stats: {}", e);
                }
            }
            Err(e) => warn!(target: "stats", "Failed to serialize stats: {}", e),
        }
    }
}
