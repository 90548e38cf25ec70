use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Only this many recent winners are retained; older entries fall off.
pub const RECENT_WINNERS_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentWinner {
    pub name: String,
    pub date: String,
}

/// Cumulative cross-session aggregate; loaded once at startup and persisted
/// after every completed game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u32,
    pub human_wins: u32,
    pub computer_wins: u32,
    pub total_duration: Duration,
    pub recent_winners: Vec<RecentWinner>,
}

impl GameStats {
    /// Folds one finished game into the aggregate. Pure; persistence is the
    /// caller's job.
    pub fn record_result(
        &self,
        winner_name: &str,
        winner_is_computer: bool,
        duration: Duration,
        now: DateTime<Local>,
    ) -> GameStats {
        let mut recent_winners = Vec::with_capacity(RECENT_WINNERS_CAP);
        recent_winners.push(RecentWinner {
            name: winner_name.to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        });
        recent_winners.extend(self.recent_winners.iter().cloned());
        recent_winners.truncate(RECENT_WINNERS_CAP);

        GameStats {
            total_games: self.total_games + 1,
            human_wins: self.human_wins + if winner_is_computer { 0 } else { 1 },
            computer_wins: self.computer_wins + if winner_is_computer { 1 } else { 0 },
            total_duration: self.total_duration + duration,
            recent_winners,
        }
    }

    pub fn average_duration(&self) -> Duration {
        if self.total_games == 0 {
            Duration::default()
        } else {
            self.total_duration / self.total_games
        }
    }
}
