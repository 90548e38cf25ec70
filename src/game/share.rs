use std::time::Duration;

use crate::model::GameStats;

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Win summary for an external share/clipboard mechanism. Pure formatting
/// over the winner and cumulative stats.
pub fn share_summary(winner_name: &str, stats: &GameStats) -> String {
    format!(
        "{} won at Quickbingo! 🏆\n\n\
         My global stats:\n\
         • Total games: {}\n\
         • Player wins: {}\n\
         • Average duration: {}",
        winner_name,
        stats.total_games,
        stats.human_wins,
        format_duration(stats.average_duration())
    )
}
