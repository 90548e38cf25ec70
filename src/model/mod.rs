mod card;
mod error;
mod game_stats;
mod game_status;
mod mark_grid;
mod player;
mod session_command;
mod session_event;
mod session_snapshot;
mod timer_state;

pub use card::Card;
pub use error::GameError;
pub use game_stats::{GameStats, RecentWinner, RECENT_WINNERS_CAP};
pub use game_status::GameStatus;
pub use mark_grid::MarkGrid;
pub use player::Player;
pub use session_command::{GameSessionCommand, SettingsChange};
pub use session_event::GameSessionEvent;
pub use session_snapshot::GameSessionSnapshot;
pub use timer_state::TimerState;
