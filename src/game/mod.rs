pub mod card_generator;
pub mod draw_pool;
pub mod game_session;
pub mod match_engine;
pub mod settings;
pub mod share;
pub mod stats_manager;
pub mod ticker;
