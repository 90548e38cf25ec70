use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use quickbingo::events::Channel;
use quickbingo::game::game_session::GameSession;
use quickbingo::game::settings::GameSettings;
use quickbingo::game::share;
use quickbingo::game::stats_manager::StatsManager;
use quickbingo::game::ticker::Ticker;
use quickbingo::model::{GameSessionCommand, GameSessionEvent};
use quickbingo::storage::FileStore;

fn data_dir() -> PathBuf {
    std::env::var("QUICKBINGO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("quickbingo"))
}

fn main() {
    env_logger::init();

    let stats_manager = Rc::new(RefCell::new(StatsManager::new(Box::new(FileStore::new(
        data_dir(),
    )))));

    let (command_emitter, command_observer) = Channel::<GameSessionCommand>::new();
    let (event_emitter, event_observer) = Channel::<GameSessionEvent>::new();

    let _announcements = event_observer.subscribe(|event| match event {
        GameSessionEvent::NumberDrawn(n) => println!("  -> {}", n),
        GameSessionEvent::PlayerWon { name } => println!("BINGO! {} wins!", name),
        GameSessionEvent::PoolExhausted => println!("Pool exhausted with no winner."),
        _ => (),
    });

    let session = GameSession::new(
        command_observer,
        event_emitter,
        GameSettings::default(),
        stats_manager,
        GameSettings::seed_from_env(),
    );

    println!("Starting a game with default settings...");
    command_emitter.emit(GameSessionCommand::Start);

    let ticker = Ticker::new(session.clone(), command_emitter.clone());
    ticker.run_blocking();

    let snapshot = session.borrow().snapshot();
    if let Some(winner) = &snapshot.winner {
        println!();
        println!("{}", share::share_summary(&winner.name, &snapshot.stats));
    }
}
