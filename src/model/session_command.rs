/// Partial settings update; `None` fields are left untouched. Applied values
/// are clamped into range before they reach the session.
#[derive(Debug, Clone, Default)]
pub struct SettingsChange {
    pub player_count: Option<u32>,
    pub computer_count: Option<u32>,
    pub speed_ms: Option<u64>,
    pub max_number: Option<u32>,
    pub grid_size: Option<usize>,
}

/// Inbound commands; the only way anything outside the session mutates it.
#[derive(Debug, Clone)]
pub enum GameSessionCommand {
    Start,
    Tick,
    Pause,
    Resume,
    TogglePause,
    Restart,
    ChangeSettings(SettingsChange),
    ResetStats,
}
