use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Settings violate an invariant; rejected before they reach a session.
    Configuration(String),
    /// Draw attempted against an exhausted pool.
    EmptyPool,
    /// Stored state was missing or malformed; callers fall back to defaults.
    PersistenceRead(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration(reason) => write!(f, "invalid configuration: {}", reason),
            GameError::EmptyPool => write!(f, "draw pool is exhausted"),
            GameError::PersistenceRead(reason) => {
                write!(f, "could not read persisted state: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {}
