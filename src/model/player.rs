use serde::{Deserialize, Serialize};

use super::{Card, MarkGrid};

/// One participant in a session, human or computer controlled. Created at
/// session start and discarded on restart; `has_won` latches true on the
/// first draw that fully covers the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub is_computer: bool,
    pub card: Card,
    pub marks: MarkGrid,
    pub has_won: bool,
}

impl Player {
    pub fn new(id: String, name: String, is_computer: bool, card: Card) -> Self {
        let marks = MarkGrid::new(card.grid_size());
        Self {
            id,
            name,
            is_computer,
            card,
            marks,
            has_won: false,
        }
    }
}
