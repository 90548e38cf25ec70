use crate::model::{Card, MarkGrid};

/// Applies one called number to a card's coverage grid. Marking is monotonic
/// and idempotent: already-marked cells stay marked, and a number matching
/// several cells marks all of them. The returned flag is the blackout win
/// test (every cell covered), not a line/row/column rule.
pub fn apply_draw(card: &Card, marks: &MarkGrid, called: u32) -> (MarkGrid, bool) {
    let mut next = marks.clone();
    for row in 0..card.grid_size() {
        for col in 0..card.grid_size() {
            if card.value(row, col) == called {
                next.mark(row, col);
            }
        }
    }
    let is_winner = next.is_full();
    (next, is_winner)
}
