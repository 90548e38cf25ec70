use serde::{Deserialize, Serialize};

/// A player's personal grid of numbers to match against calls. Immutable
/// once generated; every value is distinct and column `c` only holds values
/// from that column's slice of the number range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rows: Vec<Vec<u32>>,
}

impl Card {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    pub fn grid_size(&self) -> usize {
        self.rows.len()
    }

    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.values().any(|v| v == number)
    }
}
