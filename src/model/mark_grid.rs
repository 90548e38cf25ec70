use serde::{Deserialize, Serialize};

/// Boolean coverage grid, same shape as its [`Card`](super::Card). Starts
/// all-false; cells only ever flip from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkGrid {
    cells: Vec<Vec<bool>>,
}

impl MarkGrid {
    pub fn new(grid_size: usize) -> Self {
        Self {
            cells: vec![vec![false; grid_size]; grid_size],
        }
    }

    pub fn grid_size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn mark(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }

    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&m| m).count())
            .sum()
    }

    /// Blackout test: every cell covered.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&m| m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unmarked() {
        let grid = MarkGrid::new(3);
        assert_eq!(grid.marked_count(), 0);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_full_coverage() {
        let mut grid = MarkGrid::new(2);
        for row in 0..2 {
            for col in 0..2 {
                grid.mark(row, col);
            }
        }
        assert_eq!(grid.marked_count(), 4);
        assert!(grid.is_full());
    }

    #[test]
    fn test_one_short_of_full_is_not_full() {
        let mut grid = MarkGrid::new(2);
        grid.mark(0, 0);
        grid.mark(0, 1);
        grid.mark(1, 0);
        assert!(!grid.is_full());
    }
}
