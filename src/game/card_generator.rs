use itertools::Itertools;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Card, GameError};

/// Generates a card by partitioning `[1, max_number]` into `grid_size`
/// contiguous column ranges (the last absorbs the remainder), picking
/// `grid_size` distinct values per column via shuffle-and-take, then
/// transposing the picks into rows.
pub fn generate(
    grid_size: usize,
    max_number: u32,
    rng: &mut impl Rng,
) -> Result<Card, GameError> {
    let range_size = max_number as usize / grid_size;
    if range_size < grid_size {
        return Err(GameError::Configuration(format!(
            "column ranges of {} numbers cannot fill {} rows without duplicates (max_number {}, grid_size {})",
            range_size, grid_size, max_number, grid_size
        )));
    }

    let mut columns: Vec<Vec<u32>> = Vec::with_capacity(grid_size);
    for col in 0..grid_size {
        let min = (col * range_size) as u32 + 1;
        let max = if col == grid_size - 1 {
            max_number
        } else {
            ((col + 1) * range_size) as u32
        };
        let mut pool: Vec<u32> = (min..=max).collect();
        pool.shuffle(rng);
        pool.truncate(grid_size);
        columns.push(pool);
    }

    // Row r takes the r-th pick of every column.
    let rows: Vec<Vec<u32>> = (0..grid_size)
        .map(|row| (0..grid_size).map(|col| columns[col][row]).collect())
        .collect();

    let card = Card::from_rows(rows);
    debug_assert!(card.values().all_unique());
    trace!(target: "card_generator", "Generated card: {:?}", card);
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_card_has_distinct_values_within_bounds() {
        for (grid_size, max_number) in [(3, 20), (5, 75), (7, 100), (4, 16)] {
            let mut rng = StdRng::seed_from_u64(7);
            let card = generate(grid_size, max_number, &mut rng).unwrap();

            assert_eq!(card.grid_size(), grid_size);
            let values: Vec<u32> = card.values().collect();
            assert_eq!(values.len(), grid_size * grid_size);
            assert!(values.iter().all_unique());
            assert!(values.iter().all(|&v| v >= 1 && v <= max_number));
        }
    }

    #[test]
    fn test_columns_are_range_partitioned() {
        let mut rng = StdRng::seed_from_u64(11);
        let card = generate(5, 75, &mut rng).unwrap();

        for row in 0..5 {
            for col in 0..5 {
                let value = card.value(row, col);
                let min = col as u32 * 15 + 1;
                let max = if col == 4 { 75 } else { (col as u32 + 1) * 15 };
                assert!(
                    value >= min && value <= max,
                    "value {} at column {} outside [{}, {}]",
                    value,
                    col,
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn test_last_column_absorbs_remainder() {
        // 23 / 4 = 5, so the last column's range is [16, 23].
        let mut rng = StdRng::seed_from_u64(3);
        let card = generate(4, 23, &mut rng).unwrap();

        for row in 0..4 {
            let value = card.value(row, 3);
            assert!((16..=23).contains(&value));
        }
    }

    #[test]
    fn test_undersized_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        // 10 / 5 = 2 candidates per column, not enough for 5 rows.
        let result = generate(5, 10, &mut rng);
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn test_generation_is_reproducible_for_a_seed() {
        let card_a = generate(5, 75, &mut StdRng::seed_from_u64(42)).unwrap();
        let card_b = generate(5, 75, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(card_a, card_b);
    }
}
