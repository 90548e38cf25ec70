use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::GameError;

/// The shuffled, exhaustible set of not-yet-called numbers. Shrinks by
/// exactly one element per draw; drawn + remaining always cover
/// `[1, max_number]` with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPool {
    remaining: Vec<u32>,
}

impl DrawPool {
    /// Unbiased permutation of `1..=max_number`.
    pub fn new(max_number: u32, rng: &mut impl Rng) -> Self {
        let mut remaining: Vec<u32> = (1..=max_number).collect();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Pool with nothing to draw; the SETUP placeholder.
    pub fn empty() -> Self {
        Self { remaining: vec![] }
    }

    #[cfg(test)]
    pub fn from_numbers(remaining: Vec<u32>) -> Self {
        Self { remaining }
    }

    pub fn draw(&mut self) -> Result<u32, GameError> {
        if self.remaining.is_empty() {
            return Err(GameError::EmptyPool);
        }
        Ok(self.remaining.remove(0))
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
