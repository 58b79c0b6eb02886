//! Stochastic matrix generators for fuzz round-trips
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsv_core::{Row, RowMatrix};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("RSV_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| rand::random());
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random cell text, biased toward the characters that stress the
    /// wire format: empty strings, control bytes, multi-byte UTF-8 and
    /// supplementary-plane scalars.
    pub fn text(&mut self) -> String {
        const POOL: &[char] = &[
            'a', 'b', 'z', 'A', 'Z', '0', '9', ' ', '_', '"', '\\', ',', '[', ']',
            '\u{0}', '\n', '\r', '\t', '\u{7f}', 'ö', 'é', 'ß', '¡', 'あ', '日', '€',
            '\u{fffd}', '🌎', '🌏', '𝄞', '😀',
        ];
        let len = self.geometric(0.8);
        (0..len)
            .map(|_| POOL[self.rng.gen_range(0..POOL.len())])
            .collect()
    }

    /// Random cell: null roughly one time in five.
    pub fn cell(&mut self) -> Option<String> {
        if self.chance(0.2) {
            None
        } else {
            Some(self.text())
        }
    }

    /// Random row (may be empty).
    pub fn row(&mut self) -> Row {
        let len = self.geometric(0.7);
        (0..len).map(|_| self.cell()).collect()
    }

    /// Random matrix (may be empty, rows jagged).
    pub fn matrix(&mut self) -> RowMatrix {
        let len = self.geometric(0.7);
        (0..len).map(|_| self.row()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.matrix(), g2.matrix());
        }
    }
}
