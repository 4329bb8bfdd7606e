//! Per-generation RNG seeding with ChaCha8.
//!
//! Each generation's sampling decisions draw from a ChaCha8Rng seeded from
//! `(campaign_seed + generation)`. Same seed -> same worklists, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a deterministic RNG for a given campaign seed and generation.
pub fn generation_rng(campaign_seed: u64, generation: u64) -> ChaCha8Rng {
    let combined = campaign_seed.wrapping_add(generation);
    ChaCha8Rng::seed_from_u64(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_deterministic_rng() {
        let mut rng1 = generation_rng(42, 3);
        let mut rng2 = generation_rng(42, 3);

        let vals1: Vec<u64> = (0..10).map(|_| rng1.gen()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.gen()).collect();

        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_different_generations_different_output() {
        let mut rng1 = generation_rng(42, 0);
        let mut rng2 = generation_rng(42, 1);

        let val1: u64 = rng1.gen();
        let val2: u64 = rng2.gen();

        assert_ne!(val1, val2);
    }
}
