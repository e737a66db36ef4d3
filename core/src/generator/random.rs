use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform sampler over every cell except the excluded one.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    seed: u64,
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed from the operating system.
    pub fn from_os_rng() -> Self {
        let seed = SmallRng::from_os_rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineSampler for RandomSampler {
    fn sample(&mut self, total: usize, exclude: usize, count: usize) -> Vec<usize> {
        // pick among the `total - 1` free slots, then shift past the excluded index
        let free = total.saturating_sub(1);
        if count > free {
            log::warn!(
                "Cannot place {} mines in {} free cells, placing {}",
                count,
                free,
                free
            );
        }
        rand::seq::index::sample(&mut self.rng, free, count.min(free))
            .into_iter()
            .map(|slot| if slot >= exclude { slot + 1 } else { slot })
            .collect()
    }
}
