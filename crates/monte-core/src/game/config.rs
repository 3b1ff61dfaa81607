//! Configuration for a game.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a game's random number source.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible runs. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the RNG seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
