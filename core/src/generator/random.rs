use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Purely random placement. The internal generator keeps advancing, so every
/// call yields a different board even when the initial seed is fixed.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    rng: StdRng,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock so repeated plays differ.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        log::debug!("seed: {}", seed);
        Self::new(seed)
    }
}

impl Default for RandomGridGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        generate(config.width(), config.height(), config.mines, &mut self.rng)
    }
}
