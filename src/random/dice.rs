use super::source::RandomSource;
use crate::Arbitrary;
use crate::Probability;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// the default RandomSource, a single SmallRng stream.
/// seed it for reproducible runs, or draw it from OS entropy
/// via Arbitrary for one-shot experiments.
#[derive(Debug, Clone)]
pub struct Dice(SmallRng);

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Arbitrary for Dice {
    fn random() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl RandomSource for Dice {
    fn sample_categorical(&mut self, weights: &[Probability]) -> usize {
        WeightedIndex::new(weights.iter().copied())
            .expect("non-negative weights with positive sum")
            .sample(&mut self.0)
    }

    fn sample_uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.0.random::<f64>()
    }

    fn sample_beta(&mut self, alpha: f64, beta: f64) -> f64 {
        rand_distr::Beta::new(alpha, beta)
            .expect("positive beta parameters")
            .sample(&mut self.0)
    }

    fn sample_normal(&mut self) -> f64 {
        self.0.sample(rand_distr::StandardNormal)
    }
}
