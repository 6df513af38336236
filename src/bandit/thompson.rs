use super::policy::Policy;
use super::policy::argmax;
use crate::Reward;
use crate::random::RandomSource;

/// Thompson sampling with a Beta(1, 1) prior on every arm.
/// each step draws once from every posterior and plays the best draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Thompson(Vec<(f64, f64)>);

impl Thompson {
    pub fn new(arms: usize) -> Self {
        Self(vec![(1., 1.); arms])
    }

    /// (alpha, beta) of each arm's posterior.
    pub fn params(&self) -> &[(f64, f64)] {
        &self.0
    }

    /// posterior mean of an arm's success rate.
    pub fn mean(&self, arm: usize) -> f64 {
        let (a, b) = self.0[arm];
        a / (a + b)
    }
}

impl Policy for Thompson {
    fn name(&self) -> String {
        String::from("Thompson sampling")
    }

    fn select<R>(&mut self, _: usize, rng: &mut R) -> usize
    where
        R: RandomSource,
    {
        argmax(
            self.0
                .iter()
                .map(|(a, b)| rng.sample_beta(*a, *b))
                .collect::<Vec<_>>(),
        )
    }

    fn update(&mut self, arm: usize, reward: Reward) {
        let r = reward as f64;
        let (a, b) = &mut self.0[arm];
        *a += r;
        *b += 1. - r;
    }
}
