use super::bandit::Bandit;
use super::error::Error;
use crate::Probability;
use crate::random::RandomSource;

/// posterior of one arm's success rate under repeated pulls.
/// after `a` wins and `b` losses the posterior mean is a / (a + b)
/// with standard deviation √(ab / ((a + b)² (a + b + 1))).
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    arm: usize,
    rate: Probability,
    mean: Vec<f64>,
    deviation: Vec<f64>,
}

impl Convergence {
    pub fn run<R>(bandit: &Bandit, arm: usize, samples: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: RandomSource,
    {
        if arm >= bandit.len() {
            return Err(Error::InvalidArm {
                arm,
                arms: bandit.len(),
            });
        }
        let mut wins = 0.;
        let mut losses = 0.;
        let mut mean = Vec::with_capacity(samples);
        let mut deviation = Vec::with_capacity(samples);
        for _ in 0..samples {
            let r = bandit.pull(arm, rng)? as f64;
            wins += r;
            losses += 1. - r;
            let (a, b) = (wins, losses);
            mean.push(a / (a + b));
            deviation.push((a * b / ((a + b).powi(2) * (a + b + 1.))).sqrt());
        }
        Ok(Self {
            arm,
            rate: bandit[arm],
            mean,
            deviation,
        })
    }

    pub fn arm(&self) -> usize {
        self.arm
    }
    pub fn rate(&self) -> Probability {
        self.rate
    }
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }
    pub fn deviation(&self) -> &[f64] {
        &self.deviation
    }
}

impl std::fmt::Display for Convergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arm with p={}: {:.3}±{:.3} after {} pulls",
            self.rate,
            self.mean.last().copied().unwrap_or_default(),
            self.deviation.last().copied().unwrap_or_default(),
            self.mean.len(),
        )
    }
}
