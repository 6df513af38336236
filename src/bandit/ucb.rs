use super::policy::Policy;
use super::policy::argmax;
use crate::Reward;
use crate::random::RandomSource;

/// upper confidence bound selection. the index of an arm is
/// its empirical mean plus `c · √(ln t / n)`, and infinite
/// until the arm has been pulled once.
#[derive(Debug, Clone, PartialEq)]
pub struct Ucb {
    c: f64,
    counts: Vec<usize>,
    rewards: Vec<f64>,
}

impl Ucb {
    pub fn new(arms: usize, c: f64) -> Self {
        Self {
            c,
            counts: vec![0; arms],
            rewards: vec![0.; arms],
        }
    }

    pub fn exploration(&self) -> f64 {
        self.c
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn index(&self, arm: usize, t: usize) -> f64 {
        match self.counts[arm] {
            0 => f64::INFINITY,
            n => {
                let n = n as f64;
                let ln = (t.max(1) as f64).ln();
                self.rewards[arm] / n + self.c * (ln / n).sqrt()
            }
        }
    }
}

impl Policy for Ucb {
    fn name(&self) -> String {
        format!("UCB with c={:.0e}", self.c)
    }

    fn select<R>(&mut self, t: usize, _: &mut R) -> usize
    where
        R: RandomSource,
    {
        argmax((0..self.counts.len()).map(|arm| self.index(arm, t)))
    }

    fn update(&mut self, arm: usize, reward: Reward) {
        self.counts[arm] += 1;
        self.rewards[arm] += reward as f64;
    }
}
