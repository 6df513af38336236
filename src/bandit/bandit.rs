use super::error::Error;
use crate::Probability;
use crate::Reward;
use crate::Utility;
use crate::random::RandomSource;

/// k independent Bernoulli arms. arm i pays 1 with probability p_i.
#[derive(Debug, Clone, PartialEq)]
pub struct Bandit(Vec<Probability>);

impl Bandit {
    /// k arms with success rates drawn uniformly from [0, 1).
    pub fn random<R>(k: usize, rng: &mut R) -> Self
    where
        R: RandomSource,
    {
        Self((0..k).map(|_| rng.sample_uniform(0., 1.)).collect())
    }

    pub fn arms(&self) -> &[Probability] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// pays 1 iff the arm's rate beats a fresh uniform draw.
    pub fn pull<R>(&self, arm: usize, rng: &mut R) -> Result<Reward, Error>
    where
        R: RandomSource,
    {
        let p = self.0.get(arm).copied().ok_or(Error::InvalidArm {
            arm,
            arms: self.len(),
        })?;
        Ok((p > rng.sample_uniform(0., 1.)) as Reward)
    }

    /// success rate of the best arm.
    pub fn best(&self) -> Probability {
        self.0.iter().copied().fold(0., Probability::max)
    }

    /// expected regret of pulling each arm instead of the best one.
    pub fn regrets(&self) -> Vec<Utility> {
        let best = self.best();
        self.0.iter().map(|p| best - p).collect()
    }
}

impl TryFrom<Vec<Probability>> for Bandit {
    type Error = Error;
    fn try_from(arms: Vec<Probability>) -> Result<Self, Self::Error> {
        if arms.is_empty() {
            return Err(Error::NoArms);
        }
        match arms.iter().copied().find(|p| !(0. ..=1.).contains(p)) {
            Some(p) => Err(Error::InvalidProbability(p)),
            None => Ok(Self(arms)),
        }
    }
}

impl std::ops::Index<usize> for Bandit {
    type Output = Probability;
    fn index(&self, arm: usize) -> &Self::Output {
        &self.0[arm]
    }
}

impl std::fmt::Display for Bandit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-Armed Bandit with:", self.len())?;
        for (i, p) in self.0.iter().enumerate() {
            write!(f, "\n  p{}={:.3}", i + 1, p)?;
        }
        Ok(())
    }
}
