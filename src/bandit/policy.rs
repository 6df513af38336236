use crate::Reward;
use crate::random::RandomSource;

/// an arm-selection rule that learns from the rewards it sees.
pub trait Policy {
    /// label used in logs and leaderboards.
    fn name(&self) -> String;

    /// choose an arm at iteration `t`, counting from zero.
    fn select<R>(&mut self, t: usize, rng: &mut R) -> usize
    where
        R: RandomSource;

    /// learn from the reward paid by `arm`.
    fn update(&mut self, arm: usize, reward: Reward);
}

/// index of the largest score. ties go to the lowest index.
pub(crate) fn argmax<I>(scores: I) -> usize
where
    I: IntoIterator<Item = f64>,
{
    scores
        .into_iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(i, best), (j, x)| match x > best {
            true => (j, x),
            false => (i, best),
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first() {
        assert_eq!(argmax([1., 3., 3., 2.]), 1);
        assert_eq!(argmax([f64::INFINITY, f64::INFINITY]), 0);
        assert_eq!(argmax([0.5]), 0);
        assert_eq!(argmax([0., f64::INFINITY, 9.]), 1);
    }
}
