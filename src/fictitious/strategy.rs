use super::action::Action;
use super::error::Error;
use crate::PROBABILITY_TOLERANCE;
use crate::Probability;
use crate::random::RandomSource;
use std::collections::HashSet;

/// probability vector over the simplex of a player's actions.
/// order is the order the actions were supplied in, and is
/// the order every other per-action view of the player follows.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy<A>(Vec<(A, Probability)>)
where
    A: Action;

impl<A> Strategy<A>
where
    A: Action,
{
    /// validated mixed strategy. without probabilities, play uniformly.
    pub fn new(actions: Vec<A>, probabilities: Option<Vec<Probability>>) -> Result<Self, Error> {
        Self::distinct(&actions)?;
        match probabilities {
            None => Ok(Self::uniform(actions)),
            Some(probabilities) => Self::weighted(actions, probabilities),
        }
    }

    fn uniform(actions: Vec<A>) -> Self {
        let p = 1. / actions.len() as Probability;
        Self(actions.into_iter().map(|a| (a, p)).collect())
    }

    fn weighted(actions: Vec<A>, probabilities: Vec<Probability>) -> Result<Self, Error> {
        if actions.len() != probabilities.len() {
            return Err(Error::LengthMismatch {
                actions: actions.len(),
                probabilities: probabilities.len(),
            });
        }
        if let Some(p) = probabilities.iter().copied().find(|p| !p.is_finite()) {
            return Err(Error::NonFiniteProbability(p));
        }
        if let Some(p) = probabilities.iter().copied().find(|p| *p < 0.) {
            return Err(Error::NegativeProbability(p));
        }
        let sum = probabilities.iter().sum::<Probability>();
        if !((sum - 1.).abs() <= PROBABILITY_TOLERANCE) {
            return Err(Error::SumMismatch(sum));
        }
        Ok(Self(actions.into_iter().zip(probabilities).collect()))
    }

    fn distinct(actions: &[A]) -> Result<(), Error> {
        if actions.is_empty() {
            return Err(Error::NoActions);
        }
        let ref mut seen = HashSet::with_capacity(actions.len());
        match actions.iter().find(|a| !seen.insert(*a)) {
            Some(a) => Err(Error::DuplicateAction(a.to_string())),
            None => Ok(()),
        }
    }

    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.0.iter().map(|(a, _)| a)
    }

    pub fn weights(&self) -> impl Iterator<Item = Probability> + '_ {
        self.0.iter().map(|(_, p)| *p)
    }

    pub fn density(&self, action: &A) -> Probability {
        self.0
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, p)| *p)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// categorical draw, weighted by the strategy.
    pub fn sample<R>(&self, rng: &mut R) -> &A
    where
        R: RandomSource,
    {
        let weights = self.weights().collect::<Vec<_>>();
        &self.0[rng.sample_categorical(&weights)].0
    }
}
