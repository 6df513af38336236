use super::action::Action;
use super::error::Error;
use crate::Probability;

/// how many times each opponent action has been observed.
/// keys are fixed at construction and never change; counts only grow.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<B>(Vec<(B, usize)>)
where
    B: Action;

impl<B> Tally<B>
where
    B: Action,
{
    pub fn zeroed(actions: &[B]) -> Self {
        Self(actions.iter().cloned().map(|b| (b, 0)).collect())
    }

    /// count one more observation of `action`. unknown actions
    /// leave the tally untouched.
    pub fn record(&mut self, action: &B) -> Result<(), Error> {
        self.0
            .iter_mut()
            .find(|(b, _)| b == action)
            .map(|(_, n)| *n += 1)
            .ok_or_else(|| Error::UnknownAction(action.to_string()))
    }

    pub fn count(&self, action: &B) -> Option<usize> {
        self.0.iter().find(|(b, _)| b == action).map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }

    pub fn actions(&self) -> impl Iterator<Item = &B> {
        self.0.iter().map(|(b, _)| b)
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|(_, n)| *n)
    }

    /// empirical distribution of the observations, in key order.
    /// with nothing observed yet, every action is equally likely.
    pub fn belief(&self) -> Vec<Probability> {
        match self.total() {
            0 => vec![1. / self.0.len() as Probability; self.0.len()],
            n => self.counts().map(|c| c as Probability / n as Probability).collect(),
        }
    }
}
