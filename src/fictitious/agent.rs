use super::action::Action;
use super::error::Error;
use super::mode::Mode;
use super::rewards::RewardTable;
use super::strategy::Strategy;
use super::tally::Tally;
use crate::Probability;
use crate::Utility;
use crate::random::RandomSource;

/// a fictitious player. plays own actions `A` against an opponent
/// whose actions are `B`, remembering how often it has seen each `B`.
#[derive(Debug, Clone)]
pub struct Agent<A, B>
where
    A: Action,
    B: Action,
{
    strategy: Strategy<A>,
    rewards: RewardTable<A, B>,
    tally: Tally<B>,
    mode: Mode,
}

impl<A, B> Agent<A, B>
where
    A: Action,
    B: Action,
{
    /// the reward table rows must be exactly the actions.
    /// without probabilities the exploring strategy is uniform.
    pub fn new(
        actions: Vec<A>,
        rewards: RewardTable<A, B>,
        probabilities: Option<Vec<Probability>>,
    ) -> Result<Self, Error> {
        let strategy = Strategy::new(actions, probabilities)?;
        if let Some(a) = strategy.actions().find(|a| rewards.row(a).is_none()) {
            return Err(Error::RewardMismatch(a.to_string()));
        }
        if let Some(a) = rewards.rows().iter().find(|r| strategy.actions().all(|s| s != *r)) {
            return Err(Error::RewardMismatch(a.to_string()));
        }
        let tally = Tally::zeroed(rewards.cols());
        Ok(Self {
            strategy,
            rewards,
            tally,
            mode: Mode::default(),
        })
    }

    pub fn strategy(&self) -> &Strategy<A> {
        &self.strategy
    }
    pub fn rewards(&self) -> &RewardTable<A, B> {
        &self.rewards
    }
    pub fn tally(&self) -> &Tally<B> {
        &self.tally
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn explore(&mut self) {
        self.mode = Mode::Exploring;
    }
    pub fn respond(&mut self) {
        self.mode = Mode::BestResponding;
    }

    /// sample the mixed strategy while exploring,
    /// otherwise play the best response to the tally.
    pub fn select_action<R>(&self, rng: &mut R) -> A
    where
        R: RandomSource,
    {
        match self.mode {
            Mode::Exploring => self.strategy.sample(rng).clone(),
            Mode::BestResponding => self.select_best_response(),
        }
    }

    /// arg-max of empirical expected utility.
    /// ties go to the earliest action in strategy order.
    pub fn select_best_response(&self) -> A {
        let belief = self.tally.belief();
        self.strategy
            .actions()
            .map(|a| (a, self.utility(a, &belief)))
            .fold(None, |best: Option<(&A, Utility)>, (a, u)| match best {
                Some((_, v)) if v >= u => best,
                _ => Some((a, u)),
            })
            .map(|(a, _)| a.clone())
            .expect("strategy has at least one action")
    }

    /// expected payoff of `action` against the empirical opponent distribution.
    pub fn expected_utility(&self, action: &A) -> Utility {
        self.utility(action, &self.tally.belief())
    }

    fn utility(&self, action: &A, belief: &[Probability]) -> Utility {
        self.rewards
            .row(action)
            .map(|row| row.iter().zip(belief).map(|(r, p)| r * p).sum::<Utility>())
            .unwrap_or_default()
    }

    pub fn record_opponent_action(&mut self, action: &B) -> Result<(), Error> {
        self.tally.record(action)
    }

    /// forget every observation. mode is left as is.
    pub fn reset_tally(&mut self) {
        self.tally = Tally::zeroed(self.rewards.cols());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Dice;

    /// matching pennies from the row player's side
    fn pennies() -> Agent<char, char> {
        let rewards = RewardTable::new(
            vec!['H', 'T'],
            vec!['h', 't'],
            vec![vec![1., -1.], vec![-1., 1.]],
        )
        .unwrap();
        Agent::new(vec!['H', 'T'], rewards, None).unwrap()
    }

    #[test]
    fn starts_exploring_with_empty_tally() {
        let agent = pennies();
        assert_eq!(agent.mode(), Mode::Exploring);
        assert_eq!(agent.tally().total(), 0);
        assert_eq!(agent.tally().actions().copied().collect::<Vec<_>>(), vec!['h', 't']);
    }

    #[test]
    fn best_response_follows_tally() {
        let ref mut agent = pennies();
        agent.record_opponent_action(&'t').unwrap();
        agent.record_opponent_action(&'t').unwrap();
        agent.record_opponent_action(&'h').unwrap();
        assert_eq!(agent.select_best_response(), 'T');
        assert!((agent.expected_utility(&'T') - 1. / 3.).abs() < 1e-12);
        assert!((agent.expected_utility(&'H') + 1. / 3.).abs() < 1e-12);
    }

    #[test]
    fn best_response_is_deterministic() {
        let ref mut agent = pennies();
        agent.record_opponent_action(&'h').unwrap();
        let first = agent.select_best_response();
        let again = agent.select_best_response();
        assert_eq!(first, again);
    }

    #[test]
    fn ties_break_toward_first_action() {
        let ref mut agent = pennies();
        assert_eq!(agent.select_best_response(), 'H');
        agent.record_opponent_action(&'h').unwrap();
        agent.record_opponent_action(&'t').unwrap();
        assert_eq!(agent.select_best_response(), 'H');
    }

    #[test]
    fn responding_ignores_randomness() {
        let ref mut agent = pennies();
        agent.record_opponent_action(&'t').unwrap();
        agent.respond();
        let ref mut rng = Dice::seeded(0);
        for _ in 0..32 {
            assert_eq!(agent.select_action(rng), 'T');
        }
    }

    #[test]
    fn exploring_samples_strategy() {
        let rewards = RewardTable::new(vec!['H', 'T'], vec!['h', 't'], vec![vec![1., -1.], vec![-1., 1.]]).unwrap();
        let agent = Agent::new(vec!['H', 'T'], rewards, Some(vec![0., 1.])).unwrap();
        let ref mut rng = Dice::seeded(0);
        for _ in 0..32 {
            assert_eq!(agent.select_action(rng), 'T');
        }
    }

    #[test]
    fn unknown_opponent_action_is_rejected() {
        let ref mut agent = pennies();
        agent.record_opponent_action(&'h').unwrap();
        let err = agent.record_opponent_action(&'x').unwrap_err();
        assert_eq!(err, Error::UnknownAction("x".to_string()));
        assert!(!err.is_configuration());
        assert_eq!(agent.tally().count(&'h'), Some(1));
        assert_eq!(agent.tally().total(), 1);
    }

    #[test]
    fn reset_clears_counts_but_not_mode() {
        let ref mut agent = pennies();
        agent.record_opponent_action(&'h').unwrap();
        agent.record_opponent_action(&'t').unwrap();
        agent.respond();
        agent.reset_tally();
        assert!(agent.tally().counts().all(|n| n == 0));
        assert_eq!(agent.tally().actions().copied().collect::<Vec<_>>(), vec!['h', 't']);
        assert_eq!(agent.mode(), Mode::BestResponding);
    }

    #[test]
    fn construction_checks_rewards() {
        let rewards = RewardTable::new(vec!['H', 'T'], vec!['h'], vec![vec![1.], vec![0.]]).unwrap();
        assert_eq!(
            Agent::new(vec!['H', 'X'], rewards.clone(), None).unwrap_err(),
            Error::RewardMismatch("X".to_string())
        );
        assert_eq!(
            Agent::new(vec!['H'], rewards.clone(), None).unwrap_err(),
            Error::RewardMismatch("T".to_string())
        );
        assert_eq!(
            Agent::new(vec!['H', 'T'], rewards, Some(vec![0.5])).unwrap_err(),
            Error::LengthMismatch {
                actions: 2,
                probabilities: 1
            }
        );
    }

    #[test]
    fn nan_strategy_fails_before_play() {
        let rewards = RewardTable::new(vec!['A', 'B'], vec!['a', 'b'], vec![vec![1., 0.], vec![0., 1.]]).unwrap();
        let err = Agent::new(vec!['A', 'B'], rewards, Some(vec![f64::NAN, 1.])).unwrap_err();
        assert!(matches!(err, Error::NonFiniteProbability(p) if p.is_nan()));
        assert!(err.is_configuration());
    }
}
