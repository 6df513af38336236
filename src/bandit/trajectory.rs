use super::bandit::Bandit;
use super::error::Error;
use super::policy::Policy;
use crate::Utility;
use crate::random::RandomSource;

/// the arms a policy pulled, and the regret it accrued doing so.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    name: String,
    arms: Vec<usize>,
    regret: Vec<Utility>,
}

impl Trajectory {
    /// let `policy` play `bandit` for `iterations` pulls.
    pub fn run<P, R>(
        bandit: &Bandit,
        policy: &mut P,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        P: Policy,
        R: RandomSource,
    {
        let gaps = bandit.regrets();
        let mut arms = Vec::with_capacity(iterations);
        for t in 0..iterations {
            let arm = policy.select(t, rng);
            let reward = bandit.pull(arm, rng)?;
            policy.update(arm, reward);
            arms.push(arm);
        }
        let regret = arms
            .iter()
            .scan(0., |total, arm| {
                *total += gaps[*arm];
                Some(*total)
            })
            .collect::<Vec<Utility>>();
        log::debug!("{:<32}{:<32}", policy.name(), regret.last().copied().unwrap_or_default());
        Ok(Self {
            name: policy.name(),
            arms,
            regret,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arms(&self) -> &[usize] {
        &self.arms
    }

    /// cumulative expected regret after each pull.
    pub fn regret(&self) -> &[Utility] {
        &self.regret
    }

    /// cumulative expected regret after the final pull.
    pub fn total(&self) -> Utility {
        self.regret.last().copied().unwrap_or_default()
    }

    pub fn pulls(&self, arm: usize) -> usize {
        self.arms.iter().filter(|a| **a == arm).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reward;
    use crate::bandit::Thompson;
    use crate::bandit::Ucb;
    use crate::random::Dice;

    /// always pulls the same arm
    struct Stubborn(usize);

    impl Policy for Stubborn {
        fn name(&self) -> String {
            format!("always {}", self.0)
        }
        fn select<R>(&mut self, _: usize, _: &mut R) -> usize
        where
            R: RandomSource,
        {
            self.0
        }
        fn update(&mut self, _: usize, _: Reward) {}
    }

    #[test]
    fn optimal_play_has_no_regret() {
        let bandit = Bandit::try_from(vec![0.2, 0.8]).unwrap();
        let trajectory = Trajectory::run(&bandit, &mut Stubborn(1), 100, &mut Dice::seeded(0)).unwrap();
        assert_eq!(trajectory.total(), 0.);
        assert_eq!(trajectory.pulls(1), 100);
    }

    #[test]
    fn regret_accumulates_linearly_on_bad_arm() {
        let bandit = Bandit::try_from(vec![0.25, 0.75]).unwrap();
        let trajectory = Trajectory::run(&bandit, &mut Stubborn(0), 8, &mut Dice::seeded(0)).unwrap();
        assert_eq!(trajectory.regret(), &[0.5, 1., 1.5, 2., 2.5, 3., 3.5, 4.]);
        assert_eq!(trajectory.name(), "always 0");
    }

    #[test]
    fn invalid_arm_aborts_run() {
        let bandit = Bandit::try_from(vec![0.5]).unwrap();
        let err = Trajectory::run(&bandit, &mut Stubborn(4), 8, &mut Dice::seeded(0)).unwrap_err();
        assert_eq!(err, Error::InvalidArm { arm: 4, arms: 1 });
    }

    #[test]
    fn regret_never_decreases() {
        let ref mut rng = Dice::seeded(5);
        let bandit = Bandit::random(3, rng);
        for trajectory in [
            Trajectory::run(&bandit, &mut Thompson::new(3), 600, rng).unwrap(),
            Trajectory::run(&bandit, &mut Ucb::new(3, 0.1), 600, rng).unwrap(),
        ] {
            assert_eq!(trajectory.arms().len(), 600);
            assert!(trajectory.regret().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn thompson_beats_uniform_regret() {
        let bandit = Bandit::try_from(vec![0.2, 0.5, 0.9]).unwrap();
        let trajectory = Trajectory::run(&bandit, &mut Thompson::new(3), 3000, &mut Dice::seeded(21)).unwrap();
        let uniform = 3000. * (0.7 + 0.4) / 3.;
        assert!(trajectory.total() < uniform / 4., "regret {} too high", trajectory.total());
    }
}
