use super::agent::Agent;
use super::error::Error;
use super::game::Game;
use super::rewards::RewardTable;
use crate::FICTITIOUS_TOTAL_ROUNDS;
use crate::FICTITIOUS_WARMUP_ROUNDS;
use crate::Probability;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// everything needed to set up one fictitious play experiment.
///
/// `reward_table1[i][j]` pays player 1 for `(actions1[i], actions2[j])`.
/// `reward_table2[j][i]` pays player 2 for `(actions2[j], actions1[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub actions1: Vec<String>,
    pub actions2: Vec<String>,
    pub reward_table1: Vec<Vec<Utility>>,
    pub reward_table2: Vec<Vec<Utility>>,
    #[serde(default)]
    pub initial_probs1: Option<Vec<Probability>>,
    #[serde(default)]
    pub initial_probs2: Option<Vec<Probability>>,
    #[serde(default = "warmup_rounds")]
    pub warmup_rounds: usize,
    #[serde(default = "total_rounds")]
    pub total_rounds: usize,
}

fn warmup_rounds() -> usize {
    FICTITIOUS_WARMUP_ROUNDS
}

fn total_rounds() -> usize {
    FICTITIOUS_TOTAL_ROUNDS
}

impl Config {
    /// split a bimatrix `payoffs[i][j] = (r1, r2)` into the two
    /// per-player tables, with default probabilities and round counts.
    pub fn from_bimatrix(
        actions1: Vec<String>,
        actions2: Vec<String>,
        payoffs: Vec<Vec<(Utility, Utility)>>,
    ) -> Result<Self, Error> {
        let (n, m) = (actions1.len(), actions2.len());
        if payoffs.len() != n || payoffs.iter().any(|row| row.len() != m) {
            return Err(Error::ShapeMismatch { rows: n, cols: m });
        }
        let reward_table1 = payoffs
            .iter()
            .map(|row| row.iter().map(|(r1, _)| *r1).collect())
            .collect();
        let reward_table2 = (0..m)
            .map(|j| payoffs.iter().map(|row| row[j].1).collect())
            .collect();
        Ok(Self {
            actions1,
            actions2,
            reward_table1,
            reward_table2,
            initial_probs1: None,
            initial_probs2: None,
            warmup_rounds: warmup_rounds(),
            total_rounds: total_rounds(),
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// validate everything and assemble the two agents.
    pub fn build(&self) -> Result<Game<String, String>, Error> {
        let r1 = RewardTable::new(
            self.actions1.clone(),
            self.actions2.clone(),
            self.reward_table1.clone(),
        )?;
        let r2 = RewardTable::new(
            self.actions2.clone(),
            self.actions1.clone(),
            self.reward_table2.clone(),
        )?;
        let p1 = Agent::new(self.actions1.clone(), r1, self.initial_probs1.clone())?;
        let p2 = Agent::new(self.actions2.clone(), r2, self.initial_probs2.clone())?;
        Game::new(p1, p2, self.warmup_rounds, self.total_rounds)
    }
}

/// the 3x4 general-sum game from the assignment.
impl Default for Config {
    fn default() -> Self {
        let labels = |xs: &[&str]| xs.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        #[rustfmt::skip]
        let payoffs = vec![
            vec![(1., 5.), (2., 2.), (3., 4.), (3., 1.)],
            vec![(3., 0.), (4., 1.), (2., 5.), (4., 2.)],
            vec![(1., 3.), (2., 6.), (5., 2.), (2., 3.)],
        ];
        Self::from_bimatrix(labels(&["A", "B", "C"]), labels(&["W", "X", "Y", "Z"]), payoffs)
            .expect("3x4 bimatrix for 3 and 4 actions")
    }
}
