use super::action::Action;
use super::game::Game;
use crate::Probability;

/// empirical play of one player over a finished Game,
/// as seen through the opponent's tally.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub player: usize,
    pub actions: Vec<String>,
    pub frequencies: Vec<Probability>,
}

/// how often each player chose each action, one Line per player.
#[derive(Debug, Clone, PartialEq)]
pub struct Report(Vec<Line>);

impl Report {
    pub fn lines(&self) -> &[Line] {
        &self.0
    }
}

impl<A, B> From<&Game<A, B>> for Report
where
    A: Action,
    B: Action,
{
    fn from(game: &Game<A, B>) -> Self {
        let n = game.total();
        let p1 = game
            .p1()
            .strategy()
            .actions()
            .map(|a| (a.to_string(), game.p2().tally().count(a).unwrap_or(0)))
            .collect::<Vec<_>>();
        let p2 = game
            .p2()
            .strategy()
            .actions()
            .map(|b| (b.to_string(), game.p1().tally().count(b).unwrap_or(0)))
            .collect::<Vec<_>>();
        Self(vec![Line::new(1, p1, n), Line::new(2, p2, n)])
    }
}

impl Line {
    fn new(player: usize, counts: Vec<(String, usize)>, rounds: usize) -> Self {
        let (actions, frequencies) = counts
            .into_iter()
            .map(|(a, c)| (a, Self::frequency(c, rounds)))
            .unzip();
        Self {
            player,
            actions,
            frequencies,
        }
    }

    /// share of rounds, rounded to three decimals.
    fn frequency(count: usize, rounds: usize) -> Probability {
        match rounds {
            0 => 0.,
            n => (count as Probability / n as Probability * 1000.).round() / 1000.,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actions = self.actions.join(", ");
        let frequencies = self
            .frequencies
            .iter()
            .map(|p| format!("{:.3}", p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Player {} plays the actions ({}) with probabilities ({})",
            self.player, actions, frequencies
        )
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.0 {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
