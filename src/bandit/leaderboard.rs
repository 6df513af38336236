use super::trajectory::Trajectory;
use colored::Colorize;

/// final cumulative regret of competing policies on one bandit.
/// the lowest regret is highlighted.
pub struct Leaderboard<'a>(&'a [Trajectory]);

impl<'a> Leaderboard<'a> {
    pub fn new(trajectories: &'a [Trajectory]) -> Self {
        Self(trajectories)
    }

    /// the trajectory with the least total regret.
    pub fn winner(&self) -> Option<&'a Trajectory> {
        self.0
            .iter()
            .min_by(|a, b| a.total().total_cmp(&b.total()))
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Leaderboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let winner = self.winner().map(|t| t.name().to_string());
        writeln!(f, "┌──────────────────────┬────────────┐")?;
        writeln!(f, "│ Policy               │     Regret │")?;
        writeln!(f, "├──────────────────────┼────────────┤")?;
        for trajectory in self.0 {
            let regret = format!("{:>10.2}", trajectory.total());
            let regret = match winner.as_deref() == Some(trajectory.name()) {
                true => regret.green().bold().to_string(),
                false => regret,
            };
            writeln!(f, "│ {:<20} │ {} │", trajectory.name(), regret)?;
        }
        write!(f, "└──────────────────────┴────────────┘")
    }
}
