use crate::Probability;

/// Errors raised while configuring or playing a fictitious play Game.
///
/// Everything but `UnknownAction` is caught at construction time.
/// `UnknownAction` surfaces mid-game when the two players disagree
/// about each other's action sets.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NoActions,
    DuplicateAction(String),
    LengthMismatch { actions: usize, probabilities: usize },
    SumMismatch(Probability),
    NegativeProbability(Probability),
    NonFiniteProbability(Probability),
    ShapeMismatch { rows: usize, cols: usize },
    RewardMismatch(String),
    RoundsOrder { warmup: usize, total: usize },
    UnknownAction(String),
}

impl Error {
    /// true for malformed strategies, reward tables, and round counts.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnknownAction(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActions => write!(f, "action set is empty"),
            Self::DuplicateAction(a) => write!(f, "action {} appears more than once", a),
            Self::LengthMismatch {
                actions,
                probabilities,
            } => write!(
                f,
                "{} actions but {} probabilities, lengths must match",
                actions, probabilities
            ),
            Self::SumMismatch(sum) => write!(f, "probabilities sum to {}, not 1", sum),
            Self::NegativeProbability(p) => write!(f, "negative probability {}", p),
            Self::NonFiniteProbability(p) => write!(f, "probability {} is not a finite number", p),
            Self::ShapeMismatch { rows, cols } => {
                write!(f, "reward table must be {} rows of {} payoffs", rows, cols)
            }
            Self::RewardMismatch(a) => {
                write!(f, "action {} and the reward table rows disagree", a)
            }
            Self::RoundsOrder { warmup, total } => write!(
                f,
                "warm-up rounds ({}) exceed total rounds ({})",
                warmup, total
            ),
            Self::UnknownAction(a) => write!(f, "opponent action {} is not tracked", a),
        }
    }
}

impl std::error::Error for Error {}
