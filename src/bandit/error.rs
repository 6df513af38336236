use crate::Probability;

/// Errors raised when building or pulling a Bandit.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NoArms,
    InvalidProbability(Probability),
    InvalidArm { arm: usize, arms: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoArms => write!(f, "bandit has no arms"),
            Self::InvalidProbability(p) => write!(f, "arm probability {} outside [0, 1]", p),
            Self::InvalidArm { arm, arms } => {
                write!(f, "invalid arm {} selected, expected 0..{}", arm, arms)
            }
        }
    }
}

impl std::error::Error for Error {}
