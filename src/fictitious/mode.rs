/// how an Agent picks its next action.
///
/// the only transition is Exploring -> BestResponding, made by the Game
/// once the warm-up rounds are over. a fresh play-through re-arms it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mode {
    #[default]
    Exploring,
    BestResponding,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exploring => write!(f, "exploring"),
            Self::BestResponding => write!(f, "best responding"),
        }
    }
}
