/// Stage of one game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Players pick cards to build their decks.
    Draft,
    /// Decks are played against each other.
    Battle,
    /// A winner has been decided.
    Ended,
}

impl Phase {
    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Draft)
    }
    pub fn is_battle(&self) -> bool {
        matches!(self, Self::Battle)
    }
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Battle => write!(f, "battle"),
            Self::Ended => write!(f, "ended"),
        }
    }
}
