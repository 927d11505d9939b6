use crate::Reward;

/// Seat in the turn order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum PlayerOrder {
    First,
    Second,
}

impl PlayerOrder {
    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
    pub fn other(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
    /// Raw outcome from the first player's perspective: +1 if this seat won.
    pub fn reward(&self) -> Reward {
        match self {
            Self::First => 1.,
            Self::Second => -1.,
        }
    }
}

impl From<usize> for PlayerOrder {
    fn from(i: usize) -> Self {
        match i {
            0 => Self::First,
            1 => Self::Second,
            _ => panic!("two player game"),
        }
    }
}

impl std::fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_involution() {
        for seat in [PlayerOrder::First, PlayerOrder::Second] {
            assert_eq!(seat.other().other(), seat);
            assert_eq!(PlayerOrder::from(seat.index()), seat);
        }
    }

    #[test]
    fn reward_sign() {
        assert_eq!(PlayerOrder::First.reward(), 1.);
        assert_eq!(PlayerOrder::Second.reward(), -1.);
    }
}
