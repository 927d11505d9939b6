/// One of the two board positions each player fills with creatures.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Self; crate::LANES] = [Self::Left, Self::Right];

    pub fn index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl From<usize> for Lane {
    fn from(i: usize) -> Self {
        match i {
            0 => Self::Left,
            1 => Self::Right,
            _ => panic!("two lanes per side"),
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}
