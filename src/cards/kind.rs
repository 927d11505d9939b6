use crate::Feature;

/// What a card does when it leaves the hand.
///
/// Creatures are summoned into a lane. Items are used once and discarded:
/// green items buff a friendly creature, red items debuff an enemy creature,
/// blue items hit an enemy creature or the enemy player directly.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Creature,
    Green,
    Red,
    Blue,
}

impl Kind {
    pub const ALL: [Self; 4] = [Self::Creature, Self::Green, Self::Red, Self::Blue];

    pub fn is_creature(&self) -> bool {
        matches!(self, Self::Creature)
    }
    pub fn is_item(&self) -> bool {
        !self.is_creature()
    }
    /// One-hot flags in `ALL` order.
    pub fn flags(&self) -> [Feature; 4] {
        Self::ALL.map(|k| if k == *self { 1. } else { 0. })
    }
}

/// u8 bijection
impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Creature => 0,
            Kind::Green => 1,
            Kind::Red => 2,
            Kind::Blue => 3,
        }
    }
}
impl From<u8> for Kind {
    fn from(n: u8) -> Self {
        match n {
            0 => Kind::Creature,
            1 => Kind::Green,
            2 => Kind::Red,
            3 => Kind::Blue,
            _ => unreachable!("invalid kind encoding"),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Creature => write!(f, "creature"),
            Kind::Green => write!(f, "green"),
            Kind::Red => write!(f, "red"),
            Kind::Blue => write!(f, "blue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!(Kind::ALL.into_iter().all(|k| k == Kind::from(u8::from(k))));
    }

    #[test]
    fn flags_are_one_hot() {
        for kind in Kind::ALL {
            let flags = kind.flags();
            assert_eq!(flags.iter().sum::<f32>(), 1.);
            assert_eq!(flags[u8::from(kind) as usize], 1.);
        }
    }
}
