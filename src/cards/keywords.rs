use crate::Feature;

/// A single card ability.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Keyword {
    /// Excess attack damage carries over to the defending player.
    Breakthrough,
    /// May attack on the turn it is summoned.
    Charge,
    /// Damage dealt while attacking heals the owner.
    Drain,
    /// Must be attacked before anything else in its lane.
    Guard,
    /// Any damage it deals to a creature is fatal.
    Lethal,
    /// Absorbs the next instance of damage.
    Ward,
}

impl Keyword {
    pub const ALL: [Self; 6] = [
        Self::Breakthrough,
        Self::Charge,
        Self::Drain,
        Self::Guard,
        Self::Lethal,
        Self::Ward,
    ];
    fn bit(&self) -> u8 {
        1 << Self::ALL.iter().position(|k| k == self).expect("listed keyword")
    }
}

impl From<Keyword> for char {
    fn from(k: Keyword) -> Self {
        match k {
            Keyword::Breakthrough => 'B',
            Keyword::Charge => 'C',
            Keyword::Drain => 'D',
            Keyword::Guard => 'G',
            Keyword::Lethal => 'L',
            Keyword::Ward => 'W',
        }
    }
}

/// Set of keywords packed into one byte.
///
/// Displays in the conventional `BCDGLW` form, with `-` for absent abilities.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Keywords(u8);

impl Keywords {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn has(&self, k: Keyword) -> bool {
        self.0 & k.bit() != 0
    }
    pub fn with(self, k: Keyword) -> Self {
        Self(self.0 | k.bit())
    }
    pub fn without(self, k: Keyword) -> Self {
        Self(self.0 & !k.bit())
    }
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn minus(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// Presence flags in `BCDGLW` order.
    pub fn flags(&self) -> [Feature; 6] {
        Keyword::ALL.map(|k| if self.has(k) { 1. } else { 0. })
    }
}

impl From<u8> for Keywords {
    fn from(bits: u8) -> Self {
        Self(bits & 0b0011_1111)
    }
}
impl From<Keywords> for u8 {
    fn from(k: Keywords) -> Self {
        k.0
    }
}

impl From<&[Keyword]> for Keywords {
    fn from(keywords: &[Keyword]) -> Self {
        keywords.iter().fold(Self::empty(), |set, k| set.with(*k))
    }
}

/// Parses the `BCDGLW` notation. Unknown letters and dashes are ignored.
impl From<&str> for Keywords {
    fn from(s: &str) -> Self {
        s.chars()
            .filter_map(|c| Keyword::ALL.into_iter().find(|k| char::from(*k) == c))
            .fold(Self::empty(), Self::with)
    }
}

impl std::fmt::Display for Keywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Keyword::ALL
            .iter()
            .map(|k| if self.has(*k) { char::from(*k) } else { '-' })
            .try_for_each(|c| write!(f, "{}", c))
    }
}
