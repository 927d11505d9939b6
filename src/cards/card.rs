use super::*;
use colored::Colorize;

/// Card number in the catalog. Shared by every copy of the same card.
pub type CardId = u16;
/// Identity of one physical copy during a game.
pub type Instance = u32;

/// A card as the rules engine exposes it.
///
/// The adapter only ever reads cards: [`id`](Self::id) orders draft choices,
/// [`cost`](Self::cost) feeds the mana curve, and the remaining attributes
/// flow into the feature encoder. Mutators exist for engines that keep
/// on-board state (buffs, damage, summoning sickness) on the card itself.
///
/// # Fields
///
/// - `id`: Catalog number
/// - `instance`: Per-game identity, assigned when the card joins a deck
/// - `kind`: Creature or one of the three item colors
/// - `cost`: Mana cost
/// - `attack`, `defense`: Combat stats (negative on red/blue items)
/// - `keywords`: Abilities granted or removed
/// - `player_hp`: Health change for the owner when played
/// - `enemy_hp`: Health change for the opponent when played
/// - `draw`: Extra cards the owner draws next turn
/// - `ready`: Whether a creature on board may still attack this turn
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    id: CardId,
    instance: Instance,
    kind: Kind,
    cost: u8,
    attack: i8,
    defense: i8,
    keywords: Keywords,
    player_hp: i8,
    enemy_hp: i8,
    draw: u8,
    ready: bool,
}

impl From<(CardId, Kind, u8, i8, i8)> for Card {
    fn from((id, kind, cost, attack, defense): (CardId, Kind, u8, i8, i8)) -> Self {
        Self {
            id,
            kind,
            cost,
            attack,
            defense,
            instance: 0,
            keywords: Keywords::empty(),
            player_hp: 0,
            enemy_hp: 0,
            draw: 0,
            ready: false,
        }
    }
}

/// Construction.
impl Card {
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }
    pub fn with_effects(mut self, player_hp: i8, enemy_hp: i8, draw: u8) -> Self {
        self.player_hp = player_hp;
        self.enemy_hp = enemy_hp;
        self.draw = draw;
        self
    }
    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instance = instance;
        self
    }
}

/// Read access.
impl Card {
    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn instance(&self) -> Instance {
        self.instance
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn cost(&self) -> u8 {
        self.cost
    }
    pub fn attack(&self) -> i8 {
        self.attack
    }
    pub fn defense(&self) -> i8 {
        self.defense
    }
    pub fn keywords(&self) -> Keywords {
        self.keywords
    }
    pub fn has(&self, keyword: Keyword) -> bool {
        self.keywords.has(keyword)
    }
    pub fn player_hp(&self) -> i8 {
        self.player_hp
    }
    pub fn enemy_hp(&self) -> i8 {
        self.enemy_hp
    }
    pub fn draw(&self) -> u8 {
        self.draw
    }
    pub fn ready(&self) -> bool {
        self.ready
    }
    pub fn is_dead(&self) -> bool {
        self.kind.is_creature() && self.defense <= 0
    }
}

/// On-board mutation.
impl Card {
    pub fn buff(&mut self, attack: i8, defense: i8) {
        self.attack = self.attack.saturating_add(attack).max(0);
        self.defense = self.defense.saturating_add(defense);
    }
    pub fn grant(&mut self, keywords: Keywords) {
        self.keywords = self.keywords.union(keywords);
    }
    pub fn strip(&mut self, keywords: Keywords) {
        self.keywords = self.keywords.minus(keywords);
    }
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
    /// Applies incoming damage, honoring ward. Returns damage actually taken.
    pub fn wound(&mut self, damage: i8) -> i8 {
        if damage <= 0 {
            0
        } else if self.has(Keyword::Ward) {
            self.keywords = self.keywords.without(Keyword::Ward);
            0
        } else {
            self.defense = self.defense.saturating_sub(damage);
            damage
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = format!("{}/{}", self.attack, self.defense);
        let stats = match self.kind {
            Kind::Creature => stats.white(),
            Kind::Green => stats.green(),
            Kind::Red => stats.red(),
            Kind::Blue => stats.blue(),
        };
        write!(f, "#{:<3} ({:>2}) {} {}", self.id, self.cost, stats, self.keywords)
    }
}
