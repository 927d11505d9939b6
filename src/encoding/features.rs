use crate::cards::*;
use crate::gameplay::Player;
use crate::*;

/// Turns single cards and player pairs into fixed-size numeric tuples.
///
/// The observers decide *where* each tuple goes; implementors decide *what*
/// it contains. Widths are fixed by the return types.
pub trait Features: Clone + Send + Sync + std::fmt::Debug {
    /// Any card, wherever it sits. Kind flags come first so they can be
    /// clipped off when items are disabled.
    fn card(&self, card: &Card) -> [Feature; CARD_FEATURES];
    /// A creature on the acting player's board.
    fn friendly(&self, card: &Card) -> [Feature; FRIENDLY_FEATURES];
    /// A creature on the opposing player's board.
    fn enemy(&self, card: &Card) -> [Feature; ENEMY_FEATURES];
    /// Both players' scalars, acting player first.
    fn players(&self, current: &Player, opposing: &Player) -> [Feature; 2 * PLAYER_FEATURES];
}

/// Scales every attribute by its nominal maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalized;

impl Normalized {
    const STAT: Feature = 12.;
    const DRAW: Feature = 2.;
    const HEALTH: Feature = 30.;
    const MANA: Feature = 13.;
    const DRAWS: Feature = 6.;

    fn player(player: &Player) -> [Feature; PLAYER_FEATURES] {
        [
            player.health() as Feature / Self::HEALTH,
            player.mana() as Feature / Self::MANA,
            player.rune() as Feature / Self::HEALTH,
            player.next_draw() as Feature / Self::DRAWS,
        ]
    }
}

impl Features for Normalized {
    fn card(&self, card: &Card) -> [Feature; CARD_FEATURES] {
        let mut features = [0.; CARD_FEATURES];
        let scalars = [
            card.cost() as Feature / Self::STAT,
            card.attack() as Feature / Self::STAT,
            card.defense().max(-12) as Feature / Self::STAT,
            card.player_hp() as Feature / Self::STAT,
            card.enemy_hp() as Feature / Self::STAT,
            card.draw() as Feature / Self::DRAW,
        ];
        features[..KIND_FEATURES].copy_from_slice(&card.kind().flags());
        features[KIND_FEATURES..KIND_FEATURES + 6].copy_from_slice(&scalars);
        features[KIND_FEATURES + 6..].copy_from_slice(&card.keywords().flags());
        features
    }
    fn friendly(&self, card: &Card) -> [Feature; FRIENDLY_FEATURES] {
        let mut features = [0.; FRIENDLY_FEATURES];
        features[0] = card.attack() as Feature / Self::STAT;
        features[1] = card.defense() as Feature / Self::STAT;
        features[2] = if card.ready() { 1. } else { 0. };
        features[3..].copy_from_slice(&card.keywords().flags());
        features
    }
    fn enemy(&self, card: &Card) -> [Feature; ENEMY_FEATURES] {
        let mut features = [0.; ENEMY_FEATURES];
        features[0] = card.attack() as Feature / Self::STAT;
        features[1] = card.defense() as Feature / Self::STAT;
        features[2..].copy_from_slice(&card.keywords().flags());
        features
    }
    fn players(&self, current: &Player, opposing: &Player) -> [Feature; 2 * PLAYER_FEATURES] {
        let mut features = [0.; 2 * PLAYER_FEATURES];
        features[..PLAYER_FEATURES].copy_from_slice(&Self::player(current));
        features[PLAYER_FEATURES..].copy_from_slice(&Self::player(opposing));
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::PlayerOrder;

    #[test]
    fn card_layout() {
        let card = Card::from((1, Kind::Green, 6, 3, -24))
            .with_keywords(Keywords::from("G"))
            .with_effects(2, -1, 1);
        let f = Normalized.card(&card);
        assert_eq!(&f[..4], &[0., 1., 0., 0.]);
        assert_eq!(f[4], 0.5);
        assert_eq!(f[5], 0.25);
        assert_eq!(f[6], -1.);
        assert_eq!(f[9], 0.5);
        assert_eq!(&f[10..], &[0., 0., 0., 1., 0., 0.]);
    }

    #[test]
    fn board_layouts() {
        let mut card = Card::from((2, Kind::Creature, 2, 6, 3)).with_keywords(Keywords::from("W"));
        card.set_ready(true);
        let friendly = Normalized.friendly(&card);
        let enemy = Normalized.enemy(&card);
        assert_eq!(&friendly[..3], &[0.5, 0.25, 1.]);
        assert_eq!(friendly[8], 1.);
        assert_eq!(&enemy[..2], &[0.5, 0.25]);
        assert_eq!(enemy[7], 1.);
    }

    #[test]
    fn players_acting_first() {
        let mut current = Player::from(PlayerOrder::Second);
        let opposing = Player::from(PlayerOrder::First);
        current.hurt(15);
        let f = Normalized.players(&current, &opposing);
        assert_eq!(f[0], 0.5);
        assert_eq!(f[4], 1.);
    }
}
