use super::*;
use crate::gameplay::*;
use crate::*;

/// Flattens a battle state, from the acting player's point of view.
///
/// Layout, in order:
///
/// 1. both players' scalars, acting player first
/// 2. the acting player's hand, left-packed to [`HAND_CAPACITY`]
/// 3. the acting player's lanes, each left-packed to [`LANE_CAPACITY`]
/// 4. the opposing player's lanes, likewise
///
/// Without items every hand card loses its kind flags.
#[derive(Debug, Clone)]
pub struct BattleObserver<F: Features = Normalized> {
    items: bool,
    features: F,
}

impl<F: Features + Default> From<bool> for BattleObserver<F> {
    fn from(items: bool) -> Self {
        Self::new(items, F::default())
    }
}

impl<F: Features> BattleObserver<F> {
    pub fn new(items: bool, features: F) -> Self {
        Self { items, features }
    }
    pub fn len(&self) -> usize {
        Self::size(self.items)
    }
    pub const fn size(items: bool) -> usize {
        2 * PLAYER_FEATURES
            + HAND_CAPACITY * Self::hand_width(items)
            + BOARD_CAPACITY * (FRIENDLY_FEATURES + ENEMY_FEATURES)
    }
    const fn hand_width(items: bool) -> usize {
        match items {
            true => CARD_FEATURES,
            false => CLIPPED_FEATURES,
        }
    }
    /// Nothing to observe while drafting.
    pub fn observe<G: Engine>(&self, game: &G) -> Option<Vec<Feature>> {
        if game.is_drafting() {
            return None;
        }
        let current = game.current();
        let opposing = game.opposing();
        let clip = CARD_FEATURES - Self::hand_width(self.items);
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.features.players(current, opposing));
        Slots::left(HAND_CAPACITY, Self::hand_width(self.items)).fill(
            &mut out,
            current
                .hand()
                .iter()
                .map(|c| self.features.card(c)[clip..].to_vec()),
        );
        for lane in Lane::ALL {
            Slots::left(LANE_CAPACITY, FRIENDLY_FEATURES).fill(
                &mut out,
                current.lane(lane).iter().map(|c| self.features.friendly(c)),
            );
        }
        for lane in Lane::ALL {
            Slots::left(LANE_CAPACITY, ENEMY_FEATURES).fill(
                &mut out,
                opposing.lane(lane).iter().map(|c| self.features.enemy(c)),
            );
        }
        debug_assert_eq!(out.len(), self.len());
        Some(out)
    }
}
