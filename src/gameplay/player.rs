use super::*;
use crate::cards::*;

/// Health a player starts the battle with.
pub const HEALTH: i32 = 30;
/// Gap between rune thresholds.
pub const RUNE_STEP: i32 = 5;

/// One side of the table, as the adapter sees it.
///
/// Holds the scalar attributes the observation encodes and the two card
/// collections it packs: the hand and the two lanes. The deck is kept here
/// too so an engine can draw from it, but it is never observed.
///
/// # Fields
///
/// - `order`: Seat in the turn order
/// - `health`: Remaining health
/// - `mana`: Mana left this turn
/// - `base`: Mana refilled at the start of each turn
/// - `rune`: Health threshold whose crossing grants an extra draw
/// - `bonus`: Extra cards drawn at the start of the next turn
/// - `hand`: Cards in hand (at most [`HAND_CAPACITY`](crate::HAND_CAPACITY))
/// - `lanes`: Creatures on board (at most [`LANE_CAPACITY`](crate::LANE_CAPACITY) each)
/// - `deck`: Cards left to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    order: PlayerOrder,
    health: i32,
    mana: i32,
    base: i32,
    rune: i32,
    bonus: i32,
    hand: Vec<Card>,
    lanes: [Vec<Card>; crate::LANES],
    deck: Vec<Card>,
}

impl From<PlayerOrder> for Player {
    fn from(order: PlayerOrder) -> Self {
        Self {
            order,
            health: HEALTH,
            mana: 0,
            base: 0,
            rune: HEALTH - RUNE_STEP,
            bonus: 0,
            hand: Vec::new(),
            lanes: [Vec::new(), Vec::new()],
            deck: Vec::new(),
        }
    }
}

/// Read access.
impl Player {
    pub fn order(&self) -> PlayerOrder {
        self.order
    }
    pub fn health(&self) -> i32 {
        self.health
    }
    pub fn mana(&self) -> i32 {
        self.mana
    }
    pub fn base(&self) -> i32 {
        self.base
    }
    /// Health threshold of the next rune.
    pub fn rune(&self) -> i32 {
        self.rune
    }
    /// Extra cards queued for the next draw.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }
    /// Cards drawn at the start of the next turn.
    pub fn next_draw(&self) -> i32 {
        1 + self.bonus
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn lanes(&self) -> &[Vec<Card>; crate::LANES] {
        &self.lanes
    }
    pub fn lane(&self, lane: Lane) -> &[Card] {
        &self.lanes[lane.index()]
    }
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }
    /// Creatures on board in lane-major order.
    pub fn board(&self) -> impl Iterator<Item = &Card> {
        self.lanes.iter().flatten()
    }
    /// Locates a creature on board by instance.
    pub fn locate(&self, instance: Instance) -> Option<(Lane, usize)> {
        Lane::ALL.into_iter().find_map(|lane| {
            self.lane(lane)
                .iter()
                .position(|c| c.instance() == instance)
                .map(|i| (lane, i))
        })
    }
    /// Locates a hand card by instance.
    pub fn holding(&self, instance: Instance) -> Option<usize> {
        self.hand.iter().position(|c| c.instance() == instance)
    }
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Mutation, for engines.
impl Player {
    pub fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }
    pub fn lane_mut(&mut self, lane: Lane) -> &mut Vec<Card> {
        &mut self.lanes[lane.index()]
    }
    pub fn deck_mut(&mut self) -> &mut Vec<Card> {
        &mut self.deck
    }
    pub fn spend(&mut self, mana: i32) {
        self.mana -= mana;
    }
    /// Refills mana, growing the base by one up to `cap`.
    pub fn refill(&mut self, cap: i32) {
        self.base = (self.base + 1).min(cap);
        self.mana = self.base;
    }
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }
    /// Loses health. Every rune crossed queues one extra draw.
    pub fn hurt(&mut self, amount: i32) {
        self.health -= amount;
        while self.rune > 0 && self.health <= self.rune {
            self.rune -= RUNE_STEP;
            self.bonus += 1;
        }
    }
    /// Drawing from an empty deck breaks the next rune instead.
    pub fn break_rune(&mut self) {
        self.health = self.health.min(self.rune);
        self.rune = (self.rune - RUNE_STEP).max(0);
    }
    pub fn queue_draws(&mut self, n: i32) {
        self.bonus += n;
    }
    pub fn take_bonus(&mut self) -> i32 {
        std::mem::take(&mut self.bonus)
    }
}
