use crate::cards::Card;
use crate::gameplay::PlayerOrder;

/// Each player's draft picks so far, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History([Vec<Card>; 2]);

impl History {
    pub fn record(&mut self, player: PlayerOrder, card: Card) {
        self.0[player.index()].push(card);
    }
    pub fn of(&self, player: PlayerOrder) -> &[Card] {
        &self.0[player.index()]
    }
    pub fn clear(&mut self) {
        self.0.iter_mut().for_each(Vec::clear);
    }
}
