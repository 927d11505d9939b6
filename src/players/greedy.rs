use super::*;
use crate::gameplay::*;

/// Always reaches for damage.
///
/// Drafts the card with the highest attack. In battle it hits the enemy
/// player whenever it can, otherwise summons its hardest hitter, then trades,
/// then uses items, and passes last.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAttackAgent;

impl MaxAttackAgent {
    fn weight<G: Engine>(&self, action: &Action, game: &G) -> (u8, i8) {
        let attack = |origin| {
            game.current()
                .hand()
                .iter()
                .chain(game.current().board())
                .find(|c| c.instance() == origin)
                .map(|c| c.attack())
                .unwrap_or(0)
        };
        match *action {
            Action::Pick(i) => (0, game.current().hand().get(i).map(|c| c.attack()).unwrap_or(0)),
            Action::Attack { origin, target: None } => (4, attack(origin)),
            Action::Summon { origin, .. } => (3, attack(origin)),
            Action::Attack { origin, .. } => (2, attack(origin)),
            Action::Use { .. } => (1, 0),
            Action::Pass => (0, 0),
        }
    }
}

impl Agent for MaxAttackAgent {
    fn act<G: Engine>(&mut self, game: &G) -> Action {
        // first of the best, so ties go to the lowest hand index
        game.legal()
            .into_iter()
            .rev()
            .max_by_key(|a| self.weight(a, game))
            .unwrap_or(Action::Pass)
    }
}
