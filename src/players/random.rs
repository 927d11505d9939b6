use super::*;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Plays uniformly at random among the legal actions.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: SmallRng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl From<u64> for RandomAgent {
    fn from(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act<G: Engine>(&mut self, game: &G) -> Action {
        game.legal()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Pass)
    }
    fn seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::Duel;

    #[test]
    fn only_legal_actions() {
        let mut game = Duel::start(Rules::default(), 0);
        let mut agent = RandomAgent::from(0);
        while !game.is_over() {
            let action = agent.act(&game);
            assert!(game.is_allowed(&action), "{action}");
            game.apply(action);
        }
    }

    #[test]
    fn seeded_agents_agree() {
        let game = Duel::start(Rules::default(), 1);
        let mut a = RandomAgent::from(5);
        let mut b = RandomAgent::default();
        b.seed(5);
        for _ in 0..10 {
            assert_eq!(a.act(&game), b.act(&game));
        }
    }
}
