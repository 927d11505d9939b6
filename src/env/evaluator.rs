use crate::gameplay::*;
use crate::players::Agent;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Outcome of the battles that score a finished draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    winners: Vec<PlayerOrder>,
    reward: Reward,
}

impl From<Vec<PlayerOrder>> for Evaluation {
    fn from(winners: Vec<PlayerOrder>) -> Self {
        let reward = winners.iter().map(PlayerOrder::reward).sum::<Reward>() / winners.len().max(1) as Reward;
        Self { winners, reward }
    }
}

impl Evaluation {
    /// Winner of every battle, in trial order.
    pub fn winners(&self) -> &[PlayerOrder] {
        &self.winners
    }
    /// Mean outcome from the first player's perspective, in `[-1, 1]`.
    pub fn reward(&self) -> Reward {
        self.reward
    }
    /// Fraction of battles won by `player`.
    pub fn share(&self, player: PlayerOrder) -> f32 {
        self.winners.iter().filter(|w| **w == player).count() as f32 / self.winners.len().max(1) as f32
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P0: {:.2}%; P1: {:.2}%",
            100. * self.share(PlayerOrder::First),
            100. * self.share(PlayerOrder::Second)
        )
    }
}

/// Scores a finished draft by playing the battle out with scripted agents.
///
/// A single battle is played on the live game itself. Several battles are
/// each played on their own clone of the post-draft game, so they start from
/// the same decks but shuffle and play independently. Trial `i` reseeds the
/// agents from `seed + i`, so results do not depend on whether trials run in
/// sequence or in parallel.
#[derive(Debug, Clone)]
pub struct Evaluator<A: Agent> {
    battles: usize,
    agents: [A; 2],
    seed: u64,
}

impl<A: Agent> Evaluator<A> {
    pub fn new(battles: usize, agents: [A; 2]) -> Self {
        assert!(battles > 0, "at least one battle");
        Self {
            battles,
            agents,
            seed: 0,
        }
    }
    pub fn battles(&self) -> usize {
        self.battles
    }
    /// Base seed for the next evaluation's trials.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }
    pub fn evaluate<G: Engine>(&self, game: &mut G) -> Evaluation {
        let evaluation = match self.battles {
            1 => Evaluation::from(vec![Self::play(game, self.trial(0))]),
            n => Evaluation::from(self.trials(game, n)),
        };
        log::debug!("[evaluator] {} over {} battles", evaluation, self.battles);
        evaluation
    }
    #[cfg(not(feature = "parallel"))]
    fn trials<G: Engine>(&self, game: &G, n: usize) -> Vec<PlayerOrder> {
        (0..n)
            .map(|i| Self::play(&mut game.clone(), self.trial(i)))
            .collect()
    }
    #[cfg(feature = "parallel")]
    fn trials<G: Engine>(&self, game: &G, n: usize) -> Vec<PlayerOrder> {
        use rayon::prelude::*;
        (0..n)
            .into_par_iter()
            .map(|i| Self::play(&mut game.clone(), self.trial(i)))
            .collect()
    }
    /// Fresh agents for trial `i`.
    fn trial(&self, i: usize) -> [A; 2] {
        let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(i as u64));
        self.agents.clone().map(|mut agent| {
            agent.reset();
            agent.seed(rng.random());
            agent
        })
    }
    /// Plays a battle to the end and returns the winner.
    ///
    /// A refused action is replaced by a pass, so agents that misplay cannot
    /// stall the game.
    pub fn play<G: Engine>(game: &mut G, mut agents: [A; 2]) -> PlayerOrder {
        loop {
            if let Some(winner) = game.winner() {
                return winner;
            }
            let seat = game.current().order().index();
            let action = agents[seat].act(game);
            game.apply(action);
            if game.was_invalid() {
                log::trace!("[evaluator] {} refused, passing", action);
                game.apply(Action::Pass);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::Duel;
    use crate::players::*;

    fn drafted(seed: u64) -> Duel {
        let mut game = Duel::start(Rules::default(), seed);
        while game.is_drafting() {
            game.apply(Action::Pick(0));
        }
        game
    }

    #[test]
    fn mean_of_outcomes() {
        let evaluation = Evaluation::from(vec![PlayerOrder::First, PlayerOrder::First, PlayerOrder::Second]);
        assert!((evaluation.reward() - 1. / 3.).abs() < 1e-6);
        assert_eq!(evaluation.winners().len(), 3);
        assert_eq!(evaluation.to_string(), "P0: 66.67%; P1: 33.33%");
    }

    #[test]
    fn single_battle_plays_in_place() {
        let evaluator = Evaluator::new(1, [RandomAgent::from(0), RandomAgent::from(0)]);
        let mut game = drafted(1);
        let evaluation = evaluator.evaluate(&mut game);
        assert!(game.is_over());
        assert_eq!(evaluation.winners(), &[game.winner().expect("decided")]);
        assert_eq!(evaluation.reward().abs(), 1.);
    }

    #[test]
    fn single_battle_is_reproducible() {
        let mut evaluator = Evaluator::new(1, [RandomAgent::default(), RandomAgent::default()]);
        evaluator.reseed(7);
        let game = drafted(2);
        let mut a = game.clone();
        let mut b = game.clone();
        let evaluation = evaluator.evaluate(&mut a);
        let replay = Evaluator::play(&mut b, evaluator.trial(0));
        assert_eq!(evaluation.winners(), &[replay]);
        assert_eq!(a.turn(), b.turn());
    }

    #[test]
    fn many_battles_leave_the_game_alone() {
        let evaluator = Evaluator::new(5, [RandomAgent::from(0), RandomAgent::from(1)]);
        let mut game = drafted(3);
        let evaluation = evaluator.evaluate(&mut game);
        assert!(!game.is_over());
        assert_eq!(evaluation.winners().len(), 5);
        let wins = evaluation.winners().iter().map(|w| w.reward()).sum::<Reward>();
        assert!((evaluation.reward() - wins / 5.).abs() < 1e-6);
        assert_eq!(evaluation, evaluator.evaluate(&mut game));
    }
}
