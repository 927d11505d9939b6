use super::*;
use crate::encoding::*;
use crate::gameplay::*;
use crate::players::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The draft phase as an environment.
///
/// The learner picks for whichever player is acting, one card per step.
/// When the last pick is made the [`Evaluator`] battles the decks out and
/// the episode ends with the mean outcome, from the first player's
/// perspective, as its only nonzero reward.
#[derive(Debug, Clone)]
pub struct DraftEnv<G: Engine, A: Agent = Bot, F: Features = Normalized> {
    config: Config,
    rng: SmallRng,
    game: G,
    observer: DraftObserver<F>,
    codec: Codec,
    history: History,
    evaluator: Evaluator<A>,
    evaluation: Option<Evaluation>,
    ledger: Ledger,
}

impl<G: Engine> From<Config> for DraftEnv<G> {
    fn from(config: Config) -> Self {
        Self::new(config, [Bot::default(), Bot::default()], Normalized)
    }
}

impl<G: Engine, A: Agent, F: Features> DraftEnv<G, A, F> {
    pub fn new(config: Config, battlers: [A; 2], features: F) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let game = G::start(config.rules(), rng.random());
        Self {
            observer: DraftObserver::new(config.k, config.n, features)
                .with_history(config.history)
                .with_curve(config.curve)
                .with_sorted(config.sorted),
            codec: Codec::from(config.items),
            evaluator: Evaluator::new(config.battles, battlers),
            history: History::default(),
            evaluation: None,
            ledger: Ledger::default(),
            config,
            rng,
            game,
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    /// How the finished draft scored, once it has.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }
    fn mask(&self) -> Option<Vec<bool>> {
        self.config
            .mask
            .then(|| self.codec.mask(&self.game, &self.observer.ordering(&self.game)))
    }
}

impl<G: Engine, A: Agent, F: Features> Environment for DraftEnv<G, A, F> {
    fn reset(&mut self) -> Vec<Feature> {
        let seed = self.rng.random::<u64>();
        self.game = G::start(self.config.rules(), seed);
        self.evaluator.reseed(seed);
        self.history.clear();
        self.evaluation = None;
        self.ledger.open();
        log::debug!("[draft] dealt game {:#x}", seed);
        self.observe()
    }
    fn step(&mut self, command: Command) -> Result<Step, EnvError> {
        if self.is_done() {
            return Err(EnvError::GameEnded);
        }
        let player = self.game.current().order();
        let ordering = self.observer.ordering(&self.game);
        match self.codec.decode(command, &self.game, &ordering)? {
            Some(Action::Pick(i)) => {
                let card = self.game.current().hand().get(i).cloned();
                self.game.apply(Action::Pick(i));
                if let Some(card) = card.filter(|_| !self.game.was_invalid()) {
                    log::debug!("[draft] {} picks {}", player, card);
                    self.history.record(player, card);
                }
            }
            Some(action) => self.game.apply(action),
            None => self.game.invalidate(),
        }
        let invalid = self.game.was_invalid();
        let observation = self.observe();
        match self.game.is_drafting() {
            true => Ok(Step {
                observation,
                reward: 0.,
                done: false,
                info: Info {
                    phase: self.game.phase(),
                    turn: Some(self.game.turn()),
                    winner: Vec::new(),
                    invalid,
                    mask: self.mask(),
                },
            }),
            false => {
                let evaluation = self.evaluator.evaluate(&mut self.game);
                log::info!("[draft] scored {}", evaluation);
                self.ledger.credit(evaluation.reward());
                let step = Step {
                    observation,
                    reward: evaluation.reward(),
                    done: true,
                    info: Info {
                        phase: self.game.phase(),
                        turn: None,
                        winner: evaluation.winners().to_vec(),
                        invalid,
                        mask: None,
                    },
                };
                self.evaluation = Some(evaluation);
                Ok(step)
            }
        }
    }
    fn observation_len(&self) -> usize {
        self.observer.len()
    }
    fn action_space(&self) -> usize {
        self.codec.space(Phase::Draft)
    }
    fn rewards(&self) -> &[Reward] {
        self.ledger.rewards()
    }
}

impl<G: Engine, A: Agent, F: Features> Arena for DraftEnv<G, A, F> {
    type G = G;
    fn game(&self) -> &G {
        &self.game
    }
    fn observe(&self) -> Vec<Feature> {
        let player = self.game.current().order();
        self.observer.observe(&self.game, self.history.of(player))
    }
    fn is_done(&self) -> bool {
        !self.game.is_drafting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::Duel;

    fn config() -> Config {
        Config {
            seed: Some(5),
            n: 4,
            history: true,
            curve: true,
            sorted: true,
            ..Config::default()
        }
    }

    fn env(config: Config) -> DraftEnv<Duel, RandomAgent> {
        DraftEnv::new(config, [RandomAgent::from(0), RandomAgent::from(1)], Normalized)
    }

    #[test]
    fn shape() {
        let mut env = env(config());
        assert_eq!(env.observation_len(), 48 + 64 + 13);
        assert_eq!(env.action_space(), 3);
        assert_eq!(env.reset().len(), env.observation_len());
    }

    #[test]
    fn picks_follow_the_sorted_ordering() {
        let mut env = env(config());
        env.reset();
        let hand = env.game().current().hand().to_vec();
        let lowest = hand.iter().map(|c| c.id()).min();
        env.step(Command::from(0usize)).expect("live draft");
        let picked = env.history().of(PlayerOrder::First);
        assert_eq!(picked.iter().map(|c| c.id()).next(), lowest);
    }

    #[test]
    fn distinct_codes_pick_distinct_cards() {
        let mut env = env(config());
        env.reset();
        let picks = (0..3)
            .map(|o| {
                let mut env = env.clone();
                env.step(Command::from(o as usize)).expect("live draft");
                env.history().of(PlayerOrder::First)[0].clone()
            })
            .collect::<Vec<_>>();
        let hand = env.game().current().hand();
        for card in hand {
            assert_eq!(picks.iter().filter(|p| *p == card).count(), hand.iter().filter(|c| *c == card).count());
        }
    }

    #[test]
    fn episode_ends_with_evaluation() {
        let mut env = env(Config { battles: 3, ..config() });
        env.reset();
        let mut last = None;
        for _ in 0..8 {
            let step = env.step(Command::from(1usize)).expect("live draft");
            assert_eq!(step.observation.len(), env.observation_len());
            last = Some(step);
        }
        let last = last.expect("stepped");
        assert!(last.done);
        assert_eq!(last.info.turn, None);
        assert_eq!(last.info.winner.len(), 3);
        assert_eq!(Some(last.reward), env.evaluation().map(|e| e.reward()));
        assert_eq!(env.rewards(), &[last.reward]);
        assert_eq!(env.history().of(PlayerOrder::First).len(), 4);
        assert_eq!(env.history().of(PlayerOrder::Second).len(), 4);
        assert_eq!(env.step(Command::from(0usize)), Err(EnvError::GameEnded));
    }

    #[test]
    fn rejects_battle_actions_while_drafting() {
        let mut env = env(config());
        env.reset();
        let error = env.step(Command::Act(Action::Pass));
        assert!(matches!(error, Err(EnvError::Malformed(_))));
        assert!(env.history().of(PlayerOrder::First).is_empty());
    }

    #[test]
    fn history_resets() {
        let mut env = env(config());
        env.reset();
        env.step(Command::from(2usize)).expect("live draft");
        env.reset();
        assert!(env.history().of(PlayerOrder::First).is_empty());
    }
}
