use super::*;
use crate::encoding::*;
use crate::gameplay::*;
use crate::players::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The battle phase as an environment.
///
/// Every reset deals a fresh game and lets scripted drafters build both
/// decks, so episodes start at the first battle turn. The learner then moves
/// for whichever player is acting; wrap it in [`Versus`] to hold one seat.
/// Rewards are from the first player's perspective: `+1` if it wins, `-1` if
/// it loses, `0` until then.
#[derive(Debug, Clone)]
pub struct BattleEnv<G: Engine, A: Agent = Bot, F: Features = Normalized> {
    config: Config,
    rng: SmallRng,
    game: G,
    drafters: [A; 2],
    observer: BattleObserver<F>,
    codec: Codec,
    ledger: Ledger,
}

impl<G: Engine> From<Config> for BattleEnv<G> {
    fn from(config: Config) -> Self {
        Self::new(config, [Bot::default(), Bot::default()], Normalized)
    }
}

impl<G: Engine, A: Agent, F: Features> BattleEnv<G, A, F> {
    pub fn new(config: Config, drafters: [A; 2], features: F) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let game = G::start(config.rules(), rng.random());
        let mut env = Self {
            observer: BattleObserver::new(config.items, features),
            codec: Codec::from(config.items),
            ledger: Ledger::default(),
            config,
            rng,
            game,
            drafters,
        };
        env.deal();
        env
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Starts a new game and plays its draft out.
    fn deal(&mut self) {
        let seed = self.rng.random::<u64>();
        self.game = G::start(self.config.rules(), seed);
        for (i, drafter) in self.drafters.iter_mut().enumerate() {
            drafter.reset();
            drafter.seed(seed.wrapping_add(1 + i as u64));
        }
        while self.game.is_drafting() {
            let seat = self.game.current().order().index();
            let action = self.drafters[seat].act(&self.game);
            self.game.apply(action);
            if self.game.was_invalid() {
                self.game.apply(Action::Pick(0));
            }
        }
        log::debug!("[battle] dealt game {:#x}", seed);
    }
    fn mask(&self) -> Option<Vec<bool>> {
        self.config
            .mask
            .then(|| self.codec.mask(&self.game, &Ordering::identity(0)))
    }
}

impl<G: Engine, A: Agent, F: Features> Environment for BattleEnv<G, A, F> {
    fn reset(&mut self) -> Vec<Feature> {
        self.deal();
        self.ledger.open();
        self.observe()
    }
    fn step(&mut self, command: Command) -> Result<Step, EnvError> {
        if self.game.is_over() {
            return Err(EnvError::GameEnded);
        }
        match self.codec.decode(command, &self.game, &Ordering::identity(0))? {
            Some(action) => self.game.apply(action),
            None => self.game.invalidate(),
        }
        log::debug!(
            "[battle] {} {} {}",
            self.game.turn(),
            command,
            if self.game.was_invalid() { "refused" } else { "applied" }
        );
        let winner = self.game.winner();
        let reward = winner.map(|w| w.reward()).unwrap_or(0.);
        if let Some(winner) = winner {
            log::info!("[battle] {} wins on turn {}", winner, self.game.turn());
            self.ledger.credit(reward);
        }
        Ok(Step {
            observation: self.observe(),
            reward,
            done: winner.is_some(),
            info: Info {
                phase: self.game.phase(),
                turn: Some(self.game.turn()),
                winner: winner.into_iter().collect(),
                invalid: self.game.was_invalid(),
                mask: self.mask(),
            },
        })
    }
    fn observation_len(&self) -> usize {
        self.observer.len()
    }
    fn action_space(&self) -> usize {
        self.codec.space(Phase::Battle)
    }
    fn rewards(&self) -> &[Reward] {
        self.ledger.rewards()
    }
}

impl<G: Engine, A: Agent, F: Features> Arena for BattleEnv<G, A, F> {
    type G = G;
    fn game(&self) -> &G {
        &self.game
    }
    fn observe(&self) -> Vec<Feature> {
        self.observer
            .observe(&self.game)
            .unwrap_or_else(|| vec![0.; self.observer.len()])
    }
    fn is_done(&self) -> bool {
        self.game.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::Duel;

    fn env(items: bool) -> BattleEnv<Duel> {
        BattleEnv::from(Config {
            seed: Some(11),
            items,
            mask: true,
            ..Config::default()
        })
    }

    fn play_out(env: &mut BattleEnv<Duel>) -> Step {
        let mut agent = RandomAgent::from(3);
        loop {
            let action = agent.act(env.game());
            let step = env.step(Command::Act(action)).expect("live game");
            if step.done {
                return step;
            }
        }
    }

    #[test]
    fn starts_in_battle() {
        let mut env = env(true);
        let observation = env.reset();
        assert_eq!(env.game().phase(), Phase::Battle);
        assert_eq!(observation.len(), 238);
        assert_eq!(env.observation_len(), 238);
        assert_eq!(env.action_space(), 145);
    }

    #[test]
    fn observation_length_is_constant() {
        for items in [true, false] {
            let mut env = env(items);
            for _ in 0..3 {
                let len = env.reset().len();
                assert_eq!(len, env.observation_len());
                let step = play_out(&mut env);
                assert_eq!(step.observation.len(), len);
            }
        }
    }

    #[test]
    fn terminal_reward_and_ledger() {
        let mut env = env(true);
        env.reset();
        let step = play_out(&mut env);
        let winner = env.game().winner().expect("decided");
        assert_eq!(step.info.winner, vec![winner]);
        assert_eq!(step.reward, winner.reward());
        assert_eq!(env.rewards(), &[winner.reward()]);
    }

    #[test]
    fn stepping_after_the_end_is_refused() {
        let mut env = env(true);
        env.reset();
        play_out(&mut env);
        let turn = env.game().turn();
        assert_eq!(env.step(Command::from(0usize)), Err(EnvError::GameEnded));
        assert_eq!(env.game().turn(), turn);
    }

    #[test]
    fn empty_slots_are_invalid_not_fatal() {
        let mut env = env(true);
        env.reset();
        let step = env.step(Command::from(144usize)).expect("well formed");
        assert!(step.info.invalid);
        assert!(!step.done);
        assert!(matches!(env.step(Command::from(145usize)), Err(EnvError::Malformed(_))));
    }

    #[test]
    fn mask_marks_pass() {
        let mut env = env(true);
        env.reset();
        let step = env.step(Command::from(144usize)).expect("well formed");
        let mask = step.info.mask.expect("masking on");
        assert_eq!(mask.len(), 145);
        assert!(mask[0]);
    }

    #[test]
    fn seeded_envs_replay() {
        let mut a = env(true);
        let mut b = env(true);
        assert_eq!(a.reset(), b.reset());
        assert_eq!(play_out(&mut a), play_out(&mut b));
    }
}
