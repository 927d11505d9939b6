use super::*;
use crate::encoding::Command;
use crate::gameplay::*;
use crate::players::Opponent;
use crate::*;

/// Whose input the episode is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Learner,
    Opponent,
    Terminal,
}

/// Seats the learner against an opponent.
///
/// Wraps an [`Arena`] whose learner would otherwise move for both players.
/// After every learner step, and at reset when the learner moves second, the
/// opponent is asked for moves until control comes back or the episode
/// ends. An opponent move that is refused or unreadable while the episode is
/// live is answered with a single forced [`FALLBACK`] code, after which
/// control returns to the learner.
///
/// Rewards are flipped to the learner's perspective and kept in a ledger of
/// their own; the invalid flag reported is always the learner's.
#[derive(Debug, Clone)]
pub struct Versus<E: Arena, O: Opponent<E::G>> {
    env: E,
    opponent: O,
    role: Role,
    seat: PlayerOrder,
    episodes: usize,
    ledger: Ledger,
}

impl<E: Arena, O: Opponent<E::G>> Versus<E, O> {
    pub fn new(env: E, opponent: O, role: Role) -> Self {
        Self {
            env,
            opponent,
            role,
            seat: role.seat(0),
            episodes: 0,
            ledger: Ledger::default(),
        }
    }
    pub fn env(&self) -> &E {
        &self.env
    }
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
    /// For refreezing a self-play snapshot between episodes.
    pub fn opponent_mut(&mut self) -> &mut O {
        &mut self.opponent
    }
    /// The learner's seat this episode.
    pub fn seat(&self) -> PlayerOrder {
        self.seat
    }
    pub fn control(&self) -> Control {
        if self.env.is_done() {
            Control::Terminal
        } else if self.env.game().current().order() == self.seat {
            Control::Learner
        } else {
            Control::Opponent
        }
    }
    fn perspective(&self, reward: Reward) -> Reward {
        match self.seat {
            PlayerOrder::First => reward,
            PlayerOrder::Second => -reward,
        }
    }
    /// Lets the opponent move until the learner is up or the episode is over.
    fn respond(&mut self) -> Option<Step> {
        let mut last = None;
        while self.control() == Control::Opponent {
            let observation = self.env.observe();
            let command = self.opponent.choose(self.env.game(), &observation);
            let refused = match self.env.step(command) {
                Ok(step) => {
                    let refused = step.info.invalid && !step.done;
                    last = Some(step);
                    refused
                }
                Err(e) => {
                    log::warn!("[versus] opponent sent {}: {}", command, e);
                    true
                }
            };
            if refused {
                log::warn!("[versus] opponent move {} refused, forcing fallback", command);
                match self.env.step(Command::from(FALLBACK)) {
                    Ok(step) => last = Some(step),
                    Err(e) => log::warn!("[versus] fallback failed: {}", e),
                }
                break;
            }
            log::debug!("[versus] opponent played {}", command);
        }
        last
    }
}

impl<E: Arena, O: Opponent<E::G>> Environment for Versus<E, O> {
    fn reset(&mut self) -> Vec<Feature> {
        self.seat = self.role.seat(self.episodes);
        self.episodes += 1;
        self.opponent.reset();
        self.ledger.open();
        let observation = self.env.reset();
        match self.control() {
            Control::Learner => observation,
            _ => {
                self.respond();
                self.env.observe()
            }
        }
    }
    fn step(&mut self, command: Command) -> Result<Step, EnvError> {
        if self.control() == Control::Terminal {
            return Err(EnvError::GameEnded);
        }
        let learner = self.env.step(command)?;
        let invalid = learner.info.invalid;
        let mut step = match learner.done {
            true => learner,
            false => self.respond().unwrap_or(learner),
        };
        step.info.invalid = invalid;
        step.reward = self.perspective(step.reward);
        if step.done {
            log::info!("[versus] learner as {} finished with {}", self.seat, step.reward);
            self.ledger.credit(step.reward);
        } else {
            step.observation = self.env.observe();
        }
        Ok(step)
    }
    fn observation_len(&self) -> usize {
        self.env.observation_len()
    }
    fn action_space(&self) -> usize {
        self.env.action_space()
    }
    fn rewards(&self) -> &[Reward] {
        self.ledger.rewards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::Duel;
    use crate::encoding::Normalized;
    use crate::players::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering::Relaxed;

    fn battle(seed: u64) -> BattleEnv<Duel, RandomAgent> {
        let config = Config {
            seed: Some(seed),
            ..Config::default()
        };
        BattleEnv::new(config, [RandomAgent::from(0), RandomAgent::from(1)], Normalized)
    }

    fn draft(seed: u64) -> DraftEnv<Duel, RandomAgent> {
        let config = Config {
            seed: Some(seed),
            n: 3,
            battles: 2,
            ..Config::default()
        };
        DraftEnv::new(config, [RandomAgent::from(0), RandomAgent::from(1)], Normalized)
    }

    /// Learner plays random legal moves until the episode ends.
    fn play_out<E: Arena, O: Opponent<E::G>>(versus: &mut Versus<E, O>, seed: u64) -> Step {
        let mut agent = RandomAgent::from(seed);
        loop {
            assert_eq!(versus.control(), Control::Learner);
            let action = agent.act(versus.env().game());
            let step = versus.step(Command::Act(action)).expect("live episode");
            if step.done {
                return step;
            }
        }
    }

    #[test]
    fn second_seat_waits_for_the_opponent() {
        let mut versus = Versus::new(battle(1), Scripted::from(RandomAgent::from(2)), Role::Second);
        versus.reset();
        assert_eq!(versus.seat(), PlayerOrder::Second);
        assert_eq!(versus.control(), Control::Learner);
        assert_eq!(versus.env().game().current().order(), PlayerOrder::Second);
    }

    #[test]
    fn rewards_follow_the_learner() {
        for role in [Role::First, Role::Second] {
            let mut versus = Versus::new(battle(2), Scripted::from(RandomAgent::from(3)), role);
            versus.reset();
            let step = play_out(&mut versus, 4);
            let winner = versus.env().game().winner().expect("decided");
            let won = winner == versus.seat();
            assert_eq!(step.reward, if won { 1. } else { -1. });
            assert_eq!(versus.rewards(), &[step.reward]);
            assert_eq!(versus.env().rewards(), &[winner.reward()]);
        }
    }

    #[test]
    fn alternate_switches_every_reset() {
        let mut versus = Versus::new(battle(3), Scripted::from(RandomAgent::from(4)), Role::Alternate);
        let seats = (0..4)
            .map(|_| {
                versus.reset();
                versus.seat()
            })
            .collect::<Vec<_>>();
        assert_eq!(
            seats,
            vec![PlayerOrder::First, PlayerOrder::Second, PlayerOrder::First, PlayerOrder::Second]
        );
    }

    #[test]
    fn one_fallback_per_refusal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let opponent = External::from(move |_: &[Feature]| {
            counter.fetch_add(1, Relaxed);
            144usize
        });
        let mut versus = Versus::new(battle(4), opponent, Role::First);
        versus.reset();
        let step = versus.step(Command::from(0usize)).expect("live episode");
        assert_eq!(calls.load(Relaxed), 1);
        assert!(!step.info.invalid);
        assert_eq!(versus.control(), Control::Learner);
        assert_eq!(versus.env().game().turn(), 2);
    }

    #[test]
    fn malformed_opponents_fall_back_too() {
        let opponent = External::from(|_: &[Feature]| -7i64);
        let mut versus = Versus::new(battle(5), opponent, Role::Second);
        let observation = versus.reset();
        assert_eq!(observation.len(), 238);
        assert_eq!(versus.control(), Control::Learner);
    }

    #[test]
    fn learner_invalid_flag_survives() {
        let mut versus = Versus::new(battle(6), Scripted::from(RandomAgent::from(7)), Role::First);
        versus.reset();
        let step = versus.step(Command::from(144usize)).expect("well formed");
        assert!(step.info.invalid);
        assert_eq!(versus.control(), Control::Learner);
    }

    #[test]
    fn ended_episodes_refuse_steps() {
        let mut versus = Versus::new(battle(7), Scripted::from(RandomAgent::from(8)), Role::First);
        versus.reset();
        play_out(&mut versus, 9);
        let before = versus.env().game().turn();
        assert_eq!(versus.step(Command::from(0usize)), Err(EnvError::GameEnded));
        assert_eq!(versus.env().game().turn(), before);
    }

    #[test]
    fn draft_alternates_one_pick_each() {
        let mut versus = Versus::new(draft(8), Scripted::from(MaxAttackAgent), Role::First);
        versus.reset();
        let step = versus.step(Command::from(0usize)).expect("live draft");
        assert!(!step.done);
        assert_eq!(versus.env().history().of(PlayerOrder::First).len(), 1);
        assert_eq!(versus.env().history().of(PlayerOrder::Second).len(), 1);
        let step = play_out(&mut versus, 10);
        assert_eq!(step.info.winner.len(), 2);
        assert_eq!(step.info.turn, None);
    }

    #[test]
    fn draft_as_second_negates_the_score() {
        let mut versus = Versus::new(draft(9), Scripted::from(MaxAttackAgent), Role::Second);
        versus.reset();
        assert_eq!(versus.env().history().of(PlayerOrder::First).len(), 1);
        let step = play_out(&mut versus, 11);
        let score = versus.env().evaluation().map(|e| e.reward()).expect("scored");
        assert_eq!(step.reward, -score);
    }
}
