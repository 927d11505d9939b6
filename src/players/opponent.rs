use super::*;
use crate::Feature;
use crate::encoding::Command;
use crate::gameplay::Engine;

/// Whoever answers for the seat the learner does not hold.
///
/// Each call sees the live state and the observation from the opponent's own
/// point of view, and returns a code or a structured action. Whatever comes
/// back is decoded and applied exactly like a learner command.
pub trait Opponent<G: Engine> {
    fn choose(&mut self, game: &G, observation: &[Feature]) -> Command;
    /// Called at every episode reset.
    fn reset(&mut self) {}
}

impl<G: Engine> Opponent<G> for Box<dyn Opponent<G> + Send> {
    fn choose(&mut self, game: &G, observation: &[Feature]) -> Command {
        self.as_mut().choose(game, observation)
    }
    fn reset(&mut self) {
        self.as_mut().reset()
    }
}

/// A scripted agent sitting in the opponent's seat.
#[derive(Debug, Clone)]
pub struct Scripted<A: Agent>(A);

impl<A: Agent> From<A> for Scripted<A> {
    fn from(agent: A) -> Self {
        Self(agent)
    }
}

impl<A: Agent, G: Engine> Opponent<G> for Scripted<A> {
    fn choose(&mut self, game: &G, _: &[Feature]) -> Command {
        Command::Act(self.0.act(game))
    }
    fn reset(&mut self) {
        self.0.reset()
    }
}

/// Maps an observation to an action code.
pub trait Policy {
    fn predict(&self, observation: &[Feature]) -> usize;
}

impl<F> Policy for F
where
    F: Fn(&[Feature]) -> usize,
{
    fn predict(&self, observation: &[Feature]) -> usize {
        self(observation)
    }
}

/// A frozen copy of a learner's policy, for self-play.
///
/// Freezing clones the policy, so the learner keeps training while the
/// snapshot keeps playing the old parameters until it is refrozen.
#[derive(Debug, Clone)]
pub struct Snapshot<P: Policy>(P);

impl<P: Policy + Clone> Snapshot<P> {
    pub fn freeze(policy: &P) -> Self {
        Self(policy.clone())
    }
    pub fn refreeze(&mut self, policy: &P) {
        self.0 = policy.clone();
    }
}

impl<P: Policy, G: Engine> Opponent<G> for Snapshot<P> {
    fn choose(&mut self, _: &G, observation: &[Feature]) -> Command {
        Command::from(self.0.predict(observation))
    }
}

/// An arbitrary callback, such as an adversarial policy trained elsewhere.
pub struct External<F>(F);

impl<F> From<F> for External<F> {
    fn from(f: F) -> Self {
        Self(f)
    }
}

impl<F, C, G> Opponent<G> for External<F>
where
    F: FnMut(&[Feature]) -> C,
    C: Into<Command>,
    G: Engine,
{
    fn choose(&mut self, _: &G, observation: &[Feature]) -> Command {
        (self.0)(observation).into()
    }
}
