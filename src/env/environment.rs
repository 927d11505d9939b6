use super::*;
use crate::encoding::Command;
use crate::gameplay::Engine;
use crate::*;

/// The interface training loops drive.
///
/// Observation length and action space are fixed for the lifetime of an
/// instance. `step` refuses to run once an episode is done; call `reset`.
pub trait Environment {
    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Vec<Feature>;
    fn step(&mut self, command: Command) -> Result<Step, EnvError>;
    fn observation_len(&self) -> usize;
    fn action_space(&self) -> usize;
    /// Total reward of every episode so far, oldest first.
    fn rewards(&self) -> &[Reward];
}

/// An environment in which the learner moves for whichever player is acting.
///
/// [`Versus`] builds single-seat environments out of these by answering the
/// other seat itself, so it needs to look at the game and at the observation
/// the acting player would see.
pub trait Arena: Environment {
    type G: Engine;
    fn game(&self) -> &Self::G;
    /// The current observation, from the acting player's point of view.
    fn observe(&self) -> Vec<Feature>;
    /// Whether the episode is over, which may precede the game ending.
    fn is_done(&self) -> bool;
}
