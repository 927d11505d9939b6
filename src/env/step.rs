use crate::gameplay::*;
use crate::*;

/// What one call to `step` hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Vec<Feature>,
    pub reward: Reward,
    pub done: bool,
    pub info: Info,
}

/// Side-channel details of a step.
///
/// - `phase`: Game phase after the step
/// - `turn`: Turn counter, absent once a draft episode is done
/// - `winner`: Winner of a finished battle, or of every scoring battle of a draft
/// - `invalid`: Whether the learner's action was refused
/// - `mask`: Which codes are legal next, when masking is on
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub phase: Phase,
    pub turn: Option<u32>,
    pub winner: Vec<PlayerOrder>,
    pub invalid: bool,
    pub mask: Option<Vec<bool>>,
}
