use super::*;

/// The rules-engine contract.
///
/// Everything the adapter needs from a game implementation and nothing
/// more: phase and player queries, applying an action, reading the winner and
/// cloning. Legality, effect resolution and win detection live entirely on
/// the implementor's side.
///
/// # Requirements
///
/// - `Clone` must be a deep, independent copy. Draft evaluation plays
///   trials on clones and they must not observe each other.
/// - `apply` never panics on an illegal action; it flags it instead, readable
///   through [`was_invalid`](Self::was_invalid) until the next `apply`.
/// - Hands never exceed [`HAND_CAPACITY`](crate::HAND_CAPACITY) cards and lanes
///   never exceed [`LANE_CAPACITY`](crate::LANE_CAPACITY).
/// - During the draft, the current player's hand is the offered choice.
pub trait Engine: Clone + Send + Sync + std::fmt::Debug {
    /// Deals a fresh game at the start of the draft.
    fn start(rules: Rules, seed: u64) -> Self;
    fn phase(&self) -> Phase;
    /// Turn counter, starting at 1 in each phase.
    fn turn(&self) -> u32;
    /// The player whose move it is.
    fn current(&self) -> &Player;
    /// The other player.
    fn opposing(&self) -> &Player;
    /// Applies an action, or flags it invalid and leaves the state alone.
    fn apply(&mut self, action: Action);
    /// Flags the last step invalid without touching the state.
    fn invalidate(&mut self);
    fn was_invalid(&self) -> bool;
    fn winner(&self) -> Option<PlayerOrder>;
    /// Every legal action in the current state.
    fn legal(&self) -> Vec<Action>;

    fn is_over(&self) -> bool {
        self.winner().is_some()
    }
    fn is_drafting(&self) -> bool {
        self.phase().is_draft()
    }
}
