use crate::gameplay::*;

/// A scripted decision maker that plays structured actions directly.
///
/// Agents drive the parts of an episode the learner does not control: the
/// draft before a battle environment starts, the battles that score a draft,
/// and scripted opponents.
pub trait Agent: Clone + Send + Sync + std::fmt::Debug {
    fn act<G: Engine>(&mut self, game: &G) -> Action;
    /// Forget anything remembered from a previous game.
    fn reset(&mut self) {}
    /// Reseed any internal randomness.
    fn seed(&mut self, _: u64) {}
}
