//! Everyone who plays besides the learner.
//!
//! - [`Agent`]: Scripted play over structured actions
//! - [`RandomAgent`], [`MaxAttackAgent`], [`Bot`]: The stock agents
//! - [`Opponent`]: The seat facing the learner: [`Scripted`], [`Snapshot`], [`External`]
pub mod agent;
pub use agent::*;

pub mod bot;
pub use bot::*;

pub mod greedy;
pub use greedy::*;

pub mod opponent;
pub use opponent::*;

pub mod random;
pub use random::*;
