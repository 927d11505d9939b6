//! The rules-engine contract consumed by the environments.
//!
//! - [`Engine`]: Phase and player queries, apply, winner, clone
//! - [`Action`]: Structured moves, addressed by card instance
//! - [`Player`]: One side's scalars, hand and lanes
//! - [`Phase`], [`PlayerOrder`], [`Lane`], [`Rules`]: Supporting vocabulary
pub mod action;
pub use action::*;

pub mod engine;
pub use engine::*;

pub mod lane;
pub use lane::*;

pub mod order;
pub use order::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod rules;
pub use rules::*;
