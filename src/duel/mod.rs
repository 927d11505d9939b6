//! A self-contained reference rules engine.
//!
//! [`Duel`] implements [`Engine`](crate::gameplay::Engine) for a compact
//! two-lane card game over a fixed, procedurally generated [`catalog`]. The
//! environments never depend on it directly; it exists so they can be driven,
//! tested and benchmarked without an external engine.
pub mod catalog;
pub use catalog::*;

pub mod game;
pub use game::*;
