//! Fixed-shape numeric views of a variable-size game, and back.
//!
//! - [`Features`]: Per-card and per-player tuples, [`Normalized`] by default
//! - [`Slots`]: Zero-padded fixed-capacity regions
//! - [`BattleObserver`], [`DraftObserver`]: Whole-state observation vectors
//! - [`Codec`], [`Ordering`], [`Command`]: Action codes to structured actions
pub mod battle;
pub use battle::*;

pub mod codec;
pub use codec::*;

pub mod command;
pub use command::*;

pub mod draft;
pub use draft::*;

pub mod features;
pub use features::*;

pub mod ordering;
pub use ordering::*;

pub mod slots;
pub use slots::*;
