//! Card data as a rules engine exposes it to the adapter.
//!
//! - [`Card`]: One card copy with its combat stats and effects
//! - [`Kind`]: Creature or item color
//! - [`Keywords`]: Packed set of [`Keyword`] abilities
pub mod card;
pub use card::*;

pub mod keywords;
pub use keywords::*;

pub mod kind;
pub use kind::*;
