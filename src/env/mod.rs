//! Environments a training loop can drive.
//!
//! - [`BattleEnv`]: Battles, with the draft played out by scripted agents
//! - [`DraftEnv`]: Drafts, scored by an [`Evaluator`] once complete
//! - [`Versus`]: Either of the above against an [`Opponent`](crate::players::Opponent)
//! - [`Config`]: Shape and behavior, loadable from JSON
pub mod combat;
pub use combat::*;

pub mod config;
pub use config::*;

pub mod drafting;
pub use drafting::*;

pub mod environment;
pub use environment::*;

pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod history;
pub use history::*;

pub mod ledger;
pub use ledger::*;

pub mod step;
pub use step::*;

pub mod versus;
pub use versus::*;
