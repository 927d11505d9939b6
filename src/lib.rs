//! Reinforcement-learning environments for a two-phase card game.
//!
//! A game is a draft (both players repeatedly pick one of `k` offered cards)
//! followed by a battle (two decks played to a win or a loss). This crate
//! adapts any rules engine implementing [`Engine`] to the interface training
//! loops expect: fixed-length observations, flat integer actions and scalar
//! rewards.
//!
//! ## Modules
//!
//! - [`cards`]: Card data as the engine exposes it
//! - [`gameplay`]: The rules-engine contract ([`Engine`], [`Action`], [`Player`])
//! - [`duel`]: A compact reference engine implementing the contract
//! - [`encoding`]: Feature encoders, slot packing, observation assemblers, action codec
//! - [`players`]: Scripted agents and the opponent sources a learner can face
//! - [`env`]: Environments, the turn scheduler and the draft evaluator
#![allow(dead_code)]

pub mod cards;
pub mod duel;
pub mod encoding;
pub mod env;
pub mod gameplay;
pub mod players;

pub use cards::*;
pub use duel::*;
pub use encoding::*;
pub use env::*;
pub use gameplay::*;
pub use players::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single observation feature.
pub type Feature = f32;
/// Scalar reward handed back to the learner.
pub type Reward = f32;

// ============================================================================
// BOARD CAPACITIES
// The engine guarantees these are never exceeded.
// ============================================================================
/// Maximum cards held in hand.
pub const HAND_CAPACITY: usize = 8;
/// Number of lanes per player.
pub const LANES: usize = 2;
/// Maximum creatures per lane.
pub const LANE_CAPACITY: usize = 3;
/// Maximum creatures on one side of the board.
pub const BOARD_CAPACITY: usize = LANES * LANE_CAPACITY;

// ============================================================================
// FEATURE WIDTHS
// ============================================================================
/// Scalars per player: health, mana, next rune, next draw.
pub const PLAYER_FEATURES: usize = 4;
/// Full card encoding (4 kind flags + 6 attributes + 6 keywords).
pub const CARD_FEATURES: usize = 16;
/// Card encoding with the kind flags clipped, used when items are disabled.
pub const CLIPPED_FEATURES: usize = CARD_FEATURES - KIND_FEATURES;
/// Leading kind flags of a full card encoding.
pub const KIND_FEATURES: usize = 4;
/// A friendly creature on board.
pub const FRIENDLY_FEATURES: usize = 9;
/// An enemy creature on board. Narrower than friendly on purpose.
pub const ENEMY_FEATURES: usize = 8;
/// Mana cost buckets 0..=12 for the draft mana curve.
pub const MANA_BUCKETS: usize = 13;

// ============================================================================
// ACTION SPACES
// ============================================================================
/// Draft codes: choose one of the three offered cards.
pub const DRAFT_ACTIONS: usize = 3;
/// Battle codes with items: pass + 16 summons + 104 uses + 24 attacks.
pub const BATTLE_ACTIONS: usize = 145;
/// Battle codes without items: pass + 16 summons + 24 attacks.
pub const BATTLE_ACTIONS_NO_ITEMS: usize = 41;
/// Always-legal code forced after an illegal opponent move.
pub const FALLBACK: usize = 0;

// ============================================================================
// DRAFT DEFAULTS
// ============================================================================
/// Cards offered per draft turn.
pub const DRAFT_CHOICES: usize = 3;
/// Draft turns, and so deck size.
pub const DRAFT_TURNS: usize = 30;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
