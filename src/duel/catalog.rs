use crate::cards::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Number of distinct cards.
pub const CATALOG_SIZE: usize = 160;
/// Catalog numbers `1..=CREATURES` are creatures, the rest items.
pub const CREATURES: usize = 116;
/// The catalog is procedurally generated from this fixed seed.
const CATALOG_SEED: u64 = 0x10C_0160;

/// The fixed pool of cards every draft samples from.
///
/// Generated rather than transcribed, but identical across games and runs:
/// the same seed always yields the same 160 cards.
pub fn catalog() -> Vec<Card> {
    let ref mut rng = SmallRng::seed_from_u64(CATALOG_SEED);
    (1..=CATALOG_SIZE as CardId)
        .map(|id| match id as usize {
            i if i <= CREATURES => creature(id, rng),
            _ => item(id, rng),
        })
        .collect()
}

fn creature(id: CardId, rng: &mut SmallRng) -> Card {
    let cost = rng.random_range(0..=6u8) + rng.random_range(0..=6u8);
    let attack = rng.random_range(0..=(cost as i8 + 2).min(12));
    let defense = rng.random_range(1..=(cost as i8 + 3).min(12));
    let keywords = Keyword::ALL
        .into_iter()
        .filter(|_| rng.random_bool(0.12))
        .fold(Keywords::empty(), Keywords::with);
    let card = Card::from((id, Kind::Creature, cost, attack, defense)).with_keywords(keywords);
    match rng.random_bool(0.2) {
        false => card,
        true => card.with_effects(
            rng.random_range(0..=3),
            -rng.random_range(0..=3),
            rng.random_range(0..=1),
        ),
    }
}

fn item(id: CardId, rng: &mut SmallRng) -> Card {
    let cost = rng.random_range(0..=4u8) + rng.random_range(0..=4u8);
    let kind = Kind::from(rng.random_range(1..=3u8));
    let keyword = Keyword::ALL[rng.random_range(0..Keyword::ALL.len())];
    match kind {
        Kind::Green => Card::from((id, kind, cost, rng.random_range(0..=3), rng.random_range(0..=3)))
            .with_keywords(match rng.random_bool(0.3) {
                true => Keywords::empty().with(keyword),
                false => Keywords::empty(),
            }),
        Kind::Red => Card::from((id, kind, cost, -rng.random_range(0..=2), -rng.random_range(1..=4)))
            .with_keywords(match rng.random_bool(0.2) {
                true => Keywords::from(0b0011_1111u8),
                false => Keywords::empty(),
            }),
        Kind::Blue => Card::from((id, kind, cost, 0, -rng.random_range(0..=4))).with_effects(
            rng.random_range(0..=3),
            -rng.random_range(0..=3),
            rng.random_range(0..=1),
        ),
        Kind::Creature => unreachable!("items only"),
    }
}
