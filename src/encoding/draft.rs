use super::*;
use crate::cards::Card;
use crate::gameplay::*;
use crate::*;

/// Flattens a draft state, from the acting player's point of view.
///
/// The card region is right-aligned: the pick history (when enabled) takes
/// `n` slots, then the `k` current choices close the region. The mana curve,
/// when enabled, is appended after the card region.
///
/// - history: the acting player's picks, oldest first, so the most recent
///   pick sits in the last history slot; optionally sorted by card number
/// - choices: the offered cards in [`Ordering`] order, zero once the draft is over
/// - curve: how many picked cards cost 0, 1, .. 12 (anything dearer counts as 12)
#[derive(Debug, Clone)]
pub struct DraftObserver<F: Features = Normalized> {
    k: usize,
    n: usize,
    history: bool,
    curve: bool,
    sorted: bool,
    features: F,
}

impl<F: Features> DraftObserver<F> {
    pub fn new(k: usize, n: usize, features: F) -> Self {
        Self {
            k,
            n,
            features,
            history: false,
            curve: false,
            sorted: false,
        }
    }
    pub fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }
    pub fn with_curve(mut self, curve: bool) -> Self {
        self.curve = curve;
        self
    }
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }
    pub fn len(&self) -> usize {
        Self::size(self.k, self.n, self.history, self.curve)
    }
    pub const fn size(k: usize, n: usize, history: bool, curve: bool) -> usize {
        k * CARD_FEATURES
            + if history { n * CARD_FEATURES } else { 0 }
            + if curve { MANA_BUCKETS } else { 0 }
    }
    /// The ordering the choice block is laid out in.
    pub fn ordering<G: Engine>(&self, game: &G) -> Ordering {
        Ordering::of(self.offered(game), self.sorted)
    }
    fn offered<'g, G: Engine>(&self, game: &'g G) -> &'g [Card] {
        match game.is_drafting() {
            true => &game.current().hand()[..self.k.min(game.current().hand().len())],
            false => &[],
        }
    }
    /// `chosen` is the acting player's picks so far, oldest first.
    pub fn observe<G: Engine>(&self, game: &G, chosen: &[Card]) -> Vec<Feature> {
        let mut out = Vec::with_capacity(self.len());
        if self.history {
            let mut picks = chosen.iter().collect::<Vec<&Card>>();
            if self.sorted {
                picks.sort_by_key(|c| c.id());
            }
            Slots::right(self.n, CARD_FEATURES)
                .fill(&mut out, picks.into_iter().map(|c| self.features.card(c)));
        }
        let offered = self.offered(game);
        Slots::left(self.k, CARD_FEATURES).fill(
            &mut out,
            self.ordering(game)
                .arrange(offered)
                .map(|c| self.features.card(c)),
        );
        if self.curve {
            out.extend(Self::curve(chosen));
        }
        debug_assert_eq!(out.len(), self.len());
        out
    }
    fn curve(chosen: &[Card]) -> [Feature; MANA_BUCKETS] {
        let mut curve = [0.; MANA_BUCKETS];
        for card in chosen {
            curve[(card.cost() as usize).min(MANA_BUCKETS - 1)] += 1.;
        }
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Kind;
    use crate::duel::Duel;

    fn observer() -> DraftObserver {
        DraftObserver::new(3, 30, Normalized)
    }

    #[test]
    fn observation_sizes() {
        assert_eq!(observer().len(), 48);
        assert_eq!(observer().with_history(true).len(), 528);
        assert_eq!(observer().with_history(true).with_curve(true).len(), 541);
        assert_eq!(observer().with_curve(true).len(), 61);
    }

    #[test]
    fn choices_follow_ordering() {
        let game = Duel::start(Rules::default(), 7);
        let observer = observer().with_sorted(true);
        let obs = observer.observe(&game, &[]);
        let ordering = observer.ordering(&game);
        for (o, card) in ordering.arrange(game.current().hand()).enumerate() {
            assert_eq!(&obs[o * 16..(o + 1) * 16], &Normalized.card(card));
        }
        let hand = game.current().hand();
        let ids = (0..3).map(|o| hand[ordering.remap(o)].id()).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn history_is_right_aligned() {
        let game = Duel::start(Rules::default(), 8);
        let picks = [
            Card::from((10, Kind::Creature, 1, 1, 1)),
            Card::from((20, Kind::Creature, 2, 2, 2)),
        ];
        let obs = observer().with_history(true).observe(&game, &picks);
        let history = &obs[..30 * 16];
        assert!(history[..28 * 16].iter().all(|&x| x == 0.));
        assert_eq!(&history[28 * 16..29 * 16], &Normalized.card(&picks[0]));
        assert_eq!(&history[29 * 16..], &Normalized.card(&picks[1]));
    }

    #[test]
    fn curve_counts_costs() {
        let game = Duel::start(Rules::default(), 9);
        let picks = [
            Card::from((1, Kind::Creature, 2, 1, 1)),
            Card::from((2, Kind::Creature, 2, 1, 1)),
            Card::from((3, Kind::Creature, 13, 1, 1)),
        ];
        let obs = observer().with_curve(true).observe(&game, &picks);
        let curve = &obs[48..];
        assert_eq!(curve.len(), 13);
        assert_eq!(curve[2], 2.);
        assert_eq!(curve[12], 1.);
        assert_eq!(curve.iter().sum::<Feature>(), 3.);
    }

    #[test]
    fn choices_blank_after_draft() {
        let mut game = Duel::start(Rules { n: 2, ..Rules::default() }, 10);
        while game.is_drafting() {
            game.apply(Action::Pick(0));
        }
        let obs = observer().observe(&game, &[]);
        assert_eq!(obs, vec![0.; 48]);
    }
}
