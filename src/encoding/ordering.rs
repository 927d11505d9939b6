use crate::cards::Card;

/// A permutation of the offered draft cards.
///
/// Position `o` of the choice block holds the card at hand index `self[o]`,
/// and draft code `o` picks that same card, so observation and action agree
/// whichever order is in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering(Vec<usize>);

impl From<Vec<usize>> for Ordering {
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

impl Ordering {
    pub fn identity(k: usize) -> Self {
        Self((0..k).collect())
    }
    /// Stable sort by card number: equal cards keep their hand order.
    pub fn sorted(cards: &[Card]) -> Self {
        let mut order = (0..cards.len()).collect::<Vec<usize>>();
        order.sort_by_key(|&i| cards[i].id());
        Self(order)
    }
    /// Ordering for the cards currently offered.
    pub fn of(cards: &[Card], sorted: bool) -> Self {
        match sorted {
            true => Self::sorted(cards),
            false => Self::identity(cards.len()),
        }
    }
    /// Hand index for draft option `o`. Options past the offer pick the first card.
    pub fn remap(&self, o: usize) -> usize {
        self.0.get(o).copied().unwrap_or(0)
    }
    /// Draft option that picks hand index `i`.
    pub fn position(&self, i: usize) -> Option<usize> {
        self.0.iter().position(|&j| j == i)
    }
    /// The cards, in this order.
    pub fn arrange<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.0.iter().filter_map(move |&i| items.get(i))
    }
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(o, &i)| o == i)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Kind;

    fn offer(ids: &[u16]) -> Vec<Card> {
        ids.iter()
            .map(|&id| Card::from((id, Kind::Creature, 1, 1, 1)))
            .collect()
    }

    #[test]
    fn sorted_by_id() {
        let cards = offer(&[42, 7, 19]);
        let ordering = Ordering::sorted(&cards);
        let ids = ordering.arrange(&cards).map(|c| c.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![7, 19, 42]);
        assert_eq!(ordering.remap(0), 1);
        assert_eq!(ordering.remap(2), 0);
    }

    #[test]
    fn remap_is_a_permutation() {
        let cards = offer(&[5, 5, 1]);
        let ordering = Ordering::sorted(&cards);
        let mut hits = (0..3).map(|o| ordering.remap(o)).collect::<Vec<_>>();
        hits.sort();
        assert_eq!(hits, vec![0, 1, 2]);
        assert_eq!(ordering.remap(0), 2);
        assert_eq!(ordering.remap(1), 0);
    }

    #[test]
    fn sorting_is_idempotent() {
        let cards = offer(&[9, 3, 6]);
        let once = Ordering::sorted(&cards)
            .arrange(&cards)
            .cloned()
            .collect::<Vec<_>>();
        assert!(Ordering::sorted(&once).is_identity());
    }

    #[test]
    fn out_of_range_falls_back_to_first() {
        let ordering = Ordering::identity(2);
        assert_eq!(ordering.remap(2), 0);
        assert!(ordering.is_identity());
    }
}
