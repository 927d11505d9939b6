use crate::Reward;

/// Running reward totals, one per episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger(Vec<Reward>);

impl Ledger {
    /// Starts a new episode at zero.
    pub fn open(&mut self) {
        self.0.push(0.);
    }
    /// Adds to the current episode, opening one if none is.
    pub fn credit(&mut self, reward: Reward) {
        match self.0.last_mut() {
            Some(total) => *total += reward,
            None => self.0.push(reward),
        }
    }
    pub fn rewards(&self) -> &[Reward] {
        &self.0
    }
    pub fn last(&self) -> Option<Reward> {
        self.0.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_the_open_episode() {
        let mut ledger = Ledger::default();
        ledger.credit(1.);
        ledger.open();
        ledger.credit(-1.);
        ledger.credit(0.5);
        assert_eq!(ledger.rewards(), &[1., -0.5]);
        assert_eq!(ledger.last(), Some(-0.5));
    }
}
