use super::*;
use crate::cards::Instance;
use colored::*;
use std::fmt::{Display, Formatter, Result};

/// A structured move handed to the rules engine.
///
/// Battle actions refer to cards by [`Instance`], never by slot, so an action
/// stays meaningful while hands and lanes shift around it. Draft picks refer
/// to an index into the currently offered hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Take the offered card at this hand index.
    Pick(usize),
    /// Put a creature from hand into a lane.
    Summon { origin: Instance, lane: Lane },
    /// Use an item from hand, optionally on a creature.
    Use {
        origin: Instance,
        target: Option<Instance>,
    },
    /// Attack with a creature, either a creature or (`None`) the enemy player.
    Attack {
        origin: Instance,
        target: Option<Instance>,
    },
    /// End the turn.
    Pass,
}

impl Action {
    pub fn is_pick(&self) -> bool {
        matches!(self, Self::Pick(_))
    }
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let target = |t: &Option<Instance>| t.map(|i| i.to_string()).unwrap_or("-1".into());
        match self {
            Action::Pick(i) => write!(f, "{}", format!("PICK {}", i).cyan()),
            Action::Summon { origin, lane } => {
                write!(f, "{}", format!("SUMMON {} {}", origin, lane.index()).green())
            }
            Action::Use { origin, target: t } => {
                write!(f, "{}", format!("USE {} {}", origin, target(t)).yellow())
            }
            Action::Attack { origin, target: t } => {
                write!(f, "{}", format!("ATTACK {} {}", origin, target(t)).red())
            }
            Action::Pass => write!(f, "{}", "PASS".white()),
        }
    }
}
