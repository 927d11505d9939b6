use super::*;
use crate::cards::Instance;
use crate::env::EnvError;
use crate::gameplay::*;
use crate::*;

const SUMMON: usize = 1;
const USE: usize = 17;
const ATTACK: usize = 121;
/// Targets per used item: none, six friendly slots, six enemy slots.
const USE_TARGETS: usize = 1 + 2 * BOARD_CAPACITY;
/// Targets per attacker: the enemy player, three enemy slots in the same lane.
const ATTACK_TARGETS: usize = 1 + LANE_CAPACITY;
/// Without items the use range disappears and attack codes shift down onto it.
const ITEM_CODES: usize = ATTACK - USE;

/// Translates between flat action codes and structured actions.
///
/// Battle codes, with items:
///
/// | codes      | action                                               |
/// |------------|------------------------------------------------------|
/// | `0`        | pass                                                 |
/// | `1..=16`   | summon hand slot `(c-1)/2` into lane `(c-1)%2`       |
/// | `17..=120` | use hand slot `(c-17)/13` on target `(c-17)%13`      |
/// | `121..=144`| attack with board slot `(c-121)/4` on `(c-121)%4`    |
///
/// Use targets: `0` none, `1..=6` own board, `7..=12` enemy board, both
/// lane-major. Attack targets: `0` the enemy player, otherwise the enemy
/// creature at that position in the attacker's lane. Without items the use
/// range is gone and codes `17..=40` are shifted up by 104 onto the attacks.
///
/// Draft codes pick option `o` of the current [`Ordering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    items: bool,
}

impl From<bool> for Codec {
    fn from(items: bool) -> Self {
        Self { items }
    }
}

impl Codec {
    pub fn items(&self) -> bool {
        self.items
    }
    pub fn space(&self, phase: Phase) -> usize {
        match (phase, self.items) {
            (Phase::Draft, _) => DRAFT_ACTIONS,
            (_, true) => BATTLE_ACTIONS,
            (_, false) => BATTLE_ACTIONS_NO_ITEMS,
        }
    }

    /// Reads a command against the current state.
    ///
    /// `Ok(None)` means the code is well formed but addresses an empty slot;
    /// the caller records the step as invalid.
    pub fn decode<G: Engine>(
        &self,
        command: Command,
        game: &G,
        ordering: &Ordering,
    ) -> Result<Option<Action>, EnvError> {
        match (command, game.phase()) {
            (Command::Code(code), phase) => {
                let space = self.space(phase);
                let code = usize::try_from(code)
                    .ok()
                    .filter(|&c| c < space)
                    .ok_or_else(|| EnvError::Malformed(format!("code {code} outside [0, {space})")))?;
                match phase {
                    Phase::Draft => self.decode_draft(code, ordering).map(Some),
                    _ => self.decode_battle(code, game),
                }
            }
            (Command::Act(Action::Pick(i)), Phase::Draft) => {
                let k = game.current().hand().len();
                Ok(Some(Action::Pick(if i < k { i } else { 0 })))
            }
            (Command::Act(action), Phase::Draft) => Err(EnvError::Malformed(format!("{action} while drafting"))),
            (Command::Act(Action::Pick(i)), _) => Err(EnvError::Malformed(format!("pick {i} outside the draft"))),
            (Command::Act(action), _) => Ok(Some(action)),
        }
    }
    pub fn decode_draft(&self, code: usize, ordering: &Ordering) -> Result<Action, EnvError> {
        match code < DRAFT_ACTIONS {
            true => Ok(Action::Pick(ordering.remap(code))),
            false => Err(EnvError::Malformed(format!("draft code {code}"))),
        }
    }
    pub fn decode_battle<G: Engine>(&self, code: usize, game: &G) -> Result<Option<Action>, EnvError> {
        if code >= self.space(Phase::Battle) {
            return Err(EnvError::Malformed(format!("battle code {code}")));
        }
        let code = match (self.items, code) {
            (_, 0) => return Ok(Some(Action::Pass)),
            (false, c) if c >= USE => c + ITEM_CODES,
            (_, c) => c,
        };
        let current = game.current();
        let opposing = game.opposing();
        let held = |slot: usize| current.hand().get(slot).map(|c| c.instance());
        let action = if code < USE {
            let (slot, lane) = ((code - SUMMON) / LANES, Lane::from((code - SUMMON) % LANES));
            held(slot).map(|origin| Action::Summon { origin, lane })
        } else if code < ATTACK {
            let (slot, t) = ((code - USE) / USE_TARGETS, (code - USE) % USE_TARGETS);
            let target = match t {
                0 => Some(None),
                t => {
                    let side = match (t - 1) / BOARD_CAPACITY {
                        0 => current,
                        _ => opposing,
                    };
                    Self::occupant(side, (t - 1) % BOARD_CAPACITY).map(Some)
                }
            };
            held(slot).zip(target).map(|(origin, target)| Action::Use { origin, target })
        } else {
            let (slot, t) = ((code - ATTACK) / ATTACK_TARGETS, (code - ATTACK) % ATTACK_TARGETS);
            let lane = Lane::from(slot / LANE_CAPACITY);
            let target = match t {
                0 => Some(None),
                t => opposing.lane(lane).get(t - 1).map(|c| Some(c.instance())),
            };
            Self::occupant(current, slot)
                .zip(target)
                .map(|(origin, target)| Action::Attack { origin, target })
        };
        Ok(action)
    }
    /// Creature at a lane-major board slot.
    fn occupant(player: &Player, slot: usize) -> Option<Instance> {
        player
            .lane(Lane::from(slot / LANE_CAPACITY))
            .get(slot % LANE_CAPACITY)
            .map(|c| c.instance())
    }
    /// Board slot of a creature, lane-major.
    fn slot(player: &Player, instance: Instance) -> Option<usize> {
        player
            .locate(instance)
            .map(|(lane, i)| lane.index() * LANE_CAPACITY + i)
    }

    /// The code that decodes to `action` in this state, if any.
    pub fn encode<G: Engine>(&self, action: &Action, game: &G, ordering: &Ordering) -> Option<usize> {
        let current = game.current();
        let opposing = game.opposing();
        let code = match *action {
            Action::Pick(i) => return ordering.position(i).filter(|&o| o < DRAFT_ACTIONS),
            Action::Pass => return Some(0),
            Action::Summon { origin, lane } => SUMMON + current.holding(origin)? * LANES + lane.index(),
            Action::Use { origin, target } => {
                let t = match target {
                    None => 0,
                    Some(x) => Self::slot(current, x)
                        .map(|s| 1 + s)
                        .or_else(|| Self::slot(opposing, x).map(|s| 1 + BOARD_CAPACITY + s))?,
                };
                USE + current.holding(origin)? * USE_TARGETS + t
            }
            Action::Attack { origin, target } => {
                let (lane, _) = current.locate(origin)?;
                let t = match target {
                    None => 0,
                    Some(x) => 1 + opposing.lane(lane).iter().position(|c| c.instance() == x)?,
                };
                ATTACK + Self::slot(current, origin)? * ATTACK_TARGETS + t
            }
        };
        match (self.items, code) {
            (true, c) => Some(c),
            (false, c) if c >= ATTACK => Some(c - ITEM_CODES),
            (false, _) => match action {
                Action::Summon { .. } => Some(code),
                _ => None,
            },
        }
    }

    /// Which codes currently decode to a legal action.
    pub fn mask<G: Engine>(&self, game: &G, ordering: &Ordering) -> Vec<bool> {
        let mut mask = vec![false; self.space(game.phase())];
        for action in game.legal() {
            if let Some(code) = self.encode(&action, game, ordering) {
                mask[code] = true;
            }
        }
        mask
    }
}
