use super::*;
use crate::cards::*;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Mana grows by one per turn up to this cap.
pub const MAX_MANA: i32 = 12;
/// Opening hand sizes by seat.
const OPENING: [usize; 2] = [4, 5];

/// A compact two-lane draft-and-battle card game.
///
/// Drafting: every turn both players are offered the same `k` cards and each
/// picks one into their deck, first player then second. After `n` turns the
/// decks are shuffled and the battle begins. Battling: players alternate
/// turns, summoning creatures, using items and attacking within a lane, until
/// one side's health drops to zero.
///
/// The whole state is owned and `Clone` is a deep copy, including the
/// random generator, so a cloned game replays identically.
#[derive(Debug, Clone)]
pub struct Duel {
    rules: Rules,
    rng: SmallRng,
    phase: Phase,
    turn: u32,
    actor: usize,
    players: [Player; 2],
    offers: Vec<Vec<Card>>,
    instances: Instance,
    invalid: bool,
    winner: Option<PlayerOrder>,
}

impl Engine for Duel {
    fn start(rules: Rules, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pool = catalog()
            .into_iter()
            .filter(|c| rules.items || c.kind().is_creature())
            .collect::<Vec<Card>>();
        let offers = (0..rules.n)
            .map(|_| pool.choose_multiple(&mut rng, rules.k).cloned().collect())
            .collect();
        let mut game = Self {
            rules,
            rng,
            offers,
            phase: Phase::Draft,
            turn: 1,
            actor: 0,
            players: [Player::from(PlayerOrder::First), Player::from(PlayerOrder::Second)],
            instances: 0,
            invalid: false,
            winner: None,
        };
        game.offer();
        game
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn turn(&self) -> u32 {
        self.turn
    }
    fn current(&self) -> &Player {
        &self.players[self.actor]
    }
    fn opposing(&self) -> &Player {
        &self.players[1 - self.actor]
    }
    fn apply(&mut self, action: Action) {
        if !self.is_allowed(&action) {
            log::trace!("[duel] {} rejected {}", PlayerOrder::from(self.actor), action);
            self.invalid = true;
            return;
        }
        log::trace!("[duel] {} plays {}", PlayerOrder::from(self.actor), action);
        self.invalid = false;
        match action {
            Action::Pick(i) => self.pick(i),
            Action::Summon { origin, lane } => self.summon(origin, lane),
            Action::Use { origin, target } => self.use_item(origin, target),
            Action::Attack { origin, target } => self.attack(origin, target),
            Action::Pass => self.pass(),
        }
        self.settle();
    }
    fn invalidate(&mut self) {
        self.invalid = true;
    }
    fn was_invalid(&self) -> bool {
        self.invalid
    }
    fn winner(&self) -> Option<PlayerOrder> {
        self.winner
    }
    fn legal(&self) -> Vec<Action> {
        let mut options = Vec::new();
        match self.phase {
            Phase::Ended => {}
            Phase::Draft => options.extend((0..self.current().hand().len()).map(Action::Pick)),
            Phase::Battle => {
                options.push(Action::Pass);
                for card in self.current().hand() {
                    let origin = card.instance();
                    match card.kind() {
                        Kind::Creature => options.extend(
                            Lane::ALL
                                .into_iter()
                                .map(|lane| Action::Summon { origin, lane }),
                        ),
                        _ => options.extend(
                            self.targets()
                                .map(|target| Action::Use { origin, target }),
                        ),
                    }
                }
                for card in self.current().board() {
                    let origin = card.instance();
                    options.extend(self.targets().map(|target| Action::Attack { origin, target }));
                }
                options.retain(|a| self.is_allowed(a));
            }
        }
        options
    }
}

/// Rule queries.
impl Duel {
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        match (self.phase, *action) {
            (Phase::Ended, _) => false,
            (Phase::Draft, Action::Pick(i)) => i < self.current().hand().len(),
            (Phase::Draft, _) => false,
            (Phase::Battle, Action::Pick(_)) => false,
            (Phase::Battle, Action::Pass) => true,
            (Phase::Battle, Action::Summon { origin, lane }) => self.may_summon(origin, lane),
            (Phase::Battle, Action::Use { origin, target }) => self.may_use(origin, target),
            (Phase::Battle, Action::Attack { origin, target }) => self.may_attack(origin, target),
        }
    }
    fn may_afford(&self, card: &Card) -> bool {
        card.cost() as i32 <= self.current().mana()
    }
    fn may_summon(&self, origin: Instance, lane: Lane) -> bool {
        self.in_hand(origin)
            .filter(|c| c.kind().is_creature())
            .filter(|c| self.may_afford(c))
            .is_some_and(|_| self.current().lane(lane).len() < crate::LANE_CAPACITY)
    }
    fn may_use(&self, origin: Instance, target: Option<Instance>) -> bool {
        let ours = target.is_some_and(|t| self.current().locate(t).is_some());
        let theirs = target.is_some_and(|t| self.opposing().locate(t).is_some());
        self.rules.items
            && self
                .in_hand(origin)
                .filter(|c| self.may_afford(c))
                .is_some_and(|c| match c.kind() {
                    Kind::Green => ours,
                    Kind::Red => theirs,
                    Kind::Blue => target.is_none() || theirs,
                    Kind::Creature => false,
                })
    }
    fn may_attack(&self, origin: Instance, target: Option<Instance>) -> bool {
        let Some((lane, i)) = self.current().locate(origin) else {
            return false;
        };
        let attacker = &self.current().lane(lane)[i];
        let enemies = self.opposing().lane(lane);
        let guarded = enemies.iter().any(|c| c.has(Keyword::Guard));
        attacker.ready()
            && attacker.attack() > 0
            && match target {
                None => !guarded,
                Some(t) => enemies
                    .iter()
                    .find(|c| c.instance() == t)
                    .is_some_and(|c| !guarded || c.has(Keyword::Guard)),
            }
    }
    fn in_hand(&self, origin: Instance) -> Option<&Card> {
        self.current()
            .holding(origin)
            .map(|i| &self.current().hand()[i])
    }
    /// Every target an item could name: no target, then own and enemy creatures.
    fn targets(&self) -> impl Iterator<Item = Option<Instance>> + '_ {
        std::iter::once(None).chain(
            self.current()
                .board()
                .chain(self.opposing().board())
                .map(|c| Some(c.instance())),
        )
    }
}

/// Draft.
impl Duel {
    fn offer(&mut self) {
        let offer = self.offers[self.turn as usize - 1].clone();
        for player in self.players.iter_mut() {
            *player.hand_mut() = offer.clone();
        }
    }
    fn pick(&mut self, i: usize) {
        self.instances += 1;
        let card = self.players[self.actor].hand()[i]
            .clone()
            .with_instance(self.instances);
        self.players[self.actor].deck_mut().push(card);
        match self.actor {
            0 => self.actor = 1,
            _ => {
                self.actor = 0;
                self.turn += 1;
                match self.turn as usize > self.rules.n {
                    true => self.battle(),
                    false => self.offer(),
                }
            }
        }
    }
    fn battle(&mut self) {
        log::trace!("[duel] draft over after {} turns", self.rules.n);
        self.phase = Phase::Battle;
        self.turn = 1;
        self.actor = 0;
        for (seat, player) in self.players.iter_mut().enumerate() {
            player.hand_mut().clear();
            player.deck_mut().shuffle(&mut self.rng);
            for _ in 0..OPENING[seat] {
                if let Some(card) = player.deck_mut().pop() {
                    player.hand_mut().push(card);
                }
            }
        }
        self.begin();
    }
}

/// Battle.
impl Duel {
    /// Both players, the actor first.
    fn sides(&mut self) -> (&mut Player, &mut Player) {
        let [first, second] = &mut self.players;
        match self.actor {
            0 => (first, second),
            _ => (second, first),
        }
    }
    fn begin(&mut self) {
        let (me, _) = self.sides();
        me.refill(MAX_MANA);
        let draws = 1 + me.take_bonus();
        for _ in 0..draws {
            if me.hand().len() >= crate::HAND_CAPACITY {
                break;
            }
            match me.deck_mut().pop() {
                Some(card) => me.hand_mut().push(card),
                None => me.break_rune(),
            }
        }
        for lane in Lane::ALL {
            me.lane_mut(lane).iter_mut().for_each(|c| c.set_ready(true));
        }
    }
    fn pass(&mut self) {
        self.actor = 1 - self.actor;
        if self.actor == 0 {
            self.turn += 1;
        }
        self.begin();
    }
    fn take(&mut self, origin: Instance) -> Card {
        let (me, _) = self.sides();
        let i = me.holding(origin).expect("checked by is_allowed");
        let card = me.hand_mut().remove(i);
        me.spend(card.cost() as i32);
        card
    }
    fn summon(&mut self, origin: Instance, lane: Lane) {
        let mut card = self.take(origin);
        card.set_ready(card.has(Keyword::Charge));
        self.effects(&card);
        self.sides().0.lane_mut(lane).push(card);
    }
    fn use_item(&mut self, origin: Instance, target: Option<Instance>) {
        let card = self.take(origin);
        let (me, them) = self.sides();
        match (card.kind(), target) {
            (Kind::Green, Some(t)) => {
                let (lane, i) = me.locate(t).expect("checked by is_allowed");
                let creature = &mut me.lane_mut(lane)[i];
                creature.buff(card.attack(), card.defense());
                creature.grant(card.keywords());
            }
            (Kind::Red | Kind::Blue, Some(t)) => {
                let (lane, i) = them.locate(t).expect("checked by is_allowed");
                let creature = &mut them.lane_mut(lane)[i];
                creature.strip(card.keywords());
                creature.buff(card.attack(), 0);
                creature.wound(-card.defense());
            }
            (Kind::Blue, None) => them.hurt(-card.defense() as i32),
            _ => unreachable!("checked by is_allowed"),
        }
        self.effects(&card);
        self.bury();
    }
    fn attack(&mut self, origin: Instance, target: Option<Instance>) {
        let (me, them) = self.sides();
        let (lane, i) = me.locate(origin).expect("checked by is_allowed");
        let attacker = &mut me.lane_mut(lane)[i];
        attacker.set_ready(false);
        let mut attacker = attacker.clone();
        let dealt = match target {
            None => {
                let damage = attacker.attack();
                them.hurt(damage as i32);
                damage
            }
            Some(t) => {
                let j = them
                    .lane(lane)
                    .iter()
                    .position(|c| c.instance() == t)
                    .expect("checked by is_allowed");
                let mut defender = them.lane(lane)[j].clone();
                let before = defender.defense();
                let dealt = Self::strike(&attacker, &mut defender);
                Self::strike(&defender, &mut attacker);
                if attacker.has(Keyword::Breakthrough) && defender.is_dead() && dealt > 0 {
                    let excess = attacker.attack() as i32 - before as i32;
                    if excess > 0 {
                        them.hurt(excess);
                    }
                }
                them.lane_mut(lane)[j] = defender;
                dealt
            }
        };
        if attacker.has(Keyword::Drain) {
            me.heal(dealt as i32);
        }
        me.lane_mut(lane)[i] = attacker;
        self.bury();
    }
    /// One creature hits another. Returns damage actually dealt.
    fn strike(source: &Card, target: &mut Card) -> i8 {
        let dealt = target.wound(source.attack());
        if dealt > 0 && source.has(Keyword::Lethal) {
            target.buff(0, -target.defense());
        }
        dealt
    }
    /// Applies a played card's effects on both players' health and draws.
    fn effects(&mut self, card: &Card) {
        let (me, them) = self.sides();
        match card.player_hp() {
            hp if hp >= 0 => me.heal(hp as i32),
            hp => me.hurt(-hp as i32),
        }
        match card.enemy_hp() {
            hp if hp >= 0 => them.heal(hp as i32),
            hp => them.hurt(-hp as i32),
        }
        me.queue_draws(card.draw() as i32);
    }
    /// Removes dead creatures from both boards.
    fn bury(&mut self) {
        for player in self.players.iter_mut() {
            for lane in Lane::ALL {
                player.lane_mut(lane).retain(|c| !c.is_dead());
            }
        }
    }
    fn settle(&mut self) {
        if self.phase.is_battle() {
            self.winner = match (self.current().is_dead(), self.opposing().is_dead()) {
                (_, true) => Some(PlayerOrder::from(self.actor)),
                (true, false) => Some(PlayerOrder::from(1 - self.actor)),
                (false, false) => None,
            };
            if let Some(winner) = self.winner {
                log::trace!("[duel] {} wins on turn {}", winner, self.turn);
                self.phase = Phase::Ended;
            }
        }
    }
}
