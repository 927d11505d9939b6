use crate::encoding::*;
use crate::gameplay::*;
use anyhow::Context;

/// Which seat the learner takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    First,
    Second,
    /// Switch seats every episode, starting first.
    Alternate,
}

impl Role {
    /// Seat for the `episode`-th episode, counting from zero.
    pub fn seat(&self, episode: usize) -> PlayerOrder {
        match self {
            Self::First => PlayerOrder::First,
            Self::Second => PlayerOrder::Second,
            Self::Alternate => PlayerOrder::from(episode % 2),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "alternate" => Ok(Self::Alternate),
            other => anyhow::bail!("unknown role {:?}, expected first, second or alternate", other),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

/// Everything that fixes an environment's shape and behavior.
///
/// Every field has a default, so a JSON file only needs the ones it changes.
///
/// - `seed`: Seeds every episode; `None` draws from entropy
/// - `items`: Item cards on or off
/// - `k`, `n`: Cards offered per draft turn, and draft turns
/// - `history`, `curve`, `sorted`: Draft observation options
/// - `battles`: Battles played to score a finished draft
/// - `mask`: Attach an action-legality mask to every step
/// - `role`: The learner's seat against an opponent
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: Option<u64>,
    pub items: bool,
    pub k: usize,
    pub n: usize,
    pub history: bool,
    pub curve: bool,
    pub sorted: bool,
    pub battles: usize,
    pub mask: bool,
    pub role: Role,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            items: true,
            k: crate::DRAFT_CHOICES,
            n: crate::DRAFT_TURNS,
            history: false,
            curve: false,
            sorted: false,
            battles: 1,
            mask: false,
            role: Role::First,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text).with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=crate::DRAFT_ACTIONS).contains(&self.k),
            "k = {} must lie in 1..={}",
            self.k,
            crate::DRAFT_ACTIONS
        );
        anyhow::ensure!(self.n > 0, "the draft needs at least one turn");
        anyhow::ensure!(self.battles > 0, "a draft needs at least one battle to be scored");
        Ok(())
    }
    pub fn rules(&self) -> Rules {
        Rules {
            items: self.items,
            k: self.k,
            n: self.n,
        }
    }
    pub fn battle_observation_len(&self) -> usize {
        BattleObserver::<Normalized>::size(self.items)
    }
    pub fn draft_observation_len(&self) -> usize {
        DraftObserver::<Normalized>::size(self.k, self.n, self.history, self.curve)
    }
    pub fn battle_actions(&self) -> usize {
        Codec::from(self.items).space(Phase::Battle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = serde_json::from_str::<Config>(r#"{ "items": false, "role": "alternate" }"#).expect("parse");
        assert!(!config.items);
        assert_eq!(config.role, Role::Alternate);
        assert_eq!(config.k, 3);
        assert_eq!(config.battles, 1);
        assert_eq!(config.battle_observation_len(), 206);
        assert_eq!(config.battle_actions(), 41);
    }

    #[test]
    fn validation() {
        assert!(Config::default().validate().is_ok());
        assert!(Config { k: 4, ..Config::default() }.validate().is_err());
        assert!(Config { k: 0, ..Config::default() }.validate().is_err());
        assert!(Config { n: 0, ..Config::default() }.validate().is_err());
        assert!(Config { battles: 0, ..Config::default() }.validate().is_err());
    }

    #[test]
    fn draft_shapes() {
        let config = Config {
            history: true,
            curve: true,
            ..Config::default()
        };
        assert_eq!(config.draft_observation_len(), 48 + 480 + 13);
    }

    #[test]
    fn alternate_role_switches_seats() {
        let seats = (0..4).map(|e| Role::Alternate.seat(e)).collect::<Vec<_>>();
        assert_eq!(
            seats,
            vec![PlayerOrder::First, PlayerOrder::Second, PlayerOrder::First, PlayerOrder::Second]
        );
        assert_eq!("Second".parse::<Role>().ok(), Some(Role::Second));
    }

    #[test]
    fn load_reports_missing_files() {
        let error = Config::load("no/such/config.json").expect_err("missing file");
        assert!(error.to_string().contains("no/such/config.json"));
    }
}
