use super::*;
use crate::gameplay::*;

/// A scripted agent chosen at runtime, by name.
#[derive(Debug, Clone)]
pub enum Bot {
    Random(RandomAgent),
    MaxAttack(MaxAttackAgent),
}

impl Default for Bot {
    fn default() -> Self {
        Self::Random(RandomAgent::default())
    }
}

impl Agent for Bot {
    fn act<G: Engine>(&mut self, game: &G) -> Action {
        match self {
            Self::Random(agent) => agent.act(game),
            Self::MaxAttack(agent) => agent.act(game),
        }
    }
    fn reset(&mut self) {
        match self {
            Self::Random(agent) => agent.reset(),
            Self::MaxAttack(agent) => agent.reset(),
        }
    }
    fn seed(&mut self, seed: u64) {
        match self {
            Self::Random(agent) => agent.seed(seed),
            Self::MaxAttack(agent) => agent.seed(seed),
        }
    }
}

impl std::str::FromStr for Bot {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random(RandomAgent::default())),
            "max-attack" | "max_attack" => Ok(Self::MaxAttack(MaxAttackAgent)),
            other => Err(anyhow::anyhow!("unknown bot {:?}, expected random or max-attack", other)),
        }
    }
}

impl std::fmt::Display for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random(_) => write!(f, "random"),
            Self::MaxAttack(_) => write!(f, "max-attack"),
        }
    }
}
