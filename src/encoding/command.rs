use crate::env::EnvError;
use crate::gameplay::Action;
use std::str::FromStr;

/// What a policy hands to `step`: a flat action code or a structured action.
///
/// Codes stay signed here so that a negative input survives long enough to be
/// rejected as malformed instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Code(i64),
    Act(Action),
}

impl From<usize> for Command {
    fn from(code: usize) -> Self {
        Self::Code(code as i64)
    }
}
impl From<i64> for Command {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}
impl From<i32> for Command {
    fn from(code: i32) -> Self {
        Self::Code(code as i64)
    }
}
impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Act(action)
    }
}

/// Policy heads often emit floats; only integral values are codes.
impl TryFrom<f32> for Command {
    type Error = EnvError;
    fn try_from(x: f32) -> Result<Self, Self::Error> {
        match x.is_finite() && x.fract() == 0. {
            true => Ok(Self::Code(x as i64)),
            false => Err(EnvError::Malformed(format!("{x} is not an integer code"))),
        }
    }
}

impl FromStr for Command {
    type Err = EnvError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::Code)
            .map_err(|_| EnvError::Malformed(format!("{s:?} is not an action code")))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "#{code}"),
            Self::Act(action) => write!(f, "{action}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!(" 17 ".parse::<Command>(), Ok(Command::Code(17)));
        assert_eq!("-3".parse::<Command>(), Ok(Command::Code(-3)));
        assert!(matches!("attack".parse::<Command>(), Err(EnvError::Malformed(_))));
    }

    #[test]
    fn rejects_fractional_floats() {
        assert_eq!(Command::try_from(4f32), Ok(Command::Code(4)));
        assert!(Command::try_from(4.5f32).is_err());
        assert!(Command::try_from(f32::NAN).is_err());
    }
}
