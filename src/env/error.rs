/// Errors that can occur while stepping an environment.
///
/// Both are raised before the game is touched. An action the engine merely
/// refuses is not an error: it is reported through [`Info::invalid`](super::Info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The input cannot be read as an action at all.
    Malformed(String),
    /// The episode is already decided; reset first.
    GameEnded,
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed action: {}", s),
            Self::GameEnded => write!(f, "game already ended"),
        }
    }
}

impl std::error::Error for EnvError {}
