use core::fmt;

use crate::entities::Direction;

/// Errors raised by gameplay commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The ship tried to leave the grid. Its position is unchanged.
    BoundaryExceeded(Direction),
    /// A command string outside W/A/S/D/F/P.
    InvalidInput(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryExceeded(direction) => {
                write!(f, "Cannot move {}. Out of bounds!", direction.as_str())
            }
            Self::InvalidInput(_) => write!(f, "Invalid input. Use W, A, S, D, F, or P."),
        }
    }
}

impl std::error::Error for GameError {}

/// Errors raised by the achievement manager. These indicate a caller or
/// configuration fault rather than a runtime condition.
#[derive(Clone, Debug, PartialEq)]
pub enum AchievementError {
    AlreadyRegistered(String),
    NotFound(String),
    /// Progress outside `[0.0, 1.0]` (or NaN).
    InvalidProgress(f64),
}

impl fmt::Display for AchievementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered(name) => {
                write!(f, "achievement '{name}' is already registered")
            }
            Self::NotFound(name) => write!(f, "achievement '{name}' could not be found"),
            Self::InvalidProgress(value) => {
                write!(f, "progress {value} is outside the range 0.0..=1.0")
            }
        }
    }
}

impl std::error::Error for AchievementError {}
