/// Player commands: single-character strings, case-insensitive.
///
/// | key | command     |
/// |-----|-------------|
/// | W   | move up     |
/// | A   | move left   |
/// | S   | move down   |
/// | D   | move right  |
/// | F   | fire        |
/// | P   | pause       |
use std::str::FromStr;

use crate::entities::Direction;
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Fire,
    Pause,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" | "w" => Ok(Command::Move(Direction::Up)),
            "A" | "a" => Ok(Command::Move(Direction::Left)),
            "S" | "s" => Ok(Command::Move(Direction::Down)),
            "D" | "d" => Ok(Command::Move(Direction::Right)),
            "F" | "f" => Ok(Command::Fire),
            "P" | "p" => Ok(Command::Pause),
            other => Err(GameError::InvalidInput(other.to_string())),
        }
    }
}
