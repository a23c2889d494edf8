//! Player commands.
//!
//! Commands arrive already parsed. The text mapping lives here so every
//! front end (terminal loop, Python agent, replay file) agrees on it:
//!
//! ```
//! use fountain_cavern::core::Direction;
//! use fountain_cavern::rules::Command;
//!
//! assert_eq!(Command::from_input("Move North"), Command::Move(Direction::North));
//! assert_eq!(Command::from_input("  shoot west "), Command::Shoot(Direction::West));
//! assert_eq!(Command::from_input("dance"), Command::Invalid);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// One player action for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Shoot(Direction),
    EnableFountain,
    /// Anything the input layer could not map. Resolves as a no-op.
    Invalid,
}

impl Command {
    /// Every real command, in the order the command menu lists them.
    pub const MENU: [Command; 9] = [
        Command::Move(Direction::North),
        Command::Move(Direction::South),
        Command::Move(Direction::East),
        Command::Move(Direction::West),
        Command::Shoot(Direction::North),
        Command::Shoot(Direction::South),
        Command::Shoot(Direction::East),
        Command::Shoot(Direction::West),
        Command::EnableFountain,
    ];

    /// Map typed text to a command. Case and surrounding whitespace are
    /// ignored; anything unrecognised is `Invalid`.
    #[must_use]
    pub fn from_input(input: &str) -> Command {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized == "enable fountain" {
            return Command::EnableFountain;
        }

        let mut words = normalized.split_whitespace();
        let (Some(verb), Some(dir), None) = (words.next(), words.next(), words.next()) else {
            return Command::Invalid;
        };
        let Some(direction) = Direction::ALL.into_iter().find(|d| d.name() == dir) else {
            return Command::Invalid;
        };

        match verb {
            "move" => Command::Move(direction),
            "shoot" => Command::Shoot(direction),
            _ => Command::Invalid,
        }
    }

    /// Menu label, e.g. "Move North".
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Command::Move(dir) => format!("Move {dir}"),
            Command::Shoot(dir) => format!("Shoot {dir}"),
            Command::EnableFountain => "Enable Fountain".to_string(),
            Command::Invalid => String::new(),
        }
    }
}

impl std::str::FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Command::from_input(s))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Invalid => f.write_str("invalid"),
            other => f.write_str(&other.label().to_ascii_lowercase()),
        }
    }
}
