//! Per-game mutable state: player position, fountain flag, quiver, status.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Escaped through the entrance with the fountain running.
    Won,
    LostToPit,
    LostToPredator,
}

impl GameStatus {
    /// Won or lost. No further turns are resolved.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Either of the death states.
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, GameStatus::LostToPit | GameStatus::LostToPredator)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::LostToPit => "lost to a pit",
            GameStatus::LostToPredator => "lost to a predator",
        };
        f.write_str(name)
    }
}

/// Player-side state owned by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current cell.
    pub position: Position,

    /// Set once the player enables the fountain while standing on it.
    pub fountain_enabled: bool,

    /// Arrows left in the quiver.
    pub arrows: u32,

    pub status: GameStatus,
}

impl GameState {
    /// Fresh state: at the entrance, fountain dormant, full quiver.
    #[must_use]
    pub fn new(entrance: Position, arrows: u32) -> Self {
        Self {
            position: entrance,
            fountain_enabled: false,
            arrows,
            status: GameStatus::Playing,
        }
    }
}
