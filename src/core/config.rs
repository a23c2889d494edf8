//! Cavern configuration.
//!
//! The pre-game menu picks a [`GameSize`]; the engine works from the
//! resulting [`CavernConfig`]:
//! - `dimension`: side length of the square grid
//! - `hazards_per_kind`: how many pits, vortices and predators to place
//! - `starting_arrows`: size of the player's quiver
//!
//! A config is validated before generation draws a single random number, so
//! an undersized board fails fast instead of looping forever in placement.

use serde::{Deserialize, Serialize};

use super::error::{CavernError, Result};

/// Smallest side length that fits a corner entrance, the fountain and one
/// of each hazard with room to spare.
pub const MIN_DIMENSION: usize = 4;

/// Arrows the player starts with.
pub const STARTING_ARROWS: u32 = 5;

/// Number of hazard kinds (pit, vortex, predator).
pub const HAZARD_KINDS: usize = 3;

/// Board size picked from the pre-game menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl GameSize {
    /// All sizes in menu order.
    pub const ALL: [GameSize; 3] = [GameSize::Small, GameSize::Medium, GameSize::Large];

    /// Side length of the grid.
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            GameSize::Small => 4,
            GameSize::Medium => 6,
            GameSize::Large => 9,
        }
    }

    /// Instances of each hazard kind.
    #[must_use]
    pub const fn hazards_per_kind(self) -> usize {
        match self {
            GameSize::Small => 1,
            GameSize::Medium => 2,
            GameSize::Large => 3,
        }
    }

    /// Map a numbered menu choice (1-3) to a size.
    ///
    /// Any other number means the player chose to exit.
    #[must_use]
    pub const fn from_menu_choice(choice: u32) -> Option<GameSize> {
        match choice {
            1 => Some(GameSize::Small),
            2 => Some(GameSize::Medium),
            3 => Some(GameSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameSize::Small => "Small",
            GameSize::Medium => "Medium",
            GameSize::Large => "Large",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for GameSize {
    type Err = CavernError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "1" => Ok(GameSize::Small),
            "medium" | "2" => Ok(GameSize::Medium),
            "large" | "3" => Ok(GameSize::Large),
            other => Err(CavernError::Config {
                reason: format!("unknown game size '{other}'"),
            }),
        }
    }
}

/// Complete configuration for one cavern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CavernConfig {
    /// Side length of the square grid.
    pub dimension: usize,

    /// Instances of each hazard kind to place.
    pub hazards_per_kind: usize,

    /// Arrows in the quiver at the start of the game.
    pub starting_arrows: u32,
}

impl Default for CavernConfig {
    fn default() -> Self {
        Self::for_size(GameSize::default())
    }
}

impl CavernConfig {
    /// Standard configuration for a menu size.
    #[must_use]
    pub fn for_size(size: GameSize) -> Self {
        Self {
            dimension: size.dimension(),
            hazards_per_kind: size.hazards_per_kind(),
            starting_arrows: STARTING_ARROWS,
        }
    }

    /// Set a custom side length.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set a custom hazard count per kind.
    #[must_use]
    pub fn with_hazards_per_kind(mut self, count: usize) -> Self {
        self.hazards_per_kind = count;
        self
    }

    /// Set a custom quiver size.
    #[must_use]
    pub fn with_starting_arrows(mut self, arrows: u32) -> Self {
        self.starting_arrows = arrows;
        self
    }

    /// Total entities placed: entrance, fountain and every hazard.
    ///
    /// Saturates at `usize::MAX`.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.checked_entity_count().unwrap_or(usize::MAX)
    }

    fn checked_entity_count(&self) -> Option<usize> {
        HAZARD_KINDS
            .checked_mul(self.hazards_per_kind)
            .and_then(|hazards| hazards.checked_add(2))
    }

    /// Check the placement preconditions.
    ///
    /// Rejection sampling only terminates if every entity can get its own
    /// cell, so anything tighter than that is refused here.
    pub fn validate(&self) -> Result<()> {
        if self.dimension < MIN_DIMENSION {
            return Err(CavernError::Config {
                reason: format!(
                    "dimension {} is below the minimum of {}",
                    self.dimension, MIN_DIMENSION
                ),
            });
        }

        let cells = self.dimension.checked_mul(self.dimension).ok_or_else(|| CavernError::Config {
            reason: format!("dimension {} is too large", self.dimension),
        })?;
        let entities = self.checked_entity_count().ok_or_else(|| CavernError::Config {
            reason: format!("{} hazards per kind is too many", self.hazards_per_kind),
        })?;

        if entities > cells {
            return Err(CavernError::Config {
                reason: format!("{entities} entities do not fit in {cells} cells"),
            });
        }

        Ok(())
    }
}
